//! Dependency version entries

use crate::escape::escape_html;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependencies listed in the generated README, in report order
pub const DOCUMENTED_DEPENDENCIES: [&str; 6] = [
    "opencv-python",
    "numpy",
    "moviepy",
    "ultralytics",
    "supervision",
    "torch",
];

/// Marker rendered in place of a version when lookup fails
pub const NOT_INSTALLED: &str = "Not installed";

/// A dependency name paired with its installed version, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    /// Package name as listed in the report
    pub name: String,
    /// Installed version, `None` when the package could not be resolved
    pub version: Option<String>,
}

impl DependencyEntry {
    /// Creates an entry for an installed package
    pub fn installed(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Creates an entry for a package that is not installed
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Returns true if a version was resolved
    pub fn is_installed(&self) -> bool {
        self.version.is_some()
    }

    /// Report line with name and version HTML-escaped
    pub fn report_line(&self) -> String {
        let version = match &self.version {
            Some(v) => escape_html(v),
            None => NOT_INSTALLED.to_string(),
        };
        format!("- {}: {}", escape_html(&self.name), version)
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} {}", self.name, v),
            None => write!(f, "{} ({})", self.name, NOT_INSTALLED.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_installed() {
        let entry = DependencyEntry::installed("numpy", "1.26.4");
        assert_eq!(entry.name, "numpy");
        assert_eq!(entry.version.as_deref(), Some("1.26.4"));
        assert!(entry.is_installed());
    }

    #[test]
    fn test_entry_missing() {
        let entry = DependencyEntry::missing("torch");
        assert!(entry.version.is_none());
        assert!(!entry.is_installed());
    }

    #[test]
    fn test_report_line_installed() {
        let entry = DependencyEntry::installed("numpy", "1.26.4");
        assert_eq!(entry.report_line(), "- numpy: 1.26.4");
    }

    #[test]
    fn test_report_line_missing() {
        let entry = DependencyEntry::missing("opencv-python");
        assert_eq!(entry.report_line(), "- opencv-python: Not installed");
    }

    #[test]
    fn test_report_line_escapes_name_and_version() {
        let entry = DependencyEntry::installed("a<b>&\"c'", "1.0'rc\"<1>&");
        assert_eq!(
            entry.report_line(),
            "- a&lt;b&gt;&amp;&quot;c&#x27;: 1.0&#x27;rc&quot;&lt;1&gt;&amp;"
        );
    }

    #[test]
    fn test_report_line_escapes_name_when_missing() {
        let entry = DependencyEntry::missing("<pkg>");
        assert_eq!(entry.report_line(), "- &lt;pkg&gt;: Not installed");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", DependencyEntry::installed("torch", "2.3.0")),
            "torch 2.3.0"
        );
        assert_eq!(
            format!("{}", DependencyEntry::missing("torch")),
            "torch (not installed)"
        );
    }

    #[test]
    fn test_documented_dependencies_order() {
        assert_eq!(DOCUMENTED_DEPENDENCIES.len(), 6);
        assert_eq!(DOCUMENTED_DEPENDENCIES[0], "opencv-python");
        assert_eq!(DOCUMENTED_DEPENDENCIES[5], "torch");
    }

    #[test]
    fn test_serde_entry() {
        let entry = DependencyEntry::missing("moviepy");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"moviepy","version":null}"#);
        let parsed: DependencyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
