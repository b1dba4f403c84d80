//! Dependency version report
//!
//! Resolves each documented dependency through a `VersionProvider` and
//! renders the Markdown list embedded in the README. Lookup failures are
//! reported as "Not installed" and never propagated.

use crate::domain::DependencyEntry;
use crate::registry::VersionProvider;
use tracing::debug;

/// Builds the dependency version report from a version provider
pub struct VersionReporter<P> {
    provider: P,
}

impl<P: VersionProvider> VersionReporter<P> {
    /// Create a reporter over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve a single dependency, treating any failure as not installed
    pub fn lookup(&self, name: &str) -> DependencyEntry {
        match self.provider.resolve(name) {
            Ok(Some(version)) => DependencyEntry::installed(name, version),
            Ok(None) => {
                debug!(package = name, registry = self.provider.registry_name(), "not installed");
                DependencyEntry::missing(name)
            }
            Err(e) => {
                debug!(
                    package = name,
                    registry = self.provider.registry_name(),
                    error = %e,
                    "metadata lookup failed"
                );
                DependencyEntry::missing(name)
            }
        }
    }

    /// Resolve every name, preserving input order
    pub fn collect<S: AsRef<str>>(&self, names: &[S]) -> Vec<DependencyEntry> {
        names.iter().map(|name| self.lookup(name.as_ref())).collect()
    }
}

/// Render entries as one `- name: version` line each, joined by newlines
pub fn render_report(entries: &[DependencyEntry]) -> String {
    entries
        .iter()
        .map(DependencyEntry::report_line)
        .collect::<Vec<_>>()
        .join("\n")
}
