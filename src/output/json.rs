//! JSON output formatter for machine processing

use crate::generator::GenerateResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &GenerateResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyEntry;
    use std::path::PathBuf;

    #[test]
    fn test_json_output() {
        let result = GenerateResult {
            path: PathBuf::from("README.md"),
            bytes_written: 12,
            dependencies: vec![
                DependencyEntry::installed("numpy", "1.26.4"),
                DependencyEntry::missing("torch"),
            ],
        };

        let mut buffer = Vec::new();
        JsonFormatter::new().format(&result, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["path"], "README.md");
        assert_eq!(value["bytes_written"], 12);
        assert_eq!(value["dependencies"][0]["name"], "numpy");
        assert_eq!(value["dependencies"][0]["version"], "1.26.4");
        assert!(value["dependencies"][1]["version"].is_null());
    }
}
