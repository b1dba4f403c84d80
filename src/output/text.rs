//! Text output formatter for human-readable display

use crate::generator::GenerateResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter printing the confirmation message
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn success_message(&self, result: &GenerateResult) -> String {
        let message = format!("{} generated successfully!", result.path.display());
        if self.color {
            message.green().to_string()
        } else {
            message
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &GenerateResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if self.verbosity == Verbosity::Verbose {
            for entry in &result.dependencies {
                let line = format!("  {}", entry);
                if self.color && !entry.is_installed() {
                    writeln!(writer, "{}", line.dimmed())?;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
        }

        writeln!(writer, "{}", self.success_message(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyEntry;
    use std::path::PathBuf;

    fn sample_result() -> GenerateResult {
        GenerateResult {
            path: PathBuf::from("README.md"),
            bytes_written: 4096,
            dependencies: vec![
                DependencyEntry::installed("numpy", "1.26.4"),
                DependencyEntry::missing("torch"),
            ],
        }
    }

    fn render(formatter: &TextFormatter) -> String {
        let mut buffer = Vec::new();
        formatter.format(&sample_result(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_normal_output() {
        let formatter = TextFormatter::new(Verbosity::Normal, false);
        assert_eq!(render(&formatter), "README.md generated successfully!\n");
    }

    #[test]
    fn test_quiet_output() {
        let formatter = TextFormatter::new(Verbosity::Quiet, false);
        assert_eq!(render(&formatter), "");
    }

    #[test]
    fn test_verbose_output_lists_dependencies() {
        let formatter = TextFormatter::new(Verbosity::Verbose, false);
        assert_eq!(
            render(&formatter),
            "  numpy 1.26.4\n  torch (not installed)\nREADME.md generated successfully!\n"
        );
    }
}
