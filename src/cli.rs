//! CLI argument parsing module for docgen

use crate::generator::DEFAULT_OUTPUT;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// README generator with installed dependency versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "docgen",
    version,
    about = "Generate README.md with installed dependency versions"
)]
pub struct CliArgs {
    /// Output file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Package metadata directory to search (can be specified multiple times;
    /// default: the local Python interpreter's import path)
    #[arg(long = "site-packages", value_name = "DIR", action = ArgAction::Append)]
    pub site_packages: Vec<PathBuf>,

    /// Output the result in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no confirmation message
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Log filter directive for the selected verbosity
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "docgen=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["docgen"]);
        assert_eq!(args.output, PathBuf::from("README.md"));
        assert!(args.site_packages.is_empty());
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_output_short_and_long() {
        let args = CliArgs::parse_from(["docgen", "-o", "docs/README.md"]);
        assert_eq!(args.output, PathBuf::from("docs/README.md"));

        let args = CliArgs::parse_from(["docgen", "--output", "OUT.md"]);
        assert_eq!(args.output, PathBuf::from("OUT.md"));
    }

    #[test]
    fn test_site_packages_multiple() {
        let args = CliArgs::parse_from([
            "docgen",
            "--site-packages",
            "/venv/lib/python3.12/site-packages",
            "--site-packages",
            "/usr/lib/python3/dist-packages",
        ]);
        assert_eq!(
            args.site_packages,
            vec![
                PathBuf::from("/venv/lib/python3.12/site-packages"),
                PathBuf::from("/usr/lib/python3/dist-packages"),
            ]
        );
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["docgen", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["docgen", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_json_output() {
        let args = CliArgs::parse_from(["docgen", "--json"]);
        assert!(args.json);
    }

    #[test]
    fn test_log_directive() {
        let args = CliArgs::parse_from(["docgen"]);
        assert_eq!(args.log_directive(), "warn");

        let args = CliArgs::parse_from(["docgen", "--verbose"]);
        assert_eq!(args.log_directive(), "docgen=debug");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(CliArgs::try_parse_from(["docgen", "extra"]).is_err());
    }
}
