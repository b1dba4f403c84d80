//! docgen - README generator
//!
//! Writes README.md with the installed versions of the documented
//! dependencies embedded in the "Dependency Versions" section.

use clap::Parser;
use docgen::cli::CliArgs;
use docgen::generator::{GeneratorConfig, ReadmeGenerator};
use docgen::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::new(args.log_directive()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    if args.verbose {
        eprintln!("docgen v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Output: {}", args.output.display());
    }

    let config = GeneratorConfig::from_cli(args.output.clone(), args.site_packages.clone());
    let registry = config.registry();
    tracing::debug!(roots = ?registry.roots(), "metadata search roots");

    let generator = ReadmeGenerator::new(registry, &config.output);
    let result = generator.generate()?;

    let mut stdout = io::stdout().lock();
    let color = stdout.is_terminal();
    let formatter = create_formatter(OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        color,
    ));
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
