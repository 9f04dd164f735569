//! vercheck - CI package-version comparison helper
//!
//! Resolves a configuration, fetches the latest remote version, reads the
//! local package.json version, and emits `latest_version`,
//! `current_version`, `matches`, `newer`, and `diff` pipeline outputs.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use vercheck::cli::CliArgs;
use vercheck::config::Config;
use vercheck::runner::{RunReport, Runner};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    if args.verbose {
        eprintln!("vercheck v{}", env!("CARGO_PKG_VERSION"));
    }

    let config = Config::resolve(&args)?;

    if args.verbose {
        eprintln!("Source: {} '{}'", config.source, config.source_id);
        eprintln!("Directory: {}", config.directory.display());
    }

    let runner = Runner::new(config)?;
    let report = runner.run().await?;

    if args.verbose && !args.quiet {
        print_summary(&report);
    }

    Ok(())
}

/// Human-readable one-line summary, printed to stderr
fn print_summary(report: &RunReport) {
    let comparison = &report.comparison;

    let relation = if comparison.matches {
        "matches".green()
    } else if comparison.newer {
        "is ahead of".yellow()
    } else {
        "is behind".red()
    };

    match comparison.diff {
        Some(diff) => eprintln!(
            "{} {} {} ({})",
            report.current_version.bold(),
            relation,
            report.latest_version.bold(),
            diff
        ),
        None => eprintln!(
            "{} {} {}",
            report.current_version.bold(),
            relation,
            report.latest_version.bold()
        ),
    }
}
