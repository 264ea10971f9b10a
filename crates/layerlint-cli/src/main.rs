//! layerlint CLI tool.
//!
//! Usage:
//! ```bash
//! layerlint --project-root ./myproject --config ./layers.yaml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use layerlint_core::{Analyzer, Config};

mod output;

/// Architecture-conformance checker: verifies that a Go codebase respects
/// its declared layering.
#[derive(Parser)]
#[command(name = "layerlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the project to analyze
    #[arg(long)]
    project_root: PathBuf,

    /// Path to the configuration YAML file
    #[arg(long)]
    config: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Exit non-zero when any violation is found (the default reports
    /// violations without failing the process)
    #[arg(long)]
    deny_violations: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for analysis reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable line-oriented text.
    #[default]
    Text,
    /// JSON with units, diagnostics, and verdicts.
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    config.validate().context("config validation failed")?;

    anyhow::ensure!(
        cli.project_root.is_dir(),
        "project root {} is not a directory",
        cli.project_root.display()
    );

    let outcome = layerlint_go::scan(&cli.project_root, &config.exclude_dirs);
    tracing::info!("discovered {} package(s)", outcome.units.len());

    let report = Analyzer::new(config).analyze(outcome.units);
    output::print(&report, cli.format)?;

    // Scan errors are reported after the analysis of everything that did
    // parse, and still fail the run.
    for error in &outcome.errors {
        eprintln!("error: {error}");
    }
    if !outcome.errors.is_empty() {
        eprintln!("error: {} file(s) could not be scanned", outcome.errors.len());
        return Ok(ExitCode::FAILURE);
    }

    if cli.deny_violations && report.has_violations() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
