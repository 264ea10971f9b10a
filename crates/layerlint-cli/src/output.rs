//! Rendering of analysis reports.

use anyhow::Result;
use layerlint_core::AnalysisReport;

use crate::OutputFormat;

/// Prints a report to stdout in the requested format.
pub fn print(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}

/// Line-oriented text: classification and edge traces first, then one
/// line per violation.
fn print_text(report: &AnalysisReport) {
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
    for verdict in &report.verdicts {
        println!("{verdict}");
    }
}

fn print_json(report: &AnalysisReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
