//! Orchestrates the analysis pipeline: classify, build graph, evaluate.

use tracing::info;

use crate::classify::classify_units;
use crate::config::Config;
use crate::evaluate::evaluate;
use crate::graph::build_dependencies;
use crate::model::SourceUnit;
use crate::report::AnalysisReport;

/// Runs the full pipeline over a batch of discovered source units.
///
/// The entire unit table is built in memory before any rule is evaluated;
/// graph building needs the complete table to resolve internal imports.
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Creates an analyzer for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Classifies units, derives their dependency sets, and evaluates the
    /// rule table, returning a structured report.
    #[must_use]
    pub fn analyze(&self, sources: Vec<SourceUnit>) -> AnalysisReport {
        info!("classifying {} unit(s)", sources.len());
        let (mut units, mut diagnostics) = classify_units(sources, &self.config);

        build_dependencies(&mut units, &mut diagnostics);

        let evaluation = evaluate(&units, &self.config.dependency_rules);
        diagnostics.extend(evaluation.traces);

        info!(
            "analysis complete: {} unit(s), {} violation(s)",
            units.len(),
            evaluation.verdicts.len()
        );

        AnalysisReport {
            units: units.into_units(),
            diagnostics,
            verdicts: evaluation.verdicts,
        }
    }
}
