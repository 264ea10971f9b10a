//! Structured analysis output.
//!
//! The core never prints. Classification, graph building, and rule
//! evaluation produce [`Diagnostic`]s and [`Verdict`]s; a presentation
//! layer renders them as text (via `Display`, reproducing the reference
//! line formats) or as JSON (via serde).

use std::fmt;

use serde::Serialize;

use crate::model::Unit;

/// An informational or warning trace emitted during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A unit matched a declared layer's pattern.
    LayerAssigned {
        /// Module-qualified unit path.
        unit: String,
        /// The declared layer it was assigned.
        layer: String,
    },
    /// A unit matched no declared layer and is not at its module root.
    UnknownLayer {
        /// Module-qualified unit path.
        unit: String,
    },
    /// An internal import targets a unit classified `unknown`.
    UnknownImport {
        /// The importing unit.
        importer: String,
        /// The imported unit.
        imported: String,
    },
    /// A layer-dependency edge, reported regardless of verdict.
    LayerEdge {
        /// The importing unit.
        importer: String,
        /// The importing unit's layer.
        layer: String,
        /// The layer depended on.
        dep_layer: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayerAssigned { unit, layer } => {
                write!(f, "[debug] pkg `{unit}` is in layer `{layer}`")
            }
            Self::UnknownLayer { unit } => {
                write!(f, "[warn] pkg `{unit}` is in layer `UNKNOWN`")
            }
            Self::UnknownImport { importer, imported } => {
                write!(f, "[warn] pkg `{importer}` imports UNKNOWN `{imported}`")
            }
            Self::LayerEdge {
                importer,
                layer,
                dep_layer,
            } => {
                write!(f, "[debug] layer deps: {importer} ({layer}) -> {dep_layer}")
            }
        }
    }
}

/// A disallowed edge found by the rule evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// A layer edge whose governing rule denies it.
    LayerViolation {
        /// The importing unit.
        unit: String,
        /// The importing unit's layer.
        layer: String,
        /// The layer depended on.
        dep_layer: String,
    },
    /// An external edge whose governing rule denies it.
    ExternalViolation {
        /// The importing unit.
        unit: String,
        /// The importing unit's layer.
        layer: String,
        /// The external package id, verbatim from the import.
        external: String,
    },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayerViolation {
                unit,
                layer,
                dep_layer,
            } => write!(f, "LAYER VIOLATION: {unit} ({layer}) -> {dep_layer}"),
            Self::ExternalViolation {
                unit,
                layer,
                external,
            } => write!(f, "EXTERNAL VIOLATION: {unit} ({layer}) -> {external}"),
        }
    }
}

/// Everything one analysis run produced.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisReport {
    /// Finalized units with their layers and dependency sets, in path order.
    pub units: Vec<Unit>,
    /// Trace and warning diagnostics, in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Rule violations, in evaluation order.
    pub verdicts: Vec<Verdict>,
}

impl AnalysisReport {
    /// Whether any rule violation was found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.verdicts.is_empty()
    }

    /// Diagnostics at warning strength (unknown layers and unknown imports).
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| {
            matches!(
                d,
                Diagnostic::UnknownLayer { .. } | Diagnostic::UnknownImport { .. }
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_lines_match_reference_format() {
        insta::assert_snapshot!(
            Diagnostic::LayerAssigned {
                unit: "m/domain".into(),
                layer: "domain".into(),
            }
            .to_string(),
            @"[debug] pkg `m/domain` is in layer `domain`"
        );
        insta::assert_snapshot!(
            Diagnostic::UnknownLayer {
                unit: "m/scripts".into(),
            }
            .to_string(),
            @"[warn] pkg `m/scripts` is in layer `UNKNOWN`"
        );
        insta::assert_snapshot!(
            Diagnostic::UnknownImport {
                importer: "m/app".into(),
                imported: "m/scripts".into(),
            }
            .to_string(),
            @"[warn] pkg `m/app` imports UNKNOWN `m/scripts`"
        );
        insta::assert_snapshot!(
            Diagnostic::LayerEdge {
                importer: "m/app".into(),
                layer: "application".into(),
                dep_layer: "domain".into(),
            }
            .to_string(),
            @"[debug] layer deps: m/app (application) -> domain"
        );
    }

    #[test]
    fn verdict_lines_match_reference_format() {
        insta::assert_snapshot!(
            Verdict::LayerViolation {
                unit: "m/domain".into(),
                layer: "domain".into(),
                dep_layer: "infrastructure".into(),
            }
            .to_string(),
            @"LAYER VIOLATION: m/domain (domain) -> infrastructure"
        );
        insta::assert_snapshot!(
            Verdict::ExternalViolation {
                unit: "m/domain".into(),
                layer: "domain".into(),
                external: "github.com/lib/pq".into(),
            }
            .to_string(),
            @"EXTERNAL VIOLATION: m/domain (domain) -> github.com/lib/pq"
        );
    }

    #[test]
    fn warnings_filter_out_debug_diagnostics() {
        let report = AnalysisReport {
            units: Vec::new(),
            diagnostics: vec![
                Diagnostic::LayerAssigned {
                    unit: "m/a".into(),
                    layer: "x".into(),
                },
                Diagnostic::UnknownLayer { unit: "m/b".into() },
            ],
            verdicts: Vec::new(),
        };
        assert_eq!(report.warnings().count(), 1);
    }
}
