//! Rule evaluation: walks discovered edges against the ordered rule table.

use crate::config::DependencyRule;
use crate::model::UnitSet;
use crate::pattern::rule_matches;
use crate::report::{Diagnostic, Verdict};

/// The structured result of one evaluation pass.
#[derive(Debug, Default)]
pub struct Evaluation {
    /// Disallowed edges, in evaluation order.
    pub verdicts: Vec<Verdict>,
    /// One `LayerEdge` trace per layer dependency, regardless of verdict.
    pub traces: Vec<Diagnostic>,
}

/// Evaluates every layer and external edge against the rule table.
///
/// Rules are scanned in declaration order; the first rule whose `from`
/// matches the unit's layer and whose `to` matches the candidate governs
/// the edge. A governing rule with `allow = false` yields a verdict. An
/// edge matching no rule at all is implicitly permitted. Each edge is
/// judged independently, so one unit may produce several verdicts.
#[must_use]
pub fn evaluate(units: &UnitSet, rules: &[DependencyRule]) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for unit in units.iter() {
        for dep_layer in &unit.layer_deps {
            if let Some(rule) = governing_rule(&unit.layer, dep_layer, rules) {
                if !rule.allow {
                    evaluation.verdicts.push(Verdict::LayerViolation {
                        unit: unit.path.clone(),
                        layer: unit.layer.clone(),
                        dep_layer: dep_layer.clone(),
                    });
                }
            }
            evaluation.traces.push(Diagnostic::LayerEdge {
                importer: unit.path.clone(),
                layer: unit.layer.clone(),
                dep_layer: dep_layer.clone(),
            });
        }

        for external in &unit.external_deps {
            if let Some(rule) = governing_rule(&unit.layer, external, rules) {
                if !rule.allow {
                    evaluation.verdicts.push(Verdict::ExternalViolation {
                        unit: unit.path.clone(),
                        layer: unit.layer.clone(),
                        external: external.clone(),
                    });
                }
            }
        }
    }

    evaluation
}

/// First rule in declaration order matching the (from-layer, to) edge.
fn governing_rule<'a>(
    from_layer: &str,
    to: &str,
    rules: &'a [DependencyRule],
) -> Option<&'a DependencyRule> {
    rules
        .iter()
        .find(|rule| rule_matches(from_layer, &rule.from) && rule_matches(to, &rule.to))
}
