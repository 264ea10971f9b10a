//! Layer classification: maps unit paths to declared layers.

use tracing::debug;

use crate::config::Config;
use crate::model::{SourceUnit, Unit, UnitSet, LAYER_ROOT, LAYER_UNKNOWN};
use crate::pattern::path_matches;
use crate::report::Diagnostic;

/// Resolves the layer for a unit from its module-relative path.
///
/// Declared layers are scanned in declaration order and the first layer
/// with a matching pattern wins, so a unit matching two layers' patterns
/// is assigned deterministically. Unmatched units fall back to
/// [`LAYER_ROOT`] when they sit at the module root (empty relative path),
/// otherwise to [`LAYER_UNKNOWN`].
#[must_use]
pub fn classify_layer(rel_path: &str, config: &Config) -> String {
    for layer in &config.layers {
        for pattern in &layer.patterns {
            if path_matches(rel_path, pattern) {
                return layer.name.clone();
            }
        }
    }
    if rel_path.is_empty() {
        LAYER_ROOT.to_string()
    } else {
        LAYER_UNKNOWN.to_string()
    }
}

/// Classifies every source unit and builds the discovered-unit table.
///
/// Sources are processed in path order so the diagnostic stream is stable
/// across runs. One `LayerAssigned` diagnostic is emitted per unit placed
/// in a declared layer, one `UnknownLayer` warning per unit that matched
/// nothing away from its module root; `root` units get no line, matching
/// the reference output.
#[must_use]
pub fn classify_units(mut sources: Vec<SourceUnit>, config: &Config) -> (UnitSet, Vec<Diagnostic>) {
    sources.sort_by(|a, b| a.path.cmp(&b.path));

    let mut units = UnitSet::new();
    let mut diagnostics = Vec::new();

    for source in sources {
        let layer = classify_layer(&source.rel_path, config);
        debug!(unit = %source.path, layer = %layer, "classified");
        match layer.as_str() {
            LAYER_UNKNOWN => diagnostics.push(Diagnostic::UnknownLayer {
                unit: source.path.clone(),
            }),
            LAYER_ROOT => {}
            _ => diagnostics.push(Diagnostic::LayerAssigned {
                unit: source.path.clone(),
                layer: layer.clone(),
            }),
        }
        units.insert(Unit::new(source, layer));
    }

    (units, diagnostics)
}
