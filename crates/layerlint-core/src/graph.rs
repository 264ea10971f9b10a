//! Import graph construction: partitions raw imports into internal layer
//! edges and external dependencies.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{UnitSet, LAYER_UNKNOWN};
use crate::report::Diagnostic;

/// Annotates every unit's layer-dependency and external-dependency sets.
///
/// An import is internal when it starts with any module prefix discovered
/// during the walk, external otherwise. Internal imports are resolved by
/// exact identity against the unit table: a hit contributes the target's
/// layer (with a warning when that layer is `unknown`); a miss — an import
/// that textually looks internal but was never discovered, e.g. pruned by
/// an exclude rule — is dropped without an edge or a diagnostic. The
/// checker only reasons about units it has actually observed.
pub fn build_dependencies(units: &mut UnitSet, diagnostics: &mut Vec<Diagnostic>) {
    let prefixes: Vec<String> = units.module_prefixes().into_iter().collect();
    let layer_of: BTreeMap<String, String> = units
        .iter()
        .map(|u| (u.path.clone(), u.layer.clone()))
        .collect();

    for unit in units.iter_mut() {
        for import in &unit.imports {
            let internal = prefixes.iter().any(|prefix| import.starts_with(prefix));
            if !internal {
                unit.external_deps.insert(import.clone());
                continue;
            }
            if let Some(layer) = layer_of.get(import) {
                unit.layer_deps.insert(layer.clone());
                if layer == LAYER_UNKNOWN {
                    diagnostics.push(Diagnostic::UnknownImport {
                        importer: unit.path.clone(),
                        imported: import.clone(),
                    });
                }
            } else {
                debug!(importer = %unit.path, import = %import, "undiscovered internal import dropped");
            }
        }
    }
}
