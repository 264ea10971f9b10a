//! Units, the discovered-unit table, and reserved layer names.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Layer assigned to an unmatched unit sitting at its module root.
pub const LAYER_ROOT: &str = "root";

/// Layer assigned to any other unmatched unit.
pub const LAYER_UNKNOWN: &str = "unknown";

/// A package as reported by a source lister, before classification.
///
/// This is the shape of the `ListSourceUnits` collaborator contract: one
/// entry per package, with the raw import strings of all its source files
/// in observation order (duplicates permitted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Module-qualified package path, globally unique within a run
    /// (e.g. `example.com/app/internal/domain`).
    pub path: String,
    /// Owning module prefix (e.g. `example.com/app`).
    pub module: String,
    /// Path relative to the module root, slash-separated; empty for a
    /// package at the module root itself.
    pub rel_path: String,
    /// Raw import strings, insertion order preserved.
    pub imports: Vec<String>,
}

/// A classified unit with its derived dependency sets.
///
/// The layer is resolved exactly once at classification time and never
/// changes. The layer-dependency and external-dependency sets are disjoint
/// by construction: an import either resolves to a discovered unit
/// (contributing its layer) or is recorded verbatim as external.
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    /// Module-qualified package path.
    pub path: String,
    /// Owning module prefix.
    pub module: String,
    /// Path relative to the module root; empty at the root.
    pub rel_path: String,
    /// Assigned layer name (declared, `root`, or `unknown`).
    pub layer: String,
    /// Raw import strings, insertion order preserved for diagnostics.
    pub imports: Vec<String>,
    /// Distinct layers of discovered units this unit imports.
    pub layer_deps: BTreeSet<String>,
    /// Distinct import strings that resolve to no known module prefix.
    pub external_deps: BTreeSet<String>,
}

impl Unit {
    /// Creates a classified unit with empty dependency sets.
    #[must_use]
    pub fn new(source: SourceUnit, layer: String) -> Self {
        Self {
            path: source.path,
            module: source.module,
            rel_path: source.rel_path,
            layer,
            imports: source.imports,
            layer_deps: BTreeSet::new(),
            external_deps: BTreeSet::new(),
        }
    }
}

/// The discovered-unit table, keyed by module-qualified path.
///
/// Backed by a `BTreeMap` so every iteration (and therefore every
/// diagnostic stream derived from one) is deterministic.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct UnitSet {
    units: BTreeMap<String, Unit>,
}

impl UnitSet {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a unit, replacing any previous unit with the same path.
    pub fn insert(&mut self, unit: Unit) {
        self.units.insert(unit.path.clone(), unit);
    }

    /// Looks a unit up by its module-qualified path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Unit> {
        self.units.get(path)
    }

    /// Iterates units in path order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Iterates units mutably, in path order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    /// The set of distinct module prefixes across all units.
    #[must_use]
    pub fn module_prefixes(&self) -> BTreeSet<String> {
        self.units.values().map(|u| u.module.clone()).collect()
    }

    /// Number of discovered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Consumes the table, yielding units in path order.
    #[must_use]
    pub fn into_units(self) -> Vec<Unit> {
        self.units.into_values().collect()
    }
}
