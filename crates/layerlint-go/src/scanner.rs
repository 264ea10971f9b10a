//! Filesystem walk producing one `SourceUnit` per Go package.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use layerlint_core::pattern::path_matches;
use layerlint_core::SourceUnit;

use crate::imports::extract_imports;
use crate::module::ModuleResolver;
use crate::ScanError;

/// What a walk produced: the discovered units plus any per-file errors.
///
/// Errors do not abort the walk; they are accumulated so a single broken
/// file cannot hide every other finding. Callers decide the exit policy.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Discovered packages, in unit-path order.
    pub units: Vec<SourceUnit>,
    /// Per-file failures (unreadable file, unresolvable module).
    pub errors: Vec<ScanError>,
}

/// Walks `root`, pruning excluded directories, and groups `.go` files into
/// per-package [`SourceUnit`]s.
///
/// `exclude_dirs` patterns are full globs matched against each directory's
/// slash-separated path relative to `root`; a matching directory is pruned
/// before any of its contents are read, so it contributes no units and no
/// diagnostics.
#[must_use]
pub fn scan(root: &Path, exclude_dirs: &[String]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut resolver = ModuleResolver::new();
    let mut units: BTreeMap<String, SourceUnit> = BTreeMap::new();

    let walk_root = root.to_path_buf();
    let excludes = exclude_dirs.to_vec();
    let mut builder = ignore::WalkBuilder::new(root);
    // Plain filesystem semantics: no gitignore or hidden-file filtering,
    // only the configured exclude patterns prune the walk.
    builder.standard_filters(false);
    builder.filter_entry(move |entry| {
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            return true;
        }
        // A non-UTF-8 directory cannot match any pattern; files inside
        // it surface a per-file error during collection instead.
        let Some(rel) = relative_slash_path(entry.path(), &walk_root) else {
            return true;
        };
        if rel.is_empty() {
            return true;
        }
        !excludes.iter().any(|pattern| path_matches(&rel, pattern))
    });

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                outcome.errors.push(ScanError::Walk(e));
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("go") {
            continue;
        }
        if let Err(e) = collect_file(path, &mut resolver, &mut units) {
            outcome.errors.push(e);
        }
    }

    outcome.units = units.into_values().collect();
    info!(
        "scan complete: {} package(s), {} error(s)",
        outcome.units.len(),
        outcome.errors.len()
    );
    outcome
}

/// Adds one `.go` file's imports to its package's unit, creating the unit
/// the first time a file in that package is observed.
fn collect_file(
    path: &Path,
    resolver: &mut ModuleResolver,
    units: &mut BTreeMap<String, SourceUnit>,
) -> Result<(), ScanError> {
    let dir = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let module = resolver.resolve(&dir)?;

    let rel_path = relative_slash_path(&dir, &module.root)
        .ok_or_else(|| ScanError::NonUtf8Path { path: dir.clone() })?;
    let unit_path = if rel_path.is_empty() {
        module.prefix.clone()
    } else {
        format!("{}/{rel_path}", module.prefix)
    };

    let source = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let imports = extract_imports(&source);
    debug!(file = %path.display(), unit = %unit_path, imports = imports.len(), "scanned");

    units
        .entry(unit_path.clone())
        .or_insert_with(|| SourceUnit {
            path: unit_path,
            module: module.prefix,
            rel_path,
            imports: Vec::new(),
        })
        .imports
        .extend(imports);

    Ok(())
}

/// Slash-separated path of `path` relative to `base`; empty when equal.
/// `None` when a component is not valid UTF-8: such a path cannot become
/// part of a unit identity without silently altering it.
fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).unwrap_or(path);
    let mut out = String::new();
    for component in rel.components() {
        let part = component.as_os_str().to_str()?;
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(part);
    }
    Some(out)
}
