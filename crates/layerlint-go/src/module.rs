//! Nearest-module resolution: locating the `go.mod` that owns a file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ScanError;

/// A module boundary: where it sits and the prefix it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Directory containing the `go.mod` file.
    pub root: PathBuf,
    /// The declared module prefix (the `module` directive's value).
    pub prefix: String,
}

/// Resolves directories to their nearest enclosing module.
///
/// Walks upward until a `go.mod` is found; every directory visited on the
/// way is cached, so repeated lookups in a large tree stay cheap.
#[derive(Debug, Default)]
pub struct ModuleResolver {
    cache: HashMap<PathBuf, ModuleInfo>,
}

impl ModuleResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the nearest enclosing module for `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when no ancestor contains a `go.mod`, when the
    /// file is unreadable, or when it lacks a `module` directive.
    pub fn resolve(&mut self, dir: &Path) -> Result<ModuleInfo, ScanError> {
        let mut visited = Vec::new();
        let mut current = dir.to_path_buf();

        let info = loop {
            if let Some(info) = self.cache.get(&current) {
                break info.clone();
            }
            visited.push(current.clone());

            let candidate = current.join("go.mod");
            if candidate.is_file() {
                let content =
                    std::fs::read_to_string(&candidate).map_err(|e| ScanError::Io {
                        path: candidate.clone(),
                        source: e,
                    })?;
                let prefix = module_prefix(&content).ok_or_else(|| ScanError::BadModuleFile {
                    path: candidate.clone(),
                })?;
                break ModuleInfo {
                    root: current.clone(),
                    prefix,
                };
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(ScanError::ModuleNotFound {
                        path: dir.to_path_buf(),
                    })
                }
            }
        };

        for seen in visited {
            self.cache.insert(seen, info.clone());
        }
        Ok(info)
    }
}

/// The value of the first `module` directive in a `go.mod` document.
fn module_prefix(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("module") else {
            continue;
        };
        if !rest.starts_with([' ', '\t']) {
            continue;
        }
        let value = rest.trim().trim_matches('"');
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_directive() {
        let content = "module example.com/shop\n\ngo 1.22\n";
        assert_eq!(module_prefix(content).as_deref(), Some("example.com/shop"));
    }

    #[test]
    fn parses_quoted_module_directive() {
        assert_eq!(
            module_prefix("module \"example.com/shop\"\n").as_deref(),
            Some("example.com/shop")
        );
    }

    #[test]
    fn ignores_lines_that_merely_start_with_module() {
        assert_eq!(module_prefix("modulefoo bar\n"), None);
    }

    #[test]
    fn missing_directive_is_none() {
        assert_eq!(module_prefix("go 1.22\n"), None);
    }

    #[test]
    fn resolves_from_nested_directory_and_caches() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        std::fs::write(root.join("go.mod"), "module example.com/m\n").expect("write go.mod");
        let nested = root.join("a/b/c");
        std::fs::create_dir_all(&nested).expect("mkdirs");

        let mut resolver = ModuleResolver::new();
        let info = resolver.resolve(&nested).expect("resolves");
        assert_eq!(info.prefix, "example.com/m");
        assert_eq!(info.root, root);

        // Cached for every directory on the way up.
        assert!(resolver.cache.contains_key(&nested));
        assert!(resolver.cache.contains_key(&root.join("a")));
    }

    #[test]
    fn nested_module_shadows_outer_one() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        std::fs::write(root.join("go.mod"), "module example.com/outer\n").expect("write");
        let inner = root.join("inner");
        std::fs::create_dir_all(&inner).expect("mkdir");
        std::fs::write(inner.join("go.mod"), "module example.com/inner\n").expect("write");

        let mut resolver = ModuleResolver::new();
        assert_eq!(
            resolver.resolve(&inner).expect("resolves").prefix,
            "example.com/inner"
        );
        assert_eq!(
            resolver.resolve(root).expect("resolves").prefix,
            "example.com/outer"
        );
    }

    #[test]
    fn missing_go_mod_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut resolver = ModuleResolver::new();
        let err = resolver.resolve(tmp.path()).expect_err("no module");
        assert!(matches!(err, ScanError::ModuleNotFound { .. }));
    }
}
