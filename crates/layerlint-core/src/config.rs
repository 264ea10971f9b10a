//! YAML configuration for layers, dependency rules, and excluded directories.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::model::{LAYER_ROOT, LAYER_UNKNOWN};

/// Top-level checker configuration.
///
/// ```yaml
/// layers:
///   domain:
///     - "domain/**"
///   infrastructure:
///     - "infra/**"
/// dependency_rules:
///   - { from: domain, to: "*", allow: false }
/// exclude_dirs:
///   - "vendor/**"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Declared layers, in document order. Order matters: a unit matching
    /// patterns of two layers is assigned the first-declared one.
    #[serde(default, deserialize_with = "ordered_layers")]
    pub layers: Vec<LayerDef>,

    /// Allow/deny rules, evaluated first-match-wins in declaration order.
    #[serde(default)]
    pub dependency_rules: Vec<DependencyRule>,

    /// Glob patterns matched against directory paths relative to the scan
    /// root; a matching directory is pruned before its contents are read.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
}

/// A named layer and the glob patterns that place units into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDef {
    /// Layer name (e.g. `"domain"`, `"infrastructure"`).
    pub name: String,
    /// Full-glob patterns tested against a unit's module-relative path.
    pub patterns: Vec<String>,
}

/// An ordered (from, to, allow) rule governing layer and external edges.
///
/// `from` is matched against the importing unit's layer, `to` against the
/// imported layer name or external package id, both in the rule-pattern
/// dialect of [`crate::pattern::rule_matches`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRule {
    /// Rule-dialect pattern for the importing unit's layer.
    pub from: String,
    /// Rule-dialect pattern for the dependency (layer name or external id).
    pub to: String,
    /// Whether a matching edge is permitted.
    pub allow: bool,
}

/// Deserializes the `layers` mapping into a `Vec` so the YAML document
/// order survives; classification depends on it.
fn ordered_layers<'de, D>(deserializer: D) -> Result<Vec<LayerDef>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LayersVisitor;

    impl<'de> Visitor<'de> for LayersVisitor {
        type Value = Vec<LayerDef>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of layer name to a list of glob patterns")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut layers = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((name, patterns)) = access.next_entry::<String, Vec<String>>()? {
                layers.push(LayerDef { name, patterns });
            }
            Ok(layers)
        }
    }

    deserializer.deserialize_map(LayersVisitor)
}

/// Errors when loading or validating configuration.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(layerlint::config::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the YAML document.
    #[error("invalid config: {message}")]
    #[diagnostic(code(layerlint::config::parse))]
    Parse {
        /// Parse error detail.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    #[diagnostic(code(layerlint::config::validation))]
    Validation(String),
}

impl Config {
    /// Load from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate config consistency.
    ///
    /// Checks that no layer reuses a reserved name or is declared twice,
    /// and that every layer and exclude glob compiles.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();

        for layer in &self.layers {
            if layer.name == LAYER_ROOT || layer.name == LAYER_UNKNOWN {
                return Err(ConfigError::Validation(format!(
                    "layer '{}' shadows a reserved layer name",
                    layer.name
                )));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "layer '{}' declared twice",
                    layer.name
                )));
            }
            for pattern in &layer.patterns {
                glob::Pattern::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "layers.{}: bad pattern '{pattern}': {e}",
                        layer.name
                    ))
                })?;
            }
        }

        for pattern in &self.exclude_dirs {
            glob::Pattern::new(pattern).map_err(|e| {
                ConfigError::Validation(format!("exclude_dirs: bad pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }
}
