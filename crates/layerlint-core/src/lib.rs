//! # layerlint-core
//!
//! Core engine for architecture-conformance checking: assigns packages to
//! declared layers by path patterns, builds a layer-level and external
//! dependency graph from raw import lists, and evaluates an ordered
//! allow/deny rule table.
//!
//! The crate is I/O-free. A source lister (see `layerlint-go`) supplies
//! [`SourceUnit`]s; [`Analyzer::analyze`] returns a structured
//! [`AnalysisReport`] for a presentation layer to render.
//!
//! ## Example
//!
//! ```
//! use layerlint_core::{Analyzer, Config, SourceUnit};
//!
//! let config = Config::parse(r#"
//! layers:
//!   domain: ["domain/**"]
//! dependency_rules:
//!   - { from: domain, to: "*", allow: false }
//! "#)?;
//! config.validate()?;
//!
//! let report = Analyzer::new(config).analyze(vec![SourceUnit {
//!     path: "example.com/m/domain".into(),
//!     module: "example.com/m".into(),
//!     rel_path: "domain".into(),
//!     imports: vec!["fmt".into()],
//! }]);
//! assert!(report.has_violations()); // domain -> fmt is denied
//! # Ok::<(), layerlint_core::ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classify;
mod config;
mod evaluate;
mod graph;
mod model;
mod report;

/// Pattern-matching dialects (full glob and rule prefix-or-exact).
pub mod pattern;

pub use analyzer::Analyzer;
pub use classify::{classify_layer, classify_units};
pub use config::{Config, ConfigError, DependencyRule, LayerDef};
pub use evaluate::{evaluate, Evaluation};
pub use graph::build_dependencies;
pub use model::{SourceUnit, Unit, UnitSet, LAYER_ROOT, LAYER_UNKNOWN};
pub use report::{AnalysisReport, Diagnostic, Verdict};
