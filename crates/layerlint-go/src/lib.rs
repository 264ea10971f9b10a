//! # layerlint-go
//!
//! The Go-specific source lister for layerlint. Walks a project tree,
//! prunes excluded directories, locates the nearest `go.mod` for every
//! `.go` file, extracts raw import lists, and groups files into
//! per-package [`layerlint_core::SourceUnit`]s for the core engine.
//!
//! Per-file failures are accumulated in [`ScanOutcome::errors`] rather
//! than aborting the walk.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use miette::Diagnostic;

mod imports;
mod module;
mod scanner;

pub use imports::extract_imports;
pub use module::{ModuleInfo, ModuleResolver};
pub use scanner::{scan, ScanOutcome};

/// Errors raised while listing source units.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ScanError {
    /// A file or `go.mod` could not be read.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(layerlint::scan::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// No ancestor of a source file contains a `go.mod`.
    #[error("no go.mod found for {}", path.display())]
    #[diagnostic(
        code(layerlint::scan::module_not_found),
        help("every scanned .go file must live under a module boundary")
    )]
    ModuleNotFound {
        /// Directory the upward search started from.
        path: PathBuf,
    },

    /// A path component is not valid UTF-8 and cannot form a unit path.
    #[error("non-UTF-8 path {}", path.display())]
    #[diagnostic(code(layerlint::scan::non_utf8_path))]
    NonUtf8Path {
        /// The offending directory.
        path: PathBuf,
    },

    /// A `go.mod` exists but declares no module prefix.
    #[error("{} has no module directive", path.display())]
    #[diagnostic(code(layerlint::scan::bad_module_file))]
    BadModuleFile {
        /// The offending `go.mod`.
        path: PathBuf,
    },

    /// The directory walk itself failed.
    #[error("walk error: {0}")]
    #[diagnostic(code(layerlint::scan::walk))]
    Walk(#[from] ignore::Error),
}
