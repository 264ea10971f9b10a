//! The two pattern dialects used by the checker.
//!
//! Layer and exclude patterns are full globs (`*` within a path segment,
//! `**` across segments). Dependency-rule patterns are a deliberately
//! simpler dialect: exact match, or a prefix test up to the first `*`.
//! The two are kept as separately named functions on purpose — unifying
//! them would silently change rule-matching semantics that existing
//! configurations depend on.

use glob::{MatchOptions, Pattern};

/// `*` must not cross `/`; `**` (as its own segment) may.
const PATH_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Matches a slash-separated path against a full glob pattern.
///
/// Anchored and case-sensitive: the whole candidate must match. `**`
/// matches zero or more segments; the glob engine refuses the zero case
/// for a trailing `/**` (the literal separator must consume a `/`), so
/// the pattern is additionally tested with that suffix stripped —
/// `vendor/**` matches `vendor` itself, and `**/app/**` matches `app`.
/// An invalid pattern never matches (config validation rejects
/// invalid patterns up front, see [`crate::config::Config::validate`]).
#[must_use]
pub fn path_matches(candidate: &str, pattern: &str) -> bool {
    if glob_matches(candidate, pattern) {
        return true;
    }
    pattern
        .strip_suffix("/**")
        .is_some_and(|stem| glob_matches(candidate, stem))
}

fn glob_matches(candidate: &str, pattern: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|p| p.matches_with(candidate, PATH_MATCH_OPTIONS))
}

/// Matches a layer name or external package id against a rule pattern.
///
/// A pattern without `*` must equal the candidate exactly. A pattern
/// with `*` is split on the first `*` and only the portion before it is
/// prefix-tested; everything after it, further wildcards included, is
/// ignored. So `app*` matches `application`, and `a*z` matches `abc`.
#[must_use]
pub fn rule_matches(candidate: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, _)) => candidate.starts_with(prefix),
        None => candidate == pattern,
    }
}
