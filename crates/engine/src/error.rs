//! Engine error types
//!
//! Registration-time failures only. Matching and filter evaluation are
//! total: a rule that does not match contributes nothing, unknown
//! targets and groups yield empty results, and a malformed numeric
//! capture extracts as the unknown sentinel.

use thiserror::Error;

/// Fatal errors while building a rule registry.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule's pattern source failed to compile. Always fatal: the
    /// process must not serve queries from a partially-built registry.
    #[error("rule '{rule}': invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A submatcher's pattern source failed to compile.
    #[error("rule '{rule}', submatcher '{submatcher}': invalid pattern: {source}")]
    InvalidSubmatcherPattern {
        rule: String,
        submatcher: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A submatcher references a capture group the rule's pattern does
    /// not define. Fatal only under `BuildOptions::strict_group_refs`;
    /// otherwise recorded as a diagnostic.
    #[error(
        "rule '{rule}', submatcher '{submatcher}': bound group {group} \
         exceeds pattern's {available} capture group(s)"
    )]
    GroupReference {
        rule: String,
        submatcher: String,
        group: usize,
        available: usize,
    },

    /// A submatcher spec is internally inconsistent (e.g. a Number
    /// submatcher with no bound groups).
    #[error("rule '{rule}', submatcher '{submatcher}': {message}")]
    InvalidSubmatcher {
        rule: String,
        submatcher: String,
        message: String,
    },

    /// A rule spec declares no targets.
    #[error("rule '{rule}': spec declares no targets")]
    NoTargets { rule: String },
}
