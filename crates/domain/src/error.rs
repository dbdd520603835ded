//! Unified error type for the domain layer
//!
//! Provides a common error type used across domain value objects, so
//! callers get consistent error handling without String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a submatcher spec with inconsistent fields)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects with a textual form)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value object's constructor is given inconsistent
    /// fields, e.g. an Option submatcher without a pattern, or a bound
    /// group list that is empty.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string does
    /// not name a known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("bound groups cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: bound groups cannot be empty"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown target: 'sidekick'");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: unknown target: 'sidekick'");
    }
}
