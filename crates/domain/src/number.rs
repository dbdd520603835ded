//! Numeric extraction semantics
//!
//! Captured numeric tokens are not always plain decimals: the corpus
//! uses `?` for "unknown/variable" and phrasing like `99+` or
//! "completely" for "maximal". Both sentinels get defined comparison
//! semantics so numeric filters behave intuitively:
//!
//! - unknown normalizes to `0` (only matched by explicit zero/unknown
//!   queries)
//! - maximal normalizes to `+infinity` (matched by any "at least N"
//!   query)

use serde::{Deserialize, Serialize};

/// Token meaning "unknown/variable value" in ability text.
pub const UNKNOWN_TOKEN: &str = "?";

/// Parse a captured numeric token, applying sentinel normalization.
///
/// Total: malformed input yields `0.0` (treated as unknown) so one bad
/// capture never aborts an otherwise-successful classification.
pub fn parse_ability_number(token: &str) -> f64 {
    let token = token.trim();
    if token.is_empty() || token == UNKNOWN_TOKEN {
        return 0.0;
    }
    if token.eq_ignore_ascii_case("completely") || token.eq_ignore_ascii_case("fully") {
        return f64::INFINITY;
    }
    // "99+" style open upper bounds mean "maximal"
    if let Some(stripped) = token.strip_suffix('+') {
        if stripped.chars().all(|c| c.is_ascii_digit()) {
            return f64::INFINITY;
        }
    }
    token.parse::<f64>().unwrap_or(0.0)
}

/// An extracted numeric value, possibly a range.
///
/// A single captured value collapses to `[low, low]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRange {
    pub low: f64,
    pub high: f64,
}

impl NumberRange {
    /// An exact value: `[v, v]`.
    pub fn exact(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// A range `[low, high]`.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether some value in `[low, high]` satisfies the comparator
    /// against `value`.
    pub fn satisfies(&self, comparator: Comparator, value: f64) -> bool {
        match comparator {
            Comparator::Less => self.low < value,
            Comparator::LessEq => self.low <= value,
            Comparator::Eq => self.low <= value && value <= self.high,
            Comparator::GreaterEq => self.high >= value,
            Comparator::Greater => self.high > value,
        }
    }
}

/// Numeric filter comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparator {
    Less,
    LessEq,
    Eq,
    GreaterEq,
    Greater,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_ability_number("3"), 3.0);
        assert_eq!(parse_ability_number("2.5"), 2.5);
        assert_eq!(parse_ability_number(" 50 "), 50.0);
    }

    #[test]
    fn test_unknown_token_normalizes_to_zero() {
        assert_eq!(parse_ability_number("?"), 0.0);
    }

    #[test]
    fn test_maximal_tokens_normalize_to_infinity() {
        assert_eq!(parse_ability_number("completely"), f64::INFINITY);
        assert_eq!(parse_ability_number("Completely"), f64::INFINITY);
        assert_eq!(parse_ability_number("99+"), f64::INFINITY);
    }

    #[test]
    fn test_malformed_capture_is_treated_as_unknown() {
        assert_eq!(parse_ability_number("a lot"), 0.0);
        assert_eq!(parse_ability_number(""), 0.0);
    }

    #[test]
    fn test_exact_collapses_range() {
        let range = NumberRange::exact(3.0);
        assert_eq!(range.low, 3.0);
        assert_eq!(range.high, 3.0);
    }

    #[test]
    fn test_range_comparator_is_interval_test() {
        let range = NumberRange::new(2.0, 3.0);
        assert!(range.satisfies(Comparator::GreaterEq, 3.0));
        assert!(range.satisfies(Comparator::LessEq, 2.0));
        assert!(range.satisfies(Comparator::Eq, 2.5));
        assert!(!range.satisfies(Comparator::Greater, 3.0));
        assert!(!range.satisfies(Comparator::Less, 2.0));
    }

    #[test]
    fn test_unknown_only_matches_zero_style_queries() {
        let unknown = NumberRange::exact(parse_ability_number("?"));
        assert!(unknown.satisfies(Comparator::Eq, 0.0));
        assert!(unknown.satisfies(Comparator::Less, 1.0));
        assert!(!unknown.satisfies(Comparator::GreaterEq, 1.0));
    }

    #[test]
    fn test_maximal_beats_any_finite_bound() {
        let maximal = NumberRange::exact(parse_ability_number("completely"));
        assert!(maximal.satisfies(Comparator::Greater, 1_000_000.0));
        assert!(maximal.satisfies(Comparator::GreaterEq, 0.0));
    }
}
