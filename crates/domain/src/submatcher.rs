//! Submatcher specifications
//!
//! A submatcher is a secondary, typed extractor bound to specific
//! capture groups of a rule's pattern. Specs are pure data: the pattern
//! field is a regex *source* string, compiled by the engine when the
//! owning rule is compiled.
//!
//! Constructors are shaped so invalid kind/field combinations are
//! unrepresentable: only Option and Text kinds take a pattern, only a
//! Separator goes without bound groups. Bound-group indices are 1-based
//! (group 0 is the whole match and stays reserved); references to
//! groups the rule's pattern does not define are caught at registry
//! build time.

use serde::{Deserialize, Serialize};

/// The kind of value a submatcher extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmatcherKind {
    /// Numeric value or range, with sentinel normalization
    Number,
    /// Verbatim captured text, searchable by the user
    Text,
    /// Boolean presence flag tested by the submatcher's own pattern
    Option,
    /// No value; groups following submatchers under a label
    Separator,
}

/// Declarative spec for one submatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmatcherSpec {
    pub kind: SubmatcherKind,
    /// Human-readable description; also the key of the extracted value
    /// in the produced tag
    pub description: String,
    /// 1-based capture groups of the owning rule's pattern, in
    /// precedence order (first defined non-empty capture wins)
    pub bound_groups: Vec<usize>,
    /// Regex source, Option/Text kinds only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Options sharing a radio group are mutually exclusive in the UI;
    /// informational for matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group: Option<String>,
    /// Presentation hints (free-form)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub style_hints: Vec<String>,
}

impl SubmatcherSpec {
    /// A numeric extractor. Bind one group for an exact value, or a
    /// (low, high) pair for a range; extra groups act as alternation
    /// fallbacks in declaration order.
    pub fn number(description: impl Into<String>, bound_groups: Vec<usize>) -> Self {
        Self {
            kind: SubmatcherKind::Number,
            description: description.into(),
            bound_groups,
            pattern: None,
            radio_group: None,
            style_hints: Vec::new(),
        }
    }

    /// A verbatim-text extractor.
    pub fn text(description: impl Into<String>, bound_groups: Vec<usize>) -> Self {
        Self {
            kind: SubmatcherKind::Text,
            description: description.into(),
            bound_groups,
            pattern: None,
            radio_group: None,
            style_hints: Vec::new(),
        }
    }

    /// A presence flag: `pattern` is tested case-insensitively against
    /// the text captured by `bound_groups`.
    pub fn option(
        description: impl Into<String>,
        bound_groups: Vec<usize>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            kind: SubmatcherKind::Option,
            description: description.into(),
            bound_groups,
            pattern: Some(pattern.into()),
            radio_group: None,
            style_hints: Vec::new(),
        }
    }

    /// A presentation-only separator label.
    pub fn separator(description: impl Into<String>) -> Self {
        Self {
            kind: SubmatcherKind::Separator,
            description: description.into(),
            bound_groups: Vec::new(),
            pattern: None,
            radio_group: None,
            style_hints: Vec::new(),
        }
    }

    /// Assign this option to a radio group.
    pub fn with_radio_group(mut self, radio_group: impl Into<String>) -> Self {
        self.radio_group = Some(radio_group.into());
        self
    }

    /// Attach a presentation hint.
    pub fn with_style_hint(mut self, hint: impl Into<String>) -> Self {
        self.style_hints.push(hint.into());
        self
    }

    /// Whether this submatcher produces a value during matching.
    pub fn produces_value(&self) -> bool {
        self.kind != SubmatcherKind::Separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_spec_has_no_pattern() {
        let spec = SubmatcherSpec::number("Duration in turns", vec![2, 3]);
        assert_eq!(spec.kind, SubmatcherKind::Number);
        assert_eq!(spec.bound_groups, vec![2, 3]);
        assert!(spec.pattern.is_none());
        assert!(spec.produces_value());
    }

    #[test]
    fn test_option_spec_carries_pattern_and_radio_group() {
        let spec = SubmatcherSpec::option("STR", vec![1], "STR").with_radio_group("type");
        assert_eq!(spec.kind, SubmatcherKind::Option);
        assert_eq!(spec.pattern.as_deref(), Some("STR"));
        assert_eq!(spec.radio_group.as_deref(), Some("type"));
    }

    #[test]
    fn test_separator_produces_no_value() {
        let spec = SubmatcherSpec::separator("Affected targets");
        assert!(spec.bound_groups.is_empty());
        assert!(!spec.produces_value());
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = SubmatcherSpec::option("Top row", vec![1, 2], "top row")
            .with_radio_group("position")
            .with_style_hint("compact");
        let json = serde_json::to_string(&spec).unwrap();
        let back: SubmatcherSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
