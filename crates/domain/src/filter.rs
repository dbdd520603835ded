//! User filter selections
//!
//! The query side of the engine: a user picks one rule and constrains
//! some of its submatchers. The evaluator decides whether an ability's
//! tag set satisfies the selection.

use serde::{Deserialize, Serialize};

use crate::number::Comparator;
use crate::target::AbilityTarget;

/// One constraint against a submatcher of the selected rule, keyed by
/// the submatcher's description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FilterConstraint {
    /// Numeric comparison against the extracted value/range
    Number {
        description: String,
        comparator: Comparator,
        value: f64,
    },
    /// The option must be present (flag true). Options sharing a radio
    /// group are OR-ed by the evaluator.
    Option { description: String },
    /// User pattern, compiled case-insensitively, tested against the
    /// extracted text
    Text { description: String, pattern: String },
}

/// A complete filter selection: one rule plus zero or more submatcher
/// constraints. Zero constraints means presence of the tag suffices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub target: AbilityTarget,
    pub group: String,
    /// Rule name with the target placeholder already resolved
    pub rule_name: String,
    #[serde(default)]
    pub constraints: Vec<FilterConstraint>,
}

impl FilterSelection {
    pub fn new(
        target: AbilityTarget,
        group: impl Into<String>,
        rule_name: impl Into<String>,
    ) -> Self {
        Self {
            target,
            group: group.into(),
            rule_name: rule_name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: FilterConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}
