//! Declarative rule specifications
//!
//! A `RuleSpec` is the authored form of one classification rule:
//! pattern source, target list, semantic group, and submatchers. The
//! engine compiles a spec into one immutable rule per declared target.

use serde::{Deserialize, Serialize};

use crate::submatcher::SubmatcherSpec;
use crate::target::AbilityTarget;

/// Placeholder in a rule name replaced with the target's plural label
/// at compile time ("Boosts ATK of %targets%" becomes
/// "Boosts ATK of captains" / "Boosts ATK of supports" / ...).
pub const TARGET_PLACEHOLDER: &str = "%targets%";

/// The authored specification of one classification rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    /// Rule name, unique per (target, group) after placeholder
    /// resolution
    pub name: String,
    /// Semantic group the rule belongs to
    pub group: String,
    /// Ability slots this spec expands into
    pub targets: Vec<AbilityTarget>,
    /// Regex source for the rule's pattern
    pub pattern: String,
    /// Compile the pattern case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub submatchers: Vec<SubmatcherSpec>,
    /// Superseded rule kept for historical reference; skipped when the
    /// registry is built with `exclude_legacy`
    #[serde(default)]
    pub legacy: bool,
}

impl RuleSpec {
    /// Start a spec for `group` with the given name and pattern source.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            targets: Vec::new(),
            pattern: pattern.into(),
            case_insensitive: false,
            submatchers: Vec::new(),
            legacy: false,
        }
    }

    /// Declare the targets this spec expands into.
    pub fn targets(mut self, targets: impl IntoIterator<Item = AbilityTarget>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Attach the submatcher list.
    pub fn submatchers(mut self, submatchers: Vec<SubmatcherSpec>) -> Self {
        self.submatchers = submatchers;
        self
    }

    /// Compile the pattern case-insensitively.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Mark the spec as superseded.
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }

    /// The rule name with the target placeholder resolved for `target`.
    pub fn resolved_name(&self, target: AbilityTarget) -> String {
        self.name.replace(TARGET_PLACEHOLDER, target.plural_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_name_substitutes_plural_label() {
        let spec = RuleSpec::new("Buffs", "Boosts ATK of %targets%", "Boosts ATK")
            .targets([AbilityTarget::Captain, AbilityTarget::Support]);
        assert_eq!(
            spec.resolved_name(AbilityTarget::Captain),
            "Boosts ATK of captains"
        );
        assert_eq!(
            spec.resolved_name(AbilityTarget::Support),
            "Boosts ATK of supports"
        );
    }

    #[test]
    fn test_super_special_uses_irregular_plural() {
        let spec = RuleSpec::new("Buffs", "Usable by %targets%", "x");
        assert_eq!(
            spec.resolved_name(AbilityTarget::SuperSpecial),
            "Usable by super specials"
        );
    }

    #[test]
    fn test_name_without_placeholder_is_unchanged() {
        let spec = RuleSpec::new("Buffs", "Boosts ATK", "Boosts ATK");
        assert_eq!(spec.resolved_name(AbilityTarget::Sailor), "Boosts ATK");
    }
}
