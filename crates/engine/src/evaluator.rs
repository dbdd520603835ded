//! Query/filter evaluator
//!
//! Decides whether an already-classified ability satisfies a user's
//! filter selection. Evaluation is total and never surfaces an error
//! to the caller: unknown rules or descriptions simply fail the
//! filter, and an invalid user pattern degrades to literal matching.

use std::collections::BTreeMap;

use abilitydex_domain::filter::{FilterConstraint, FilterSelection};
use abilitydex_domain::tag::{Tag, TagValue};
use abilitydex_domain::TagSet;
use regex::RegexBuilder;

use crate::registry::RuleRegistry;

/// Evaluate a filter selection against one ability's tag set.
///
/// Requires a tag for the exact (target, group, rule name) triple;
/// with zero constraints, presence alone satisfies the filter. Option
/// constraints sharing the rule's radio group are OR-ed (the evaluator
/// imposes no exclusivity - that is a presentation concern); all other
/// constraints AND.
pub fn evaluate_filter(
    registry: &RuleRegistry,
    tags: &TagSet,
    selection: &FilterSelection,
) -> bool {
    let Some(tag) = tags.find(selection.target, &selection.group, &selection.rule_name) else {
        return false;
    };

    // Radio-group assignments come from the selected rule's submatcher
    // specs. A selection naming a rule this registry does not carry
    // (e.g. a stale cached filter) degrades to ungrouped AND.
    let radio_groups: BTreeMap<&str, &str> = registry
        .rule(selection.target, &selection.group, &selection.rule_name)
        .map(|rule| {
            rule.submatchers
                .iter()
                .filter_map(|s| {
                    s.spec
                        .radio_group
                        .as_deref()
                        .map(|rg| (s.spec.description.as_str(), rg))
                })
                .collect()
        })
        .unwrap_or_default();

    // OR within a radio group: collect per-group verdicts, then require
    // every group to have at least one satisfied member.
    let mut radio_verdicts: BTreeMap<&str, bool> = BTreeMap::new();

    for constraint in &selection.constraints {
        match constraint {
            FilterConstraint::Number {
                description,
                comparator,
                value,
            } => {
                let satisfied = tag
                    .value(description)
                    .and_then(TagValue::as_number)
                    .map(|range| range.satisfies(*comparator, *value))
                    .unwrap_or(false);
                if !satisfied {
                    return false;
                }
            }
            FilterConstraint::Text {
                description,
                pattern,
            } => {
                if !text_satisfied(tag, description, pattern) {
                    return false;
                }
            }
            FilterConstraint::Option { description } => {
                let enabled = tag
                    .value(description)
                    .and_then(TagValue::as_flag)
                    .unwrap_or(false);
                match radio_groups.get(description.as_str()) {
                    Some(radio) => {
                        let verdict = radio_verdicts.entry(radio).or_insert(false);
                        *verdict = *verdict || enabled;
                    }
                    None => {
                        if !enabled {
                            return false;
                        }
                    }
                }
            }
        }
    }

    radio_verdicts.values().all(|&satisfied| satisfied)
}

fn text_satisfied(tag: &Tag, description: &str, pattern: &str) -> bool {
    let Some(text) = tag.value(description).and_then(TagValue::as_text) else {
        return false;
    };
    let compiled = RegexBuilder::new(pattern).case_insensitive(true).build();
    match compiled {
        Ok(regex) => regex.is_match(text),
        // Invalid user pattern: degrade to literal substring matching
        Err(_) => {
            let literal = RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build();
            literal.map(|regex| regex.is_match(text)).unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abilitydex_domain::rule_spec::RuleSpec;
    use abilitydex_domain::submatcher::SubmatcherSpec;
    use abilitydex_domain::target::AbilityTarget;
    use abilitydex_domain::Comparator;
    use crate::matcher::classify;
    use crate::registry::{BuildOptions, RuleRegistry};

    const TARGET: AbilityTarget = AbilityTarget::Special;

    fn registry() -> RuleRegistry {
        let spec = RuleSpec::new(
            "Buffs",
            "Boosts ATK",
            r#"Boosts ATK of ((?:STR|DEX|QCK|PSY|INT|all)(?:, (?:STR|DEX|QCK|PSY|INT))*) characters by (\d+(?:\.\d+)?)x(?:-(\d+(?:\.\d+)?)x)? ?([^".]*)"#,
        )
        .targets([TARGET])
        .submatchers(vec![
            SubmatcherSpec::option("STR", vec![1], "STR|all").with_radio_group("type"),
            SubmatcherSpec::option("DEX", vec![1], "DEX|all").with_radio_group("type"),
            SubmatcherSpec::option("QCK", vec![1], "QCK|all").with_radio_group("type"),
            SubmatcherSpec::number("ATK multiplier", vec![2, 3]),
            SubmatcherSpec::text("Condition", vec![4]),
        ]);
        RuleRegistry::build(&[spec], BuildOptions::default()).expect("builds")
    }

    fn selection() -> FilterSelection {
        FilterSelection::new(TARGET, "Buffs", "Boosts ATK")
    }

    #[test]
    fn test_presence_alone_satisfies_empty_selection() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Boosts ATK of STR characters by 2x");
        assert!(evaluate_filter(&registry, &tags, &selection()));
    }

    #[test]
    fn test_missing_tag_fails() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Cuts the current HP of each enemy by 10%");
        assert!(!evaluate_filter(&registry, &tags, &selection()));
    }

    #[test]
    fn test_numeric_constraint_uses_range_semantics() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Boosts ATK of STR characters by 2x-3x");

        let at_least_3 = selection().with_constraint(FilterConstraint::Number {
            description: "ATK multiplier".to_string(),
            comparator: Comparator::GreaterEq,
            value: 3.0,
        });
        assert!(evaluate_filter(&registry, &tags, &at_least_3));

        let above_3 = selection().with_constraint(FilterConstraint::Number {
            description: "ATK multiplier".to_string(),
            comparator: Comparator::Greater,
            value: 3.0,
        });
        assert!(!evaluate_filter(&registry, &tags, &above_3));
    }

    #[test]
    fn test_radio_group_options_are_or_ed() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Boosts ATK of DEX characters by 2x");

        // STR fails alone, but STR-or-DEX succeeds
        let str_only = selection().with_constraint(FilterConstraint::Option {
            description: "STR".to_string(),
        });
        assert!(!evaluate_filter(&registry, &tags, &str_only));

        let str_or_dex = selection()
            .with_constraint(FilterConstraint::Option {
                description: "STR".to_string(),
            })
            .with_constraint(FilterConstraint::Option {
                description: "DEX".to_string(),
            });
        assert!(evaluate_filter(&registry, &tags, &str_or_dex));
    }

    #[test]
    fn test_universal_ability_satisfies_every_type_option() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Boosts ATK of all characters by 2x");
        let qck = selection().with_constraint(FilterConstraint::Option {
            description: "QCK".to_string(),
        });
        assert!(evaluate_filter(&registry, &tags, &qck));
    }

    #[test]
    fn test_text_constraint_is_case_insensitive() {
        let registry = registry();
        let tags = classify(
            &registry,
            TARGET,
            "Boosts ATK of STR characters by 2x after taking damage",
        );
        let with_text = selection().with_constraint(FilterConstraint::Text {
            description: "Condition".to_string(),
            pattern: "TAKING DAMAGE".to_string(),
        });
        assert!(evaluate_filter(&registry, &tags, &with_text));
    }

    #[test]
    fn test_invalid_user_pattern_degrades_to_literal() {
        let registry = registry();
        let tags = classify(
            &registry,
            TARGET,
            "Boosts ATK of STR characters by 2x when HP is below 30% (once",
        );
        // "(once" is not a valid regex; literal fallback still matches
        let with_text = selection().with_constraint(FilterConstraint::Text {
            description: "Condition".to_string(),
            pattern: "(once".to_string(),
        });
        assert!(evaluate_filter(&registry, &tags, &with_text));
    }

    #[test]
    fn test_constraints_combine_with_and_across_kinds() {
        let registry = registry();
        let tags = classify(&registry, TARGET, "Boosts ATK of DEX characters by 2x");
        let mixed = selection()
            .with_constraint(FilterConstraint::Option {
                description: "DEX".to_string(),
            })
            .with_constraint(FilterConstraint::Number {
                description: "ATK multiplier".to_string(),
                comparator: Comparator::GreaterEq,
                value: 2.5,
            });
        assert!(!evaluate_filter(&registry, &tags, &mixed));
    }
}
