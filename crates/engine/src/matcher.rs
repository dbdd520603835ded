//! Matching engine
//!
//! Evaluates every applicable rule independently against the original
//! ability text and turns each match into a structured tag. The
//! ephemeral match result (rule + capture groups) is regex `Captures`;
//! it never outlives tag extraction.
//!
//! Extraction follows the "first-defined-capture precedence" rule:
//! bound groups are tried in declaration order and the first defined,
//! non-empty capture wins. This models alternation in the source
//! patterns ("either the first branch captured something, or the
//! second did") as explicit control flow, so the semantics do not
//! depend on regex-engine quirks. Declaration order in each spec is
//! load-bearing and must not be reordered.

use std::collections::BTreeMap;

use abilitydex_domain::number::{parse_ability_number, NumberRange};
use abilitydex_domain::submatcher::SubmatcherKind;
use abilitydex_domain::tag::{Tag, TagSet, TagValue};
use abilitydex_domain::target::AbilityTarget;
use regex::Captures;

use crate::compiler::{CompiledSubmatcher, Rule};
use crate::registry::RuleRegistry;

/// Classify one ability text against every rule registered for
/// `target`.
///
/// Rules are evaluated independently and non-exclusively: one text can
/// match many rules, across and within groups, and every rule sees the
/// original text, never another rule's match span. Output order
/// follows registry iteration order (group, then rule name), which
/// matters only for determinism. Running twice against an unchanged
/// registry yields identical tag sets.
pub fn classify(registry: &RuleRegistry, target: AbilityTarget, ability_text: &str) -> TagSet {
    let mut tags = Vec::new();
    for rules in registry.lookup(target).values() {
        for rule in rules.values() {
            if let Some(captures) = rule.pattern.captures(ability_text) {
                tags.push(extract_tag(rule, &captures));
            }
        }
    }
    TagSet::new(tags)
}

fn extract_tag(rule: &Rule, captures: &Captures<'_>) -> Tag {
    let mut values = BTreeMap::new();
    for sub in rule.submatchers.iter() {
        let value = match sub.spec.kind {
            SubmatcherKind::Separator => continue,
            SubmatcherKind::Number => TagValue::Number(extract_number(sub, captures)),
            SubmatcherKind::Text => TagValue::Text(
                first_defined(&sub.spec.bound_groups, captures)
                    .unwrap_or_default()
                    .to_string(),
            ),
            SubmatcherKind::Option => TagValue::Flag(extract_flag(sub, captures)),
        };
        values.insert(sub.spec.description.clone(), value);
    }
    Tag {
        rule_name: rule.name.clone(),
        group: rule.group.clone(),
        target: rule.target,
        values,
    }
}

/// First bound group, in declaration order, with a defined, non-empty
/// capture.
fn first_defined<'t>(bound_groups: &[usize], captures: &Captures<'t>) -> Option<&'t str> {
    bound_groups
        .iter()
        .filter_map(|&group| captures.get(group))
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
}

/// Numeric extraction with range collapse.
///
/// The first defined bound group supplies the lower bound; the bound
/// group immediately following it in the declaration list, when also
/// captured, supplies the upper bound. A lone captured value is an
/// exact range `[low, low]`. No defined capture at all extracts the
/// unknown sentinel: classification stays total.
fn extract_number(sub: &CompiledSubmatcher, captures: &Captures<'_>) -> NumberRange {
    let groups = &sub.spec.bound_groups;
    let winner = groups.iter().position(|&group| {
        captures
            .get(group)
            .map(|m| !m.as_str().is_empty())
            .unwrap_or(false)
    });
    let Some(index) = winner else {
        return NumberRange::exact(0.0);
    };
    // Winner's capture is defined and non-empty by construction
    let low = captures
        .get(groups[index])
        .map(|m| parse_ability_number(m.as_str()))
        .unwrap_or(0.0);
    let high = groups
        .get(index + 1)
        .and_then(|&group| captures.get(group))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(parse_ability_number);
    match high {
        Some(high) => NumberRange::new(low, high),
        None => NumberRange::exact(low),
    }
}

/// Option presence: the submatcher's own pattern tested against the
/// captured text. One bound group contributes its capture verbatim;
/// several contribute their defined captures joined with a space, so
/// fragments from distinct groups cannot merge into a false token.
fn extract_flag(sub: &CompiledSubmatcher, captures: &Captures<'_>) -> bool {
    let Some(pattern) = &sub.pattern else {
        return false;
    };
    let text = sub
        .spec
        .bound_groups
        .iter()
        .filter_map(|&group| captures.get(group))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    pattern.is_match(&text)
}
