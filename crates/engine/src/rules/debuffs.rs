//! Enemy debuff rules: defense reduction, delay, poison, buff removal.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;

use crate::generators::number_range;

use super::turns;

const GROUP: &str = "Debuffs";

/// Optional trailing clause marking debuffs that pierce protection.
fn protection_clause() -> &'static str {
    r"( ignoring (?:their )?debuff protection)?"
}

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![
        defense_reduction(),
        delay(),
        poison(),
        buff_removal(),
        paralysis(),
    ]
}

fn defense_reduction() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Reduces defense of enemies",
        format!(
            r"Reduces the defense of all enemies by (\d+|\?)%(?:-(\d+)%)? {}{}",
            turns(),
            protection_clause()
        ),
    )
    .targets([AbilityTarget::Special, AbilityTarget::SuperSpecial])
    .submatchers(vec![
        number_range("Defense reduction in %", 1, 2),
        number_range("Duration in turns", 3, 4),
        SubmatcherSpec::option("Ignores debuff protection", vec![5], "ignoring"),
    ])
}

fn delay() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Delays enemies",
        format!(
            r"Delays all enemies by (\d+)(?:-(\d+))? turns?{}",
            protection_clause()
        ),
    )
    .targets([
        AbilityTarget::Special,
        AbilityTarget::SuperSpecial,
        AbilityTarget::Swap,
    ])
    .submatchers(vec![
        number_range("Delay in turns", 1, 2),
        SubmatcherSpec::option("Ignores debuff protection", vec![3], "ignoring"),
    ])
}

fn poison() -> RuleSpec {
    // Corpus capitalizes "Poisons" mid-sentence inconsistently
    RuleSpec::new(GROUP, "Poisons enemies", r"(strongly )?poisons all enemies")
        .case_insensitive()
        .targets([AbilityTarget::Special])
        .submatchers(vec![SubmatcherSpec::option(
            "Strong poison",
            vec![1],
            "strongly",
        )])
}

fn buff_removal() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Removes buffs from enemies",
        r"Removes all (buffs|shields)(?: and (shields))? from all enemies",
    )
    .targets([AbilityTarget::Special])
    .submatchers(vec![
        SubmatcherSpec::option("Removes buffs", vec![1], "buffs"),
        SubmatcherSpec::option("Removes shields", vec![1, 2], "shields"),
    ])
}

fn paralysis() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Paralyzes enemies",
        r"Paralyzes all enemies for (\d+)(?:-(\d+))? turns?",
    )
    .targets([AbilityTarget::Special])
    .submatchers(vec![number_range("Duration in turns", 1, 2)])
}
