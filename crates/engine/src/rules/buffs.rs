//! Buff rules: stat boosts, chain growth, damage reduction.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;
use abilitydex_domain::taxonomy::{CLASSES, TYPES};

use crate::generators::{number_range, option_set};

use super::{multiplier, turns, SPAN, UNIVERSAL};

const GROUP: &str = "Buffs";

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![
        atk_boost(),
        hp_boost(),
        rcv_boost(),
        chain_growth(),
        damage_reduction(),
        atk_vs_delayed(),
    ]
}

/// Stat-boost submatchers shared by the ATK/HP/RCV rules: affected
/// characters captured in group 1, multiplier in groups 2-3.
fn stat_boost_submatchers(with_duration: bool) -> Vec<SubmatcherSpec> {
    let mut submatchers = vec![SubmatcherSpec::separator("Affected characters")];
    submatchers.extend(option_set(&TYPES, &[1], Some(UNIVERSAL)));
    submatchers.extend(option_set(&CLASSES, &[1], Some(UNIVERSAL)));
    submatchers.push(number_range("Multiplier", 2, 3));
    if with_duration {
        submatchers.push(number_range("Duration in turns", 4, 5));
    }
    submatchers
}

fn atk_boost() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Boosts ATK",
        format!(
            r"Boosts (?:the )?ATK of ({SPAN}+?) by {}(?: {})?",
            multiplier(),
            turns()
        ),
    )
    .targets([
        AbilityTarget::Captain,
        AbilityTarget::Special,
        AbilityTarget::SuperSpecial,
        AbilityTarget::Support,
        AbilityTarget::Swap,
    ])
    .submatchers(stat_boost_submatchers(true))
}

fn hp_boost() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Boosts HP",
        format!(r"Boosts (?:the )?HP of ({SPAN}+?) by {}", multiplier()),
    )
    .targets([AbilityTarget::Captain, AbilityTarget::Sailor])
    .submatchers(stat_boost_submatchers(false))
}

fn rcv_boost() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Boosts RCV",
        format!(
            r"Boosts (?:the )?RCV of ({SPAN}+?) by {}(?: {})?",
            multiplier(),
            turns()
        ),
    )
    .targets([AbilityTarget::Captain, AbilityTarget::Special])
    .submatchers(stat_boost_submatchers(true))
}

fn chain_growth() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Boosts chain multiplier growth rate",
        format!(
            r"Boosts the chain multiplier growth rate by {}(?: {})?",
            multiplier(),
            turns()
        ),
    )
    .targets([AbilityTarget::Captain, AbilityTarget::Special])
    .submatchers(vec![
        number_range("Growth rate multiplier", 1, 2),
        number_range("Duration in turns", 3, 4),
    ])
}

/// Percentage reduction or full immunity. The immunity branch captures
/// the literal "completely", which the numeric extractor normalizes to
/// infinity, so "at least N%" filters match it for any N.
fn damage_reduction() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Reduces damage received",
        format!(
            r"Reduces (?:any )?damage received by (\d+|\?)%(?:-(\d+)%)?(?: {})?|Makes the crew (completely) immune to damage(?: {})?",
            turns(),
            turns()
        ),
    )
    .targets([
        AbilityTarget::Captain,
        AbilityTarget::Special,
        AbilityTarget::SuperSpecial,
    ])
    .submatchers(vec![
        SubmatcherSpec::number("Damage reduction in %", vec![1, 2, 5]),
        SubmatcherSpec::number("Duration in turns", vec![3, 4, 6, 7]),
    ])
}

fn atk_vs_delayed() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Boosts ATK against delayed enemies",
        format!(
            r"Boosts ATK against delayed enemies by {} {}",
            multiplier(),
            turns()
        ),
    )
    .targets([AbilityTarget::Special])
    .submatchers(vec![
        number_range("ATK multiplier", 1, 2),
        number_range("Duration in turns", 3, 4),
    ])
}
