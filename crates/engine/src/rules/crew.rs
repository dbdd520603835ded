//! Crew-side rules: sailor immunities, support contributions, special
//! charging, limit-break notes, and super-special activation criteria.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;

use crate::generators::{number, number_range};

use super::SPAN;

const GROUP: &str = "Crew and support";

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![
        ailment_immunity(),
        support_atk(),
        special_charge(),
        swap_charge(),
        activation_hp_threshold(),
        acquired_potential(),
    ]
}

fn ailment_immunity() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Grants ailment immunity",
        r"Makes (this character|the crew) immune to (Blindness|Paralysis|Silence|Despair)",
    )
    .targets([AbilityTarget::Sailor, AbilityTarget::Potential])
    .submatchers(vec![
        SubmatcherSpec::option("Blindness", vec![2], "Blindness"),
        SubmatcherSpec::option("Paralysis", vec![2], "Paralysis"),
        SubmatcherSpec::option("Silence", vec![2], "Silence"),
        SubmatcherSpec::option("Despair", vec![2], "Despair"),
        SubmatcherSpec::option("Crew-wide", vec![1], "crew"),
    ])
}

fn support_atk() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Adds ATK to supported character",
        r"Adds (\d+|\?)% of this character's ATK to the supported character",
    )
    .targets([AbilityTarget::Support])
    .submatchers(vec![number("ATK contribution in %", 1)])
}

/// Named with the target placeholder: the same spec reads
/// "Reduces special charge time of specials" / "... of supports" /
/// "... of super specials" depending on the slot it is registered for.
fn special_charge() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Reduces special charge time of %targets%",
        format!(r"Reduces the special charge time of {SPAN}+? by (\d+)(?:-(\d+))? turns?"),
    )
    .targets([
        AbilityTarget::Special,
        AbilityTarget::Support,
        AbilityTarget::SuperSpecial,
    ])
    .submatchers(vec![number_range("Turns reduced", 1, 2)])
}

fn swap_charge() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Charges special on swap",
        r"Reduces own special charge time by (\d+) turns? when swapped",
    )
    .targets([AbilityTarget::Swap])
    .submatchers(vec![number("Turns reduced", 1)])
}

fn activation_hp_threshold() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Requires HP threshold",
        r"HP is (below|above) (\d+)%",
    )
    .targets([AbilityTarget::SuperSpecialCriteria])
    .submatchers(vec![
        SubmatcherSpec::option("Below threshold", vec![1], "below").with_radio_group("direction"),
        SubmatcherSpec::option("Above threshold", vec![1], "above").with_radio_group("direction"),
        number("HP threshold in %", 2),
    ])
}

/// The captured potential name is kept verbatim and searched with the
/// user's own pattern at query time.
fn acquired_potential() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Acquires a Potential",
        r#"Acquires the (?:new )?Potential "([^"]+)""#,
    )
    .targets([AbilityTarget::LimitBreak])
    .submatchers(vec![SubmatcherSpec::text("Potential name", vec![1])])
}
