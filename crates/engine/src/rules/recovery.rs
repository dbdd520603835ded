//! Recovery rules: healing and ailment duration reduction.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;

use crate::generators::{number, number_range};

use super::{NUM, SPAN};

const GROUP: &str = "Recovery";

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![
        flat_heal_legacy(),
        flat_heal(),
        rcv_multiple_heal(),
        end_of_turn_heal(),
        ailment_reduction(),
    ]
}

/// Superseded first take on flat healing: anchored at the start of the
/// text, so it missed heals appearing mid-description. Kept for
/// historical reference; the unanchored replacement below overwrites
/// it when legacy rules are included.
fn flat_heal_legacy() -> RuleSpec {
    RuleSpec::new(GROUP, "Recovers HP (flat)", r"^Recovers (\d+|\?) HP")
        .targets([AbilityTarget::Special, AbilityTarget::Support])
        .submatchers(vec![number("HP recovered", 1)])
        .legacy()
}

fn flat_heal() -> RuleSpec {
    RuleSpec::new(GROUP, "Recovers HP (flat)", r"Recovers (\d+|\?) HP")
        .targets([AbilityTarget::Special, AbilityTarget::Support])
        .submatchers(vec![number("HP recovered", 1)])
}

fn rcv_multiple_heal() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Recovers HP (RCV multiple)",
        format!(r"Recovers ({NUM})x(?:-({NUM})x)? {SPAN}*?RCV"),
    )
    .targets([AbilityTarget::Captain, AbilityTarget::Special])
    .submatchers(vec![number_range("RCV multiplier", 1, 2)])
}

fn end_of_turn_heal() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Recovers HP at end of turn",
        r"Recovers (\d+|\?) HP at the end of (?:each|the) turn(?: for (\d+)(?:-(\d+))? turns?)?",
    )
    .targets([AbilityTarget::Captain, AbilityTarget::Special])
    .submatchers(vec![
        number("HP recovered per turn", 1),
        number_range("Duration in turns", 2, 3),
    ])
}

/// `99+` and "completely" both mean full removal; the extractor
/// normalizes them to infinity.
fn ailment_reduction() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Reduces ailment duration",
        r"Reduces (Paralysis|Silence|Blindness|Bind|Despair) duration by (\d+|99\+) turns?|(completely) removes (Paralysis|Silence|Blindness|Bind|Despair)",
    )
    .targets([
        AbilityTarget::Special,
        AbilityTarget::Sailor,
        AbilityTarget::Potential,
    ])
    .submatchers(vec![
        SubmatcherSpec::number("Turns removed", vec![2, 3]),
        SubmatcherSpec::option("Paralysis", vec![1, 4], "Paralysis"),
        SubmatcherSpec::option("Silence", vec![1, 4], "Silence"),
        SubmatcherSpec::option("Blindness", vec![1, 4], "Blindness"),
        SubmatcherSpec::option("Bind", vec![1, 4], "Bind"),
        SubmatcherSpec::option("Despair", vec![1, 4], "Despair"),
    ])
}
