//! Orb manipulation rules: conversion, amplification, locking, and
//! position-scoped changes.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;
use abilitydex_domain::taxonomy::ORBS;

use crate::generators::{
    combined_position_options, number_range, option_set, position_options,
};

use super::{multiplier, prefixed, turns, SPAN};

const GROUP: &str = "Orb manipulation";

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![
        orb_conversion(),
        orb_amplification(),
        orb_lock(),
        positional_conversion(),
        cell_swap(),
    ]
}

/// Two option sets from the same orb table on one rule; the prefixes
/// keep their value-map keys distinct.
fn orb_conversion() -> RuleSpec {
    let mut submatchers = vec![SubmatcherSpec::separator("From")];
    submatchers.extend(prefixed("From: ", option_set(&ORBS, &[1], Some("all"))));
    submatchers.push(SubmatcherSpec::separator("Into"));
    submatchers.extend(prefixed("Into: ", option_set(&ORBS, &[2], None)));
    RuleSpec::new(
        GROUP,
        "Changes orbs",
        format!(r"Changes ({SPAN}+?) orbs into ({SPAN}+?) orbs"),
    )
    .targets([
        AbilityTarget::Special,
        AbilityTarget::SuperSpecial,
        AbilityTarget::Swap,
    ])
    .submatchers(submatchers)
}

fn orb_amplification() -> RuleSpec {
    let mut submatchers = option_set(&ORBS, &[1], Some("all|matching"));
    submatchers.push(number_range("Effect multiplier", 2, 3));
    submatchers.push(number_range("Duration in turns", 4, 5));
    RuleSpec::new(
        GROUP,
        "Boosts effects of orbs",
        format!(
            r"Boosts the effects of ({SPAN}+?) orbs by {}(?: {})?",
            multiplier(),
            turns()
        ),
    )
    .targets([
        AbilityTarget::Captain,
        AbilityTarget::Special,
        AbilityTarget::Support,
    ])
    .submatchers(submatchers)
}

fn orb_lock() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Locks orbs",
        r"Locks (?:all )?orbs for (\d+)(?:-(\d+))? turns?",
    )
    .targets([AbilityTarget::Special, AbilityTarget::Potential])
    .submatchers(vec![number_range("Duration in turns", 1, 2)])
}

/// Row/column scoped conversion uses the simple positional breakdown.
fn positional_conversion() -> RuleSpec {
    let mut submatchers = position_options(&[1]);
    submatchers.push(SubmatcherSpec::separator("Into"));
    submatchers.extend(prefixed("Into: ", option_set(&ORBS, &[2], None)));
    RuleSpec::new(
        GROUP,
        "Changes orbs in positions",
        format!(r"Changes the orbs in the ({SPAN}+?) into ({SPAN}+?) orbs"),
    )
    .targets([AbilityTarget::Special])
    .submatchers(submatchers)
}

/// Abilities that address one rectangular sub-grid get the denser
/// combined positional mode instead of rows/columns.
fn cell_swap() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Swaps orbs in board cells",
        r"Swaps the orbs in the ((?:top|middle|bottom)[- ](?:left|right)) (?:cells?|quadrant)",
    )
    .targets([AbilityTarget::Special, AbilityTarget::Swap])
    .submatchers(combined_position_options(&[1]))
}
