//! Damage rules: typeless damage, HP-proportional damage, HP cuts.

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::target::AbilityTarget;

use crate::generators::number;

const GROUP: &str = "Damage dealt";

pub(super) fn specs() -> Vec<RuleSpec> {
    vec![typeless_damage(), proportional_damage(), hp_cut()]
}

fn typeless_damage() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Deals typeless damage",
        r"Deals (\d+|\?)x (?:the )?character's ATK in typeless damage to (all|one) enem(?:ies|y)",
    )
    .targets([AbilityTarget::Special, AbilityTarget::SuperSpecial])
    .submatchers(vec![
        number("Damage multiplier", 1),
        SubmatcherSpec::option("Hits all enemies", vec![2], "all").with_radio_group("targeting"),
        SubmatcherSpec::option("Single target", vec![2], "one").with_radio_group("targeting"),
    ])
}

fn proportional_damage() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Deals damage proportional to enemy HP",
        r"Deals (\d+|\?)% of enemies' (current|max) HP in damage",
    )
    .targets([AbilityTarget::Special])
    .submatchers(vec![
        number("Percentage of HP", 1),
        SubmatcherSpec::option("Based on current HP", vec![2], "current")
            .with_radio_group("hpBasis"),
        SubmatcherSpec::option("Based on max HP", vec![2], "max").with_radio_group("hpBasis"),
    ])
}

fn hp_cut() -> RuleSpec {
    RuleSpec::new(
        GROUP,
        "Cuts enemy HP",
        r"(?:Cuts|Reduces) the current HP of (?:each|all) enem(?:y|ies) by (\d+|\?)%",
    )
    .targets([AbilityTarget::Special, AbilityTarget::SuperSpecial])
    .submatchers(vec![number("HP cut in %", 1)])
}
