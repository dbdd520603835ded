//! Built-in rule tables
//!
//! The declarative data driving the engine: one module per semantic
//! group, each building its specs from the shared fragments below and
//! the submatcher generators. Patterns are written for the corpus's
//! fixed phrasing, not arbitrary language.
//!
//! Pattern discipline: wildcards are tempered (`[^".]`) rather than
//! `.` so a pattern can never span across sub-entries of serialized
//! support text (which contains literal quotes and periods as entry
//! boundaries). The regex engine is linear-time, so alternation order
//! here encodes capture precedence, not performance workarounds.

mod buffs;
mod crew;
mod damage;
mod debuffs;
mod orbs;
mod recovery;

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::SubmatcherSpec;

/// A decimal number or the unknown placeholder.
pub(crate) const NUM: &str = r"\d+(?:\.\d+)?|\?";

/// Tempered wildcard: any run of characters that stays inside one
/// sub-entry of serialized ability text.
pub(crate) const SPAN: &str = r#"[^".]"#;

/// Phrases meaning "everyone", unioned into type/class option patterns.
pub(crate) const UNIVERSAL: &str = "all characters|everyone";

/// A multiplier capture with an optional range: `2x` or `2x-3x`.
pub(crate) fn multiplier() -> String {
    format!(r"({NUM})x(?:-({NUM})x)?")
}

/// A percentage capture with an optional range: `50%` or `30%-50%`.
pub(crate) fn percentage() -> String {
    format!(r"({NUM})%(?:-({NUM})%)?")
}

/// A turn-count capture with an optional range: `for 3 turns`.
pub(crate) fn turns() -> String {
    r"for (\d+)(?:-(\d+))? turns?".to_string()
}

/// Prefix every description, so two option sets from the same table
/// can coexist on one rule without colliding in the tag's value map.
pub(crate) fn prefixed(prefix: &str, specs: Vec<SubmatcherSpec>) -> Vec<SubmatcherSpec> {
    specs
        .into_iter()
        .map(|mut spec| {
            spec.description = format!("{prefix}{}", spec.description);
            spec
        })
        .collect()
}

/// Every built-in rule spec, in group-module order. Registration order
/// only matters for collision resolution (legacy specs precede their
/// replacements); lookup order is normalized by the registry.
pub fn all_specs() -> Vec<RuleSpec> {
    let mut specs = Vec::new();
    specs.extend(buffs::specs());
    specs.extend(debuffs::specs());
    specs.extend(recovery::specs());
    specs.extend(damage::specs());
    specs.extend(orbs::specs());
    specs.extend(crew::specs());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BuildOptions, RuleRegistry};

    #[test]
    fn test_all_specs_build_under_strict_checking() {
        let specs = all_specs();
        assert!(specs.len() >= 25, "expected a substantial rule corpus");
        let registry = RuleRegistry::build(
            &specs,
            BuildOptions {
                exclude_legacy: true,
                strict_group_refs: true,
            },
        )
        .expect("built-in tables must compile strictly");
        assert!(registry.diagnostics().is_empty());
    }

    #[test]
    fn test_legacy_specs_collide_with_their_replacements_when_included() {
        // Superseded rules stay in the tables for historical reference;
        // including them must surface the overwrite, not hide it.
        let registry = RuleRegistry::build(&all_specs(), BuildOptions::default())
            .expect("lenient build succeeds");
        assert!(
            !registry.diagnostics().is_empty(),
            "legacy supersession should be observable as collision diagnostics"
        );
    }

    #[test]
    fn test_fragment_helpers_compile() {
        for fragment in [multiplier(), percentage(), turns()] {
            assert!(regex::Regex::new(&fragment).is_ok(), "bad fragment: {fragment}");
        }
    }
}
