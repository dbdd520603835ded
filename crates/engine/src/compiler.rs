//! Rule compiler
//!
//! Validates and freezes a `RuleSpec` into immutable, ready-to-evaluate
//! rules - one per declared target. Compilation is side-effect-free and
//! repeatable; the expensive parts (compiled patterns, submatcher list)
//! are built once per spec and reference-shared across the per-target
//! copies, which differ only in name and target.

use std::sync::Arc;

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::submatcher::{SubmatcherKind, SubmatcherSpec};
use abilitydex_domain::target::AbilityTarget;
use regex::{Regex, RegexBuilder};

use crate::error::EngineError;

/// A submatcher with its own pattern compiled (Option kind only; Text
/// and Number extract directly from the rule's capture groups).
#[derive(Debug, Clone)]
pub struct CompiledSubmatcher {
    pub spec: SubmatcherSpec,
    pub pattern: Option<Regex>,
}

/// An immutable, compiled classification rule for one target.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name with the target placeholder resolved
    pub name: String,
    pub group: String,
    pub target: AbilityTarget,
    pub pattern: Regex,
    pub submatchers: Arc<Vec<CompiledSubmatcher>>,
    pub legacy: bool,
}

impl Rule {
    /// Submatcher descriptions in declaration order, for filter
    /// sidebars.
    pub fn submatcher_descriptions(&self) -> Vec<&str> {
        self.submatchers
            .iter()
            .map(|s| s.spec.description.as_str())
            .collect()
    }
}

/// The target-independent output of compiling one spec.
#[derive(Debug)]
pub struct Compilation {
    pub pattern: Regex,
    pub submatchers: Arc<Vec<CompiledSubmatcher>>,
    /// Non-fatal bound-group violations found outside strict mode
    pub group_warnings: Vec<EngineError>,
}

impl Compilation {
    /// The compiled rule copy for one target. Pattern and submatchers
    /// are shared; only name and target differ.
    pub fn rule_for(&self, spec: &RuleSpec, target: AbilityTarget) -> Rule {
        Rule {
            name: spec.resolved_name(target),
            group: spec.group.clone(),
            target,
            pattern: self.pattern.clone(),
            submatchers: Arc::clone(&self.submatchers),
            legacy: spec.legacy,
        }
    }
}

/// Compile and validate one spec.
///
/// Bound-group references past the pattern's capture-group count are a
/// latent bug class in hand-maintained rule tables: they fail the
/// build under `strict_group_refs` and are returned as warnings
/// otherwise.
pub fn compile_spec(spec: &RuleSpec, strict_group_refs: bool) -> Result<Compilation, EngineError> {
    let pattern = RegexBuilder::new(&spec.pattern)
        .case_insensitive(spec.case_insensitive)
        .build()
        .map_err(|source| EngineError::InvalidPattern {
            rule: spec.name.clone(),
            source: Box::new(source),
        })?;

    // captures_len() counts group 0 (the whole match), which stays
    // reserved; submatchers bind explicit groups only
    let available = pattern.captures_len() - 1;

    let mut group_warnings = Vec::new();
    let mut submatchers = Vec::with_capacity(spec.submatchers.len());
    for sub in &spec.submatchers {
        validate_submatcher(spec, sub)?;
        for &group in &sub.bound_groups {
            if group == 0 || group > available {
                let err = EngineError::GroupReference {
                    rule: spec.name.clone(),
                    submatcher: sub.description.clone(),
                    group,
                    available,
                };
                if strict_group_refs {
                    return Err(err);
                }
                group_warnings.push(err);
            }
        }
        let compiled = match (&sub.kind, &sub.pattern) {
            (SubmatcherKind::Option, Some(source)) => Some(
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| EngineError::InvalidSubmatcherPattern {
                        rule: spec.name.clone(),
                        submatcher: sub.description.clone(),
                        source: Box::new(source),
                    })?,
            ),
            _ => None,
        };
        submatchers.push(CompiledSubmatcher {
            spec: sub.clone(),
            pattern: compiled,
        });
    }

    Ok(Compilation {
        pattern,
        submatchers: Arc::new(submatchers),
        group_warnings,
    })
}

/// Compile one spec for one target, enforcing group references.
pub fn compile_rule(spec: &RuleSpec, target: AbilityTarget) -> Result<Rule, EngineError> {
    let compilation = compile_spec(spec, true)?;
    Ok(compilation.rule_for(spec, target))
}

fn validate_submatcher(spec: &RuleSpec, sub: &SubmatcherSpec) -> Result<(), EngineError> {
    match sub.kind {
        SubmatcherKind::Separator => Ok(()),
        SubmatcherKind::Option => {
            if sub.pattern.is_none() {
                return Err(EngineError::InvalidSubmatcher {
                    rule: spec.name.clone(),
                    submatcher: sub.description.clone(),
                    message: "Option submatcher requires a pattern".to_string(),
                });
            }
            require_bound_groups(spec, sub)
        }
        SubmatcherKind::Number | SubmatcherKind::Text => require_bound_groups(spec, sub),
    }
}

fn require_bound_groups(spec: &RuleSpec, sub: &SubmatcherSpec) -> Result<(), EngineError> {
    if sub.bound_groups.is_empty() {
        return Err(EngineError::InvalidSubmatcher {
            rule: spec.name.clone(),
            submatcher: sub.description.clone(),
            message: "submatcher binds no capture groups".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abilitydex_domain::submatcher::SubmatcherSpec;

    fn atk_spec() -> RuleSpec {
        RuleSpec::new(
            "Buffs",
            "Boosts ATK of %targets%",
            r#"Boosts ATK of [^".]*? by (\d+(?:\.\d+)?|\?)x(?:-(\d+(?:\.\d+)?)x)?"#,
        )
        .targets([AbilityTarget::Captain, AbilityTarget::Support])
        .submatchers(vec![SubmatcherSpec::number("ATK multiplier", vec![1, 2])])
    }

    #[test]
    fn test_compile_resolves_name_per_target() {
        let spec = atk_spec();
        let compilation = compile_spec(&spec, true).expect("spec compiles");
        let captain = compilation.rule_for(&spec, AbilityTarget::Captain);
        let support = compilation.rule_for(&spec, AbilityTarget::Support);
        assert_eq!(captain.name, "Boosts ATK of captains");
        assert_eq!(support.name, "Boosts ATK of supports");
        assert_eq!(captain.group, support.group);
        // Pattern and submatchers are shared between copies
        assert!(Arc::ptr_eq(&captain.submatchers, &support.submatchers));
    }

    #[test]
    fn test_invalid_pattern_is_fatal_and_names_the_rule() {
        let spec = RuleSpec::new("Buffs", "Broken", r"Boosts (ATK");
        let err = compile_spec(&spec, false).expect_err("unbalanced paren");
        match err {
            EngineError::InvalidPattern { rule, .. } => assert_eq!(rule, "Broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_group_reference_warns_by_default_and_fails_strict() {
        let spec = RuleSpec::new("Buffs", "Overreach", r"Boosts ATK by (\d+)x")
            .submatchers(vec![SubmatcherSpec::number("Multiplier", vec![1, 2])]);

        let lenient = compile_spec(&spec, false).expect("lenient build succeeds");
        assert_eq!(lenient.group_warnings.len(), 1);

        let err = compile_spec(&spec, true).expect_err("strict build fails");
        assert!(matches!(
            err,
            EngineError::GroupReference { group: 2, available: 1, .. }
        ));
    }

    #[test]
    fn test_group_zero_is_reserved() {
        let spec = RuleSpec::new("Buffs", "WholeMatch", r"Boosts ATK by (\d+)x")
            .submatchers(vec![SubmatcherSpec::text("Raw", vec![0])]);
        assert!(matches!(
            compile_spec(&spec, true),
            Err(EngineError::GroupReference { group: 0, .. })
        ));
    }

    #[test]
    fn test_option_without_pattern_is_rejected() {
        let mut bad = SubmatcherSpec::option("STR", vec![1], "STR");
        bad.pattern = None;
        let spec = RuleSpec::new("Buffs", "BadOption", r"of (STR|DEX) characters")
            .submatchers(vec![bad]);
        assert!(matches!(
            compile_spec(&spec, true),
            Err(EngineError::InvalidSubmatcher { .. })
        ));
    }

    #[test]
    fn test_option_pattern_is_case_insensitive() {
        let spec = RuleSpec::new("Buffs", "Types", r"of ((?:STR|DEX)(?:, (?:STR|DEX))*) characters")
            .submatchers(vec![SubmatcherSpec::option("STR", vec![1], "str")]);
        let compilation = compile_spec(&spec, true).expect("compiles");
        let option = &compilation.submatchers[0];
        let pattern = option.pattern.as_ref().expect("option pattern compiled");
        assert!(pattern.is_match("STR"));
    }

    #[test]
    fn test_compilation_is_repeatable() {
        let spec = atk_spec();
        let first = compile_spec(&spec, true).expect("compiles");
        let second = compile_spec(&spec, true).expect("compiles again");
        assert_eq!(first.pattern.as_str(), second.pattern.as_str());
        assert_eq!(first.submatchers.len(), second.submatchers.len());
    }
}
