//! Rule registry
//!
//! Compiled rules organized target -> group -> resolved name. Built
//! once from a spec list; immutable afterwards, so concurrent readers
//! need no locking. Rebuilding (e.g. hot-reloading rule tables) means
//! building a fresh registry and swapping it atomically, never mutating
//! one in place.
//!
//! Name collisions within a (target, group) pair are last-writer-wins:
//! the rule corpus is hand-maintained and collisions are sometimes
//! intentional supersession. Every overwrite is recorded as a
//! diagnostic and logged, never silent.

use std::collections::BTreeMap;
use std::fmt;

use abilitydex_domain::rule_spec::RuleSpec;
use abilitydex_domain::target::AbilityTarget;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::compiler::{compile_spec, Rule};
use crate::error::EngineError;
use crate::rules;

/// group -> resolved rule name -> rule. BTreeMap keeps iteration
/// lexicographic and therefore deterministic.
pub type GroupMap = BTreeMap<String, BTreeMap<String, Rule>>;

static EMPTY_GROUPS: Lazy<GroupMap> = Lazy::new(BTreeMap::new);

/// Registry build configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Skip specs marked legacy entirely
    pub exclude_legacy: bool,
    /// Treat bound-group references past the pattern's capture count
    /// as fatal instead of diagnostics
    pub strict_group_refs: bool,
}

/// Non-fatal findings recorded while building a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A later spec overwrote an earlier rule with the same resolved
    /// name in the same (target, group)
    Collision {
        target: AbilityTarget,
        group: String,
        name: String,
    },
    /// A submatcher references a capture group the pattern does not
    /// define (lenient mode only)
    GroupReference {
        rule: String,
        submatcher: String,
        group: usize,
        available: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision {
                target,
                group,
                name,
            } => write!(
                f,
                "rule '{name}' registered twice for ({target}, {group}); last registration wins"
            ),
            Self::GroupReference {
                rule,
                submatcher,
                group,
                available,
            } => write!(
                f,
                "rule '{rule}', submatcher '{submatcher}': bound group {group} \
                 exceeds pattern's {available} capture group(s)"
            ),
        }
    }
}

/// A rule's presentation summary, for filter sidebars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub name: String,
    pub submatcher_descriptions: Vec<String>,
}

/// The immutable lookup structure consumed at classification and query
/// time.
#[derive(Debug)]
pub struct RuleRegistry {
    by_target: BTreeMap<AbilityTarget, GroupMap>,
    diagnostics: Vec<Diagnostic>,
}

impl RuleRegistry {
    /// Compile `specs` and assemble the target -> group -> name lookup.
    ///
    /// Fatal errors (malformed patterns, inconsistent submatchers, and
    /// group references under `strict_group_refs`) fail the whole
    /// build: the process must not serve queries from a partially
    /// built registry.
    pub fn build(specs: &[RuleSpec], options: BuildOptions) -> Result<Self, EngineError> {
        let mut by_target: BTreeMap<AbilityTarget, GroupMap> = BTreeMap::new();
        let mut diagnostics = Vec::new();
        let mut rule_count = 0usize;

        for spec in specs {
            if options.exclude_legacy && spec.legacy {
                continue;
            }
            if spec.targets.is_empty() {
                return Err(EngineError::NoTargets {
                    rule: spec.name.clone(),
                });
            }

            let compilation = compile_spec(spec, options.strict_group_refs)?;
            for warning in &compilation.group_warnings {
                if let EngineError::GroupReference {
                    rule,
                    submatcher,
                    group,
                    available,
                } = warning
                {
                    tracing::warn!(%rule, %submatcher, group, available, "bound group out of range");
                    diagnostics.push(Diagnostic::GroupReference {
                        rule: rule.clone(),
                        submatcher: submatcher.clone(),
                        group: *group,
                        available: *available,
                    });
                }
            }

            for &target in &spec.targets {
                let rule = compilation.rule_for(spec, target);
                let name = rule.name.clone();
                let group = rule.group.clone();
                let groups = by_target.entry(target).or_default();
                let rules = groups.entry(group.clone()).or_default();
                if rules.insert(name.clone(), rule).is_some() {
                    tracing::warn!(
                        target = %target,
                        %group,
                        rule = %name,
                        "rule name collision; last registration wins"
                    );
                    diagnostics.push(Diagnostic::Collision {
                        target,
                        group,
                        name,
                    });
                }
                rule_count += 1;
            }
        }

        tracing::debug!(
            rules = rule_count,
            diagnostics = diagnostics.len(),
            "rule registry built"
        );
        Ok(Self {
            by_target,
            diagnostics,
        })
    }

    /// The group -> name -> rule mapping for one target. A target with
    /// no rules yields an empty mapping, not an error.
    pub fn lookup(&self, target: AbilityTarget) -> &GroupMap {
        self.by_target.get(&target).unwrap_or(&EMPTY_GROUPS)
    }

    /// Group names for a target, in iteration (lexicographic) order.
    pub fn list_groups(&self, target: AbilityTarget) -> Vec<&str> {
        self.lookup(target).keys().map(String::as_str).collect()
    }

    /// Rule summaries for one (target, group), in name order.
    pub fn list_rules(&self, target: AbilityTarget, group: &str) -> Vec<RuleSummary> {
        self.lookup(target)
            .get(group)
            .map(|rules| {
                rules
                    .values()
                    .map(|rule| RuleSummary {
                        name: rule.name.clone(),
                        submatcher_descriptions: rule
                            .submatcher_descriptions()
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One rule by its exact (target, group, resolved name) triple.
    pub fn rule(&self, target: AbilityTarget, group: &str, name: &str) -> Option<&Rule> {
        self.lookup(target).get(group)?.get(name)
    }

    /// Findings recorded during the build (collisions, lenient-mode
    /// group references).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// The process-wide registry over the built-in rule tables, built on
/// first use and read-only afterwards. Legacy rules are excluded; the
/// built-in tables must pass strict group-reference checking.
pub fn default_registry() -> &'static RuleRegistry {
    static REGISTRY: Lazy<RuleRegistry> = Lazy::new(|| {
        RuleRegistry::build(
            &rules::all_specs(),
            BuildOptions {
                exclude_legacy: true,
                strict_group_refs: true,
            },
        )
        .expect("built-in rule tables compile")
    });
    &REGISTRY
}
