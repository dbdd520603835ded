//! abilitydex Engine - the ability-text classification runtime
//!
//! Compiles declarative rule specs into an immutable registry, matches
//! raw ability descriptions against it to extract structured tags, and
//! evaluates user filter selections against those tags. The library is
//! synchronous and stateless per call: after the registry is built,
//! classification is a pure function of the input text, safe to run
//! concurrently without locking.

pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod generators;
pub mod matcher;
pub mod ports;
pub mod registry;
pub mod rules;


pub use compiler::{compile_rule, compile_spec, CompiledSubmatcher, Rule};
pub use error::EngineError;
pub use evaluator::evaluate_filter;
pub use matcher::classify;
pub use ports::{classify_character, AbilityTextSource};
pub use registry::{default_registry, BuildOptions, Diagnostic, RuleRegistry, RuleSummary};

// The domain vocabulary, re-exported so consumers need one import
pub use abilitydex_domain::{
    AbilityTarget, Comparator, FilterConstraint, FilterSelection, NumberRange, RuleSpec,
    SubmatcherKind, SubmatcherSpec, Tag, TagSet, TagValue,
};
