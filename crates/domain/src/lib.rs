//! abilitydex Domain - pure value types for the ability-text
//! classification engine
//!
//! This crate holds the data model only: taxonomy tables, target
//! kinds, submatcher and rule specifications, tags, numeric sentinel
//! semantics, and filter constraints. It deliberately carries no regex
//! dependency - specs hold pattern *source strings*; compilation and
//! matching live in `abilitydex-engine`.

pub mod error;
pub mod filter;
pub mod number;
pub mod rule_spec;
pub mod submatcher;
pub mod tag;
pub mod target;
pub mod taxonomy;

pub use error::DomainError;
pub use filter::{FilterConstraint, FilterSelection};
pub use number::{parse_ability_number, Comparator, NumberRange, UNKNOWN_TOKEN};
pub use rule_spec::{RuleSpec, TARGET_PLACEHOLDER};
pub use submatcher::{SubmatcherKind, SubmatcherSpec};
pub use tag::{Tag, TagSet, TagValue};
pub use target::AbilityTarget;
pub use taxonomy::{
    TaxonomyEntry, TaxonomyTable, WidthHint, BOARD_CELLS, CLASSES, ORBS, POSITIONS, TYPES,
};
