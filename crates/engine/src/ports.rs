//! Ports to excluded collaborators
//!
//! The engine treats the game-data source as opaque: it only needs raw
//! description text keyed by character id and ability slot. For support
//! abilities the stored text may itself be a serialized structure
//! (a JSON-encoded list of sub-abilities); rule patterns match that
//! serialized form directly, which is why they exclude quote and
//! period characters from their wildcards instead of `.`-matching
//! across sub-entry boundaries.

use abilitydex_domain::tag::TagSet;
use abilitydex_domain::target::AbilityTarget;

use crate::matcher::classify;
use crate::registry::RuleRegistry;

/// Read-only source of raw ability description text.
pub trait AbilityTextSource {
    /// The description text for one character's ability slot, if the
    /// character has that slot.
    fn ability_text(&self, character_id: u32, target: AbilityTarget) -> Option<String>;
}

/// Classify one character's ability slot via a text source.
///
/// A character without text for the slot classifies to the empty tag
/// set; that is not an error.
pub fn classify_character(
    registry: &RuleRegistry,
    source: &dyn AbilityTextSource,
    character_id: u32,
    target: AbilityTarget,
) -> TagSet {
    match source.ability_text(character_id, target) {
        Some(text) => classify(registry, target, &text),
        None => TagSet::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use abilitydex_domain::rule_spec::RuleSpec;
    use crate::registry::{BuildOptions, RuleRegistry};

    struct MapSource(HashMap<(u32, AbilityTarget), String>);

    impl AbilityTextSource for MapSource {
        fn ability_text(&self, character_id: u32, target: AbilityTarget) -> Option<String> {
            self.0.get(&(character_id, target)).cloned()
        }
    }

    #[test]
    fn test_classify_character_reads_the_slot_text() {
        let registry = RuleRegistry::build(
            &[RuleSpec::new("Recovery", "Heals", r"Recovers (\d+) HP")
                .targets([AbilityTarget::Special])],
            BuildOptions::default(),
        )
        .expect("builds");
        let mut texts = HashMap::new();
        texts.insert(
            (17, AbilityTarget::Special),
            "Recovers 3000 HP".to_string(),
        );
        let source = MapSource(texts);

        let tags = classify_character(&registry, &source, 17, AbilityTarget::Special);
        assert!(tags.contains(AbilityTarget::Special, "Recovery", "Heals"));

        // Missing slot classifies to empty, not an error
        let none = classify_character(&registry, &source, 17, AbilityTarget::Captain);
        assert!(none.is_empty());
    }
}
