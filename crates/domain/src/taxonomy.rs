//! Taxonomy tables
//!
//! Closed enumerations the submatcher generators expand into option
//! filters: elemental types, unit classes, orb symbols, and board
//! positions. Each entry carries a canonical id, a ready-to-use regex
//! fragment (pre-escaped where the textual form contains
//! metacharacters, e.g. bracketed orb symbols), and a display label.
//!
//! Tables are static data compiled into the crate; the engine never
//! fetches them dynamically.

use serde::Serialize;

/// Layout hint for rendering an option filter derived from an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthHint {
    Full,
    Half,
    Third,
    Quarter,
}

/// One entry of a taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    /// Canonical identifier, unique within its table
    pub id: &'static str,
    /// Regex fragment matching this entry's textual form. Pre-escaped:
    /// safe to interpolate into a larger pattern verbatim.
    pub match_fragment: &'static str,
    /// Display label (stable identifier for localization)
    pub label: &'static str,
    /// Layout hint for the derived option filter
    pub width_hint: WidthHint,
}

impl TaxonomyEntry {
    const fn new(
        id: &'static str,
        match_fragment: &'static str,
        label: &'static str,
        width_hint: WidthHint,
    ) -> Self {
        Self {
            id,
            match_fragment,
            label,
            width_hint,
        }
    }
}

/// An ordered taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyTable {
    /// Table name, used in diagnostics
    pub name: &'static str,
    pub entries: &'static [TaxonomyEntry],
}

impl TaxonomyTable {
    /// Look up an entry by its canonical id.
    pub fn entry(&self, id: &str) -> Option<&'static TaxonomyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// The five elemental types. Ability text names them bare ("STR characters").
pub const TYPES: TaxonomyTable = TaxonomyTable {
    name: "types",
    entries: &[
        TaxonomyEntry::new("STR", "STR", "STR", WidthHint::Third),
        TaxonomyEntry::new("DEX", "DEX", "DEX", WidthHint::Third),
        TaxonomyEntry::new("QCK", "QCK", "QCK", WidthHint::Third),
        TaxonomyEntry::new("PSY", "PSY", "PSY", WidthHint::Third),
        TaxonomyEntry::new("INT", "INT", "INT", WidthHint::Third),
    ],
};

/// The eight unit classes, matched bare.
pub const CLASSES: TaxonomyTable = TaxonomyTable {
    name: "classes",
    entries: &[
        TaxonomyEntry::new("Fighter", "Fighter", "Fighter", WidthHint::Third),
        TaxonomyEntry::new("Slasher", "Slasher", "Slasher", WidthHint::Third),
        TaxonomyEntry::new("Striker", "Striker", "Striker", WidthHint::Third),
        TaxonomyEntry::new("Shooter", "Shooter", "Shooter", WidthHint::Third),
        TaxonomyEntry::new("FreeSpirit", "Free Spirit", "Free Spirit", WidthHint::Third),
        TaxonomyEntry::new("Cerebral", "Cerebral", "Cerebral", WidthHint::Third),
        TaxonomyEntry::new("Powerhouse", "Powerhouse", "Powerhouse", WidthHint::Third),
        TaxonomyEntry::new("Driven", "Driven", "Driven", WidthHint::Third),
    ],
};

/// Orb symbols, matched in their literal bracketed form (`[STR]`).
/// Fragments carry the escaped brackets.
pub const ORBS: TaxonomyTable = TaxonomyTable {
    name: "orbs",
    entries: &[
        TaxonomyEntry::new("STR", r"\[STR\]", "STR", WidthHint::Quarter),
        TaxonomyEntry::new("DEX", r"\[DEX\]", "DEX", WidthHint::Quarter),
        TaxonomyEntry::new("QCK", r"\[QCK\]", "QCK", WidthHint::Quarter),
        TaxonomyEntry::new("PSY", r"\[PSY\]", "PSY", WidthHint::Quarter),
        TaxonomyEntry::new("INT", r"\[INT\]", "INT", WidthHint::Quarter),
        TaxonomyEntry::new("RCV", r"\[RCV\]", "RCV", WidthHint::Quarter),
        TaxonomyEntry::new("TND", r"\[TND\]", "TND", WidthHint::Quarter),
        TaxonomyEntry::new("EMPTY", r"\[EMPTY\]", "Empty", WidthHint::Quarter),
        TaxonomyEntry::new("BOMB", r"\[BOMB\]", "Bomb", WidthHint::Quarter),
        TaxonomyEntry::new("G", r"\[G\]", "G", WidthHint::Quarter),
        TaxonomyEntry::new("SUPERBOMB", r"\[SUPERBOMB\]", "Super Bomb", WidthHint::Quarter),
        TaxonomyEntry::new("RAINBOW", r"\[RAINBOW\]", "Rainbow", WidthHint::Quarter),
        TaxonomyEntry::new("WANO", r"\[WANO\]", "Wano", WidthHint::Quarter),
        TaxonomyEntry::new("BLOCK", r"\[BLOCK\]", "Block", WidthHint::Quarter),
    ],
};

/// Simple positional qualifiers: full rows/columns plus adjacency and self.
pub const POSITIONS: TaxonomyTable = TaxonomyTable {
    name: "positions",
    entries: &[
        TaxonomyEntry::new("topRow", "top row", "Top row", WidthHint::Half),
        TaxonomyEntry::new("middleRow", "middle row", "Middle row", WidthHint::Half),
        TaxonomyEntry::new("bottomRow", "bottom row", "Bottom row", WidthHint::Half),
        TaxonomyEntry::new("leftColumn", "left column", "Left column", WidthHint::Half),
        TaxonomyEntry::new("rightColumn", "right column", "Right column", WidthHint::Half),
        TaxonomyEntry::new("adjacent", "adjacent", "Adjacent", WidthHint::Half),
        TaxonomyEntry::new("self", "this character", "Self", WidthHint::Half),
    ],
};

/// Combined positional mode: the six fixed board cells, for abilities
/// that describe one rectangular sub-grid instead of full rows/columns.
pub const BOARD_CELLS: TaxonomyTable = TaxonomyTable {
    name: "boardCells",
    entries: &[
        TaxonomyEntry::new("topLeft", "top[- ]left", "Top left", WidthHint::Half),
        TaxonomyEntry::new("topRight", "top[- ]right", "Top right", WidthHint::Half),
        TaxonomyEntry::new("middleLeft", "middle[- ]left", "Middle left", WidthHint::Half),
        TaxonomyEntry::new("middleRight", "middle[- ]right", "Middle right", WidthHint::Half),
        TaxonomyEntry::new("bottomLeft", "bottom[- ]left", "Bottom left", WidthHint::Half),
        TaxonomyEntry::new("bottomRight", "bottom[- ]right", "Bottom right", WidthHint::Half),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes_match_game_data() {
        assert_eq!(TYPES.entries.len(), 5);
        assert_eq!(CLASSES.entries.len(), 8);
        assert_eq!(ORBS.entries.len(), 14);
        assert_eq!(BOARD_CELLS.entries.len(), 6);
    }

    #[test]
    fn test_entry_lookup_by_id() {
        let entry = ORBS.entry("RAINBOW").expect("RAINBOW orb exists");
        assert_eq!(entry.label, "Rainbow");
        assert!(TYPES.entry("RAINBOW").is_none());
    }

    #[test]
    fn test_ids_are_unique_within_each_table() {
        for table in [TYPES, CLASSES, ORBS, POSITIONS, BOARD_CELLS] {
            for (i, entry) in table.entries.iter().enumerate() {
                assert!(
                    !table.entries[..i].iter().any(|e| e.id == entry.id),
                    "duplicate id '{}' in table '{}'",
                    entry.id,
                    table.name
                );
            }
        }
    }

    #[test]
    fn test_orb_fragments_escape_brackets() {
        for entry in ORBS.entries {
            assert!(entry.match_fragment.starts_with(r"\["));
            assert!(entry.match_fragment.ends_with(r"\]"));
        }
    }
}
