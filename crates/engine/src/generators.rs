//! Submatcher generators
//!
//! Pure builders that expand a taxonomy table into a list of Option
//! submatchers bound to the same capture groups, plus small helpers
//! for the common numeric extractors. Generators hold no state and may
//! be called any number of times while different rules reuse the same
//! table against different capture-group positions.

use abilitydex_domain::submatcher::SubmatcherSpec;
use abilitydex_domain::taxonomy::{TaxonomyTable, BOARD_CELLS, POSITIONS};

/// Escape arbitrary text for literal interpolation into a pattern.
///
/// Rule authors use this whenever an id or textual form could contain
/// regex metacharacters.
pub fn literal(text: &str) -> String {
    regex::escape(text)
}

/// The escaped bracketed form of a symbol id: `[RCV]` -> `\[RCV\]`.
pub fn bracketed(id: &str) -> String {
    format!(r"\[{}\]", regex::escape(id))
}

/// One Option submatcher per table entry, each bound to `bound_groups`
/// and matching the entry's fragment. When `universal` is given, every
/// option additionally matches that alternative (phrases meaning
/// "all"/"any"), so an ability affecting everyone satisfies every
/// entry's filter.
pub fn option_set(
    table: &TaxonomyTable,
    bound_groups: &[usize],
    universal: Option<&str>,
) -> Vec<SubmatcherSpec> {
    table
        .entries
        .iter()
        .map(|entry| {
            let pattern = match universal {
                Some(universal) => {
                    format!("(?:{}|{})", entry.match_fragment, universal)
                }
                None => entry.match_fragment.to_string(),
            };
            SubmatcherSpec::option(entry.label, bound_groups.to_vec(), pattern)
        })
        .collect()
}

/// Row/column/adjacent/self positional breakdown.
pub fn position_options(bound_groups: &[usize]) -> Vec<SubmatcherSpec> {
    option_set(&POSITIONS, bound_groups, None)
}

/// Combined positional mode: the six fixed board cells, for abilities
/// describing one rectangular sub-grid. The options share a radio
/// group because only one cell region applies at a time.
pub fn combined_position_options(bound_groups: &[usize]) -> Vec<SubmatcherSpec> {
    option_set(&BOARD_CELLS, bound_groups, None)
        .into_iter()
        .map(|spec| spec.with_radio_group("boardCell"))
        .collect()
}

/// A single-value numeric extractor bound to one group.
pub fn number(description: &str, group: usize) -> SubmatcherSpec {
    SubmatcherSpec::number(description, vec![group])
}

/// A range-capable numeric extractor: `low_group` captures the lower
/// bound, `high_group` the optional upper bound. When only the lower
/// bound captures, the extracted range collapses to an exact value.
pub fn number_range(description: &str, low_group: usize, high_group: usize) -> SubmatcherSpec {
    SubmatcherSpec::number(description, vec![low_group, high_group])
}
