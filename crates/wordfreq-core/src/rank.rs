//! Ranking of frequency-table entries.
//!
//! Entries are ordered by frequency, highest first, and ties are broken by
//! word in ascending code point order. The order is total, so a ranking is
//! fully determined by the input text.

use std::cmp::Ordering;

use serde::Serialize;

use crate::table::FrequencyTable;

/// One row of a ranked result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// Lowercase token.
    pub word: String,
    /// Number of occurrences of `word` in the analyzed text.
    pub frequency: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Ranking comparator: frequency descending, then word ascending.
///
/// `String` ordering compares UTF-8 bytes, which is the same as comparing
/// code points, so non-Latin scripts sort after Latin ones by code point.
pub fn ranking_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}

/// Every entry of `table` in ranking order.
pub fn rank(table: FrequencyTable) -> Vec<RankedEntry> {
    let mut entries = table.into_ranked();
    entries.sort_unstable_by(ranking_order);
    entries
}

/// The first `n` entries of `table` in ranking order.
///
/// Returns everything when `n` covers the whole vocabulary and nothing when
/// `n` is 0. Only the selected prefix is sorted; because [`ranking_order`]
/// is total the result equals sorting everything and truncating.
pub fn top_n(table: FrequencyTable, n: usize) -> Vec<RankedEntry> {
    if n == 0 {
        return Vec::new();
    }

    let mut entries = table.into_ranked();
    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, ranking_order);
        entries.truncate(n);
    }
    entries.sort_unstable_by(ranking_order);
    entries
}
