//! Frequency tally over tokens.

use std::collections::HashMap;

use crate::rank::RankedEntry;
use crate::tokenize::tokenize;

/// Occurrence count per distinct token of one input text.
///
/// Built once per text and never mutated afterwards. Every stored count is
/// positive; words that never occurred are simply absent and read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Tally a sequence of tokens.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Tokenize `text` and tally the result.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Count for `word`, or 0 if it never occurred.
    ///
    /// The lookup is literal: `word` must already be in token form.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Largest count in the table, or 0 when the table is empty.
    pub fn max_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens tallied (sum of all counts).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Convert every entry into an unordered list of [`RankedEntry`].
    pub fn into_ranked(self) -> Vec<RankedEntry> {
        self.counts
            .into_iter()
            .map(|(word, frequency)| RankedEntry { word, frequency })
            .collect()
    }
}

/// Tally a sequence of tokens into a [`FrequencyTable`].
pub fn tally<I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    FrequencyTable::from_tokens(tokens)
}
