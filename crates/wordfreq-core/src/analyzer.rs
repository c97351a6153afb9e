//! The three frequency queries.
//!
//! Each query builds a fresh [`FrequencyTable`] from its input and discards it
//! afterwards. None of them can fail: empty text, blank words and texts
//! without any letters or digits all produce zero or an empty list.

use crate::rank::{RankedEntry, top_n};
use crate::table::{FrequencyTable, tally};
use crate::tokenize::tokenize;

/// Highest number of occurrences of any single word in `text`.
///
/// Several words may share the maximum; only the count is reported.
///
/// # Examples
///
/// ```
/// use wordfreq_core::highest_frequency;
///
/// assert_eq!(highest_frequency("The quick brown fox jumps over the lazy dog"), 2);
/// assert_eq!(highest_frequency(""), 0);
/// ```
pub fn highest_frequency(text: &str) -> usize {
    build_table(text).max_frequency()
}

/// Number of occurrences of `word` in `text`, ignoring case.
///
/// A blank `word` yields 0 without looking at `text`. The word is lowercased
/// but otherwise used as given: punctuation inside `word` is kept, so
/// `"fox!"` never matches anything.
///
/// # Examples
///
/// ```
/// use wordfreq_core::frequency_for_word;
///
/// assert_eq!(frequency_for_word("Word...word,word;word?word!", "WORD"), 5);
/// assert_eq!(frequency_for_word("fox fox", "fox!"), 0);
/// ```
pub fn frequency_for_word(text: &str, word: &str) -> usize {
    if word.trim().is_empty() {
        return 0;
    }

    build_table(text).get(&word.to_lowercase())
}

/// The `n` most frequent words of `text`.
///
/// Ordered by frequency descending, then word ascending. Asking for more
/// words than the text contains returns all of them; `n == 0` returns an
/// empty list.
///
/// # Examples
///
/// ```
/// use wordfreq_core::{RankedEntry, top_n_words};
///
/// let top = top_n_words("the fox and the hound and the cat and dog and another dog", 3);
/// assert_eq!(
///     top,
///     vec![
///         RankedEntry::new("and", 4),
///         RankedEntry::new("the", 3),
///         RankedEntry::new("dog", 2),
///     ]
/// );
/// ```
pub fn top_n_words(text: &str, n: usize) -> Vec<RankedEntry> {
    top_n(build_table(text), n)
}

fn build_table(text: &str) -> FrequencyTable {
    tally(tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank;

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";
    const TWO_FOXES: &str = "the quick brown fox jumps over the lazy fox";

    fn pairs(entries: &[RankedEntry]) -> Vec<(&str, usize)> {
        entries
            .iter()
            .map(|e| (e.word.as_str(), e.frequency))
            .collect()
    }

    #[test]
    fn highest_frequency_counts_case_insensitively() {
        assert_eq!(highest_frequency(PANGRAM), 2);
    }

    #[test]
    fn highest_frequency_with_repeated_words() {
        assert_eq!(highest_frequency(TWO_FOXES), 2);
    }

    #[test]
    fn highest_frequency_of_empty_input_is_zero() {
        for text in ["", "  ", "\n\t", "?!... --"] {
            assert_eq!(highest_frequency(text), 0, "text = {text:?}");
        }
    }

    #[test]
    fn highest_frequency_of_absent_text_is_zero() {
        let absent: Option<&str> = None;
        assert_eq!(highest_frequency(absent.unwrap_or_default()), 0);
    }

    #[test]
    fn frequency_for_existing_word() {
        assert_eq!(frequency_for_word(PANGRAM, "fox"), 1);
        assert_eq!(frequency_for_word(TWO_FOXES, "fox"), 2);
    }

    #[test]
    fn frequency_for_missing_word_is_zero() {
        assert_eq!(frequency_for_word(TWO_FOXES, "cat"), 0);
    }

    #[test]
    fn frequency_for_blank_word_is_zero() {
        for word in ["", "  ", "\t"] {
            assert_eq!(frequency_for_word(TWO_FOXES, word), 0, "word = {word:?}");
        }
    }

    #[test]
    fn frequency_for_word_lowercases_the_word() {
        assert_eq!(frequency_for_word(PANGRAM, "THE"), 2);
    }

    #[test]
    fn frequency_for_word_ignores_punctuation_in_text() {
        let cases = [
            ("Hello, hello! Hello.", "hello", 3),
            ("The quick-brown fox; the quick fox!", "quick", 2),
            ("Word...word,word;word?word!", "word", 5),
        ];
        for (text, word, expected) in cases {
            assert_eq!(frequency_for_word(text, word), expected, "{text:?} / {word:?}");
        }
    }

    #[test]
    fn frequency_for_word_keeps_punctuation_in_word() {
        assert_eq!(frequency_for_word("Hello, hello! Hello.", "hello!"), 0);
        assert_eq!(frequency_for_word("quick-brown quick brown", "quick-brown"), 0);
        assert_eq!(frequency_for_word("the fox", " fox"), 0);
    }

    #[test]
    fn top_n_words_sorts_by_frequency_then_alphabetically() {
        let text = "the fox and the hound and the cat and dog and another dog";
        assert_eq!(
            pairs(&top_n_words(text, 3)),
            vec![("and", 4), ("the", 3), ("dog", 2)]
        );
    }

    #[test]
    fn top_n_words_with_n_larger_than_vocabulary() {
        assert_eq!(
            pairs(&top_n_words("the fox jumps into the whole", 9)),
            vec![("the", 2), ("fox", 1), ("into", 1), ("jumps", 1), ("whole", 1)]
        );
    }

    #[test]
    fn top_n_words_case_insensitive() {
        assert_eq!(pairs(&top_n_words("The THE the tHe THe", 1)), vec![("the", 5)]);
    }

    #[test]
    fn top_n_words_zero_and_empty() {
        assert!(top_n_words(PANGRAM, 0).is_empty());
        assert!(top_n_words("", 5).is_empty());
    }

    #[test]
    fn top_n_words_with_non_english_text() {
        let text = "Der schnelle braune Fuchs springt über den faulen Hund.\n\
                    Der Fuchs ist schnell und der Hund ist faul.\n\
                    青い空と白い雲が美しいです。空は とても 青く て 雲は とても 白い です。\n\
                    안녕하세요 세상아 안녕하세요 여러분 안녕하세요.";
        assert_eq!(
            pairs(&top_n_words(text, 3)),
            vec![("der", 3), ("안녕하세요", 3), ("fuchs", 2)]
        );
    }

    #[test]
    fn top_n_words_with_heavy_punctuation() {
        let text = "Hello!!! How are you???\n\
                    I'm doing... well... thank you!!!\n\
                    This is a (test) of [punctuation] and {special} characters!!!\n\
                    Let's see--how well--it handles... multiple... types... of... punctuation!!!\n\
                    Well!!! Well... Well??? How... about... that!!!";
        assert_eq!(
            pairs(&top_n_words(text, 3)),
            vec![("well", 5), ("how", 3), ("of", 2)]
        );
    }

    #[test]
    fn queries_agree_with_each_other() {
        let texts = [
            PANGRAM,
            TWO_FOXES,
            "",
            "Hello!!! How are you??? I'm doing... well... thank you!!!",
            "Der Fuchs ist schnell und der Hund ist faul. 안녕하세요 안녕하세요",
        ];

        for text in texts {
            let table = build_table(text);
            let all = top_n_words(text, usize::MAX);

            // highest frequency is the head of the full ranking
            let head = all.first().map(|e| e.frequency).unwrap_or(0);
            assert_eq!(highest_frequency(text), head);

            // the full ranking covers every token exactly once
            let sum: usize = all.iter().map(|e| e.frequency).sum();
            assert_eq!(sum, tokenize(text).len());
            assert_eq!(all.len(), table.len());

            for entry in &all {
                assert_eq!(frequency_for_word(text, &entry.word), entry.frequency);
            }

            assert_eq!(all, rank(table));
        }
    }
}
