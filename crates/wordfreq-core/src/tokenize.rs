//! Text tokenization.
//!
//! A token is a maximal run of Unicode letter (`L*`) or number (`N*`) code
//! points. Everything else (whitespace, punctuation, symbols, apostrophes,
//! hyphens, combining marks) separates tokens and is discarded.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of letters and numbers by Unicode general category.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is a valid regex"));

/// Split text into lowercase tokens, left to right.
///
/// Lowercasing uses the locale-independent Unicode mapping and is applied to
/// the whole text before scanning. If a lowercase expansion yields a code point
/// outside the letter/number categories, it acts as a separator, so every
/// token stays made of letters and digits only.
///
/// # Examples
///
/// ```
/// use wordfreq_core::tokenize::tokenize;
///
/// assert_eq!(tokenize("Don't stop--BELIEVING!"), vec!["don", "t", "stop", "believing"]);
/// assert!(tokenize("  ...  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_lowercases() {
        assert_eq!(
            tokenize("The quick Brown fox"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        assert!(tokenize("...!?;,--()[]{}").is_empty());
    }

    #[test]
    fn punctuation_separates_without_joining() {
        assert_eq!(
            tokenize("Word...word,word;word?word!"),
            vec!["word", "word", "word", "word", "word"]
        );
    }

    #[test]
    fn apostrophes_and_hyphens_are_separators() {
        assert_eq!(tokenize("I'm"), vec!["i", "m"]);
        assert_eq!(tokenize("didn\u{2019}t"), vec!["didn", "t"]);
        assert_eq!(tokenize("quick-brown"), vec!["quick", "brown"]);
        assert_eq!(tokenize("see--how"), vec!["see", "how"]);
    }

    #[test]
    fn digits_are_part_of_tokens() {
        assert_eq!(tokenize("route66 to 2026"), vec!["route66", "to", "2026"]);
    }

    #[test]
    fn non_ascii_numbers_are_part_of_tokens() {
        // Arabic-Indic digits (Nd) and a vulgar fraction (No)
        assert_eq!(tokenize("\u{0661}\u{0662} \u{00BD}"), vec!["\u{0661}\u{0662}", "\u{00BD}"]);
    }

    #[test]
    fn non_latin_scripts() {
        assert_eq!(tokenize("Über den Hund"), vec!["über", "den", "hund"]);
        assert_eq!(
            tokenize("안녕하세요 세상아 안녕하세요."),
            vec!["안녕하세요", "세상아", "안녕하세요"]
        );
        // CJK ideographs and kana are letters; the ideographic full stop is not
        assert_eq!(
            tokenize("青い空と白い雲が美しいです。空は"),
            vec!["青い空と白い雲が美しいです", "空は"]
        );
    }

    #[test]
    fn symbols_and_emoji_are_separators() {
        assert_eq!(tokenize("cats&dogs €5 🙂ok"), vec!["cats", "dogs", "5", "ok"]);
    }

    #[test]
    fn combining_marks_split_tokens() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT (Mn)
        assert_eq!(tokenize("cafe\u{0301}s"), vec!["cafe", "s"]);
    }

    #[test]
    fn casing_is_locale_independent() {
        assert_eq!(tokenize("TITLE"), vec!["title"]);
        // Dotted capital I lowers to "i" + U+0307, which is not a letter
        assert_eq!(tokenize("\u{0130}stanbul"), vec!["i", "stanbul"]);
    }

    #[test]
    fn tokens_contain_only_lowercase_letters_and_digits() {
        let text = "Ünïcödé ΣΟΦΙΑ, 3rd-Party_lib; ǅemal?";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert_eq!(token, token.to_lowercase());
            assert!(token.chars().all(char::is_alphanumeric), "bad token {token:?}");
        }
    }
}
