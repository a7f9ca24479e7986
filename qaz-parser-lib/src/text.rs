// Character-level helpers shared by every strategy.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Vowels of the transcription alphabet, including long and fronted vowels.
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'ä', 'ë', 'ï', 'ö', 'ü', 'ā', 'ē', 'ī', 'ō', 'ū',
];

// Punctuation removed when building word lists from transcriptions.
const PUNCTUATION: &[char] = &['\u{201C}', '\u{201D}', '.', ',', ':'];

// `[...]` marks a deletable sub-segment in affix notation.
static OPTIONAL_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("optional segment pattern is valid"));

/// Lowercase and compose to NFC so that surfaces compare char-for-char.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().nfc().collect()
}

/// Number of characters (not bytes).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| VOWELS.contains(&c))
}

/// A candidate could be a root if it has at least two characters and a vowel.
pub fn looks_like_root(candidate: &str) -> bool {
    char_len(candidate) >= 2 && has_vowel(candidate)
}

/// Delete every bracketed optional segment together with its content.
/// `da[y]n` becomes `dan`; `[di]` becomes the empty string.
pub fn strip_optional_segments(affix: &str) -> String {
    OPTIONAL_SEGMENT.replace_all(affix, "").into_owned()
}

/// Remove curly quotes, periods, commas and colons. Never fails.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Split `s` after its first `n` characters.
pub fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_composes() {
        // "I" + combining diaeresis composes to a single "ï".
        assert_eq!(normalize("KITABI\u{0308}M"), "kitabïm");
        assert_eq!(char_len(&normalize("i\u{0308}")), 1);
    }

    #[test]
    fn test_vowel_checks() {
        assert!(has_vowel("bïr"));
        assert!(has_vowel("ū"));
        assert!(!has_vowel("xyzzy"));
        assert!(looks_like_root("ba"));
        assert!(!looks_like_root("a"));
        assert!(!looks_like_root("ŋč"));
    }

    #[test]
    fn test_strip_optional_segments() {
        assert_eq!(strip_optional_segments("da[y]n"), "dan");
        assert_eq!(strip_optional_segments("[n]iŋ"), "iŋ");
        assert_eq!(strip_optional_segments("n[ï]"), "n");
        assert_eq!(strip_optional_segments("[di]"), "");
        assert_eq!(strip_optional_segments("lar"), "lar");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("\u{201C}bar.\u{201D}"), "bar");
        assert_eq!(strip_punctuation("kim,:"), "kim");
        assert_eq!(strip_punctuation("..."), "");
        assert_eq!(strip_punctuation("tur-"), "tur-");
    }

    #[test]
    fn test_split_at_char_multibyte() {
        assert_eq!(split_at_char("ïŋïz", 2), ("ïŋ", "ïz"));
        assert_eq!(split_at_char("ab", 5), ("ab", ""));
    }
}
