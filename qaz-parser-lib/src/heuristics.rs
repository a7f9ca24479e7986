// Non-morphological strategies: trailing hyphens, short words, and the
// last-resort binary split.

use std::collections::HashSet;

use crate::text::{char_len, looks_like_root, split_at_char};
use crate::types::{Analysis, Strategy};

pub const HYPHEN_NOTE: &str = "word with trailing hyphen, base form preserved";
pub const SHORT_WORD_NOTE: &str = "identified as short word/postposition";
pub const SINGLE_CHAR_NOTE: &str = "single character word";
pub const TWO_CHAR_NOTE: &str = "two character word";
pub const AGGRESSIVE_NOTE: &str = "aggressive analysis - split word into parts";

// Longest word the short-word classifier will look at.
const SHORT_WORD_MAX_LEN: usize = 3;

// Curated short words and postpositions. A few longer forms are listed too;
// they are only reachable once the length limit is raised.
const SHORT_WORDS: &[&str] = &[
    "ma", "da", "dä", "gä", "on", "bn", "ham", "petr", "jep", "jay", "tili", "uruw", "yenä",
    "mudan", "bergi", "nïŋ", "munïŋ", "men", "qay", "siz", "gän", "ŋïz", "yüz", "bul", "söz",
    "biz", "dal", "yïl", "yaz",
];

// ---------------------------------------------------------------------------
// Trailing hyphen
// ---------------------------------------------------------------------------

/// Words cut at a line end keep a trailing hyphen; their base is kept whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenHandler;

impl HyphenHandler {
    /// True when the word ends in a hyphen and must not reach other strategies.
    pub fn applies(word: &str) -> bool {
        word.ends_with('-')
    }

    /// `None` when there is no trailing hyphen or nothing precedes it.
    pub fn handle(&self, word: &str) -> Option<Analysis> {
        let base = word.strip_suffix('-')?;
        if base.is_empty() {
            return None;
        }
        Some(Analysis::whole(base, Strategy::TrailingHyphen, HYPHEN_NOTE))
    }
}

// ---------------------------------------------------------------------------
// Short words
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ShortWordClassifier {
    known: HashSet<&'static str>,
}

impl ShortWordClassifier {
    pub fn new() -> Self {
        Self {
            known: SHORT_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    /// Classify words of up to three characters. Three-letter words outside
    /// the curated list are left to later strategies.
    pub fn classify(&self, word: &str) -> Option<Analysis> {
        let len = char_len(word);
        if len == 0 || len > SHORT_WORD_MAX_LEN {
            return None;
        }
        let note = if self.is_known(word) {
            SHORT_WORD_NOTE
        } else {
            match len {
                1 => SINGLE_CHAR_NOTE,
                2 => TWO_CHAR_NOTE,
                _ => return None,
            }
        };
        Some(Analysis::whole(word, Strategy::ShortWord, note))
    }
}

impl Default for ShortWordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Aggressive split
// ---------------------------------------------------------------------------

/// Splits a word into two halves at the first point where either half could
/// be a root. The resulting "root" is the marker `left-right`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveSplitter;

impl AggressiveSplitter {
    pub fn split(&self, word: &str) -> Option<Analysis> {
        let len = char_len(word);
        if len <= 3 {
            return None;
        }
        for i in 2..=len - 2 {
            let (left, right) = split_at_char(word, i);
            if looks_like_root(left) || looks_like_root(right) {
                return Some(Analysis {
                    word: word.to_string(),
                    root: format!("{left}-{right}"),
                    affixes: vec![],
                    segmentation: vec![left.to_string(), right.to_string()],
                    notes: vec![AGGRESSIVE_NOTE.to_string()],
                    strategy: Strategy::AggressiveSplit,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_base_form() {
        let a = HyphenHandler.handle("bar-").expect("should handle");
        assert_eq!(a.root, "bar");
        assert_eq!(a.segmentation, vec!["bar"]);
        assert!(a.affixes.is_empty());
        assert_eq!(a.strategy, Strategy::TrailingHyphen);
    }

    #[test]
    fn test_hyphen_only_one_stripped() {
        let a = HyphenHandler.handle("ol--").expect("should handle");
        assert_eq!(a.root, "ol-");
    }

    #[test]
    fn test_hyphen_not_applicable() {
        assert!(HyphenHandler.handle("bar").is_none());
        assert!(HyphenHandler.handle("-").is_none());
        assert!(HyphenHandler::applies("-"));
    }

    #[test]
    fn test_short_word_known() {
        let c = ShortWordClassifier::new();
        let a = c.classify("nïŋ").expect("known short word");
        assert_eq!(a.root, "nïŋ");
        assert_eq!(a.notes, vec![SHORT_WORD_NOTE]);
    }

    #[test]
    fn test_short_word_length_defaults() {
        let c = ShortWordClassifier::new();
        assert_eq!(c.classify("u").map(|a| a.notes), Some(vec![SINGLE_CHAR_NOTE.to_string()]));
        assert_eq!(c.classify("ŋč").map(|a| a.notes), Some(vec![TWO_CHAR_NOTE.to_string()]));
        assert!(c.classify("bcd").is_none());
        assert!(c.classify("kitab").is_none());
        assert!(c.classify("").is_none());
    }

    #[test]
    fn test_long_curated_words_need_other_strategies() {
        let c = ShortWordClassifier::new();
        assert!(c.is_known("bergi"));
        assert!(c.classify("bergi").is_none());
    }

    #[test]
    fn test_aggressive_split_first_point() {
        let a = AggressiveSplitter.split("bcdaf").expect("should split");
        // i = 2: "bc" has no vowel, "daf" does.
        assert_eq!(a.segmentation, vec!["bc", "daf"]);
        assert_eq!(a.root, "bc-daf");
    }

    #[test]
    fn test_aggressive_split_requires_vowel() {
        assert!(AggressiveSplitter.split("xyzzy").is_none());
        assert!(AggressiveSplitter.split("abc").is_none());
    }

    #[test]
    fn test_aggressive_split_multibyte() {
        let a = AggressiveSplitter.split("ŋčšü").expect("should split");
        assert_eq!(a.segmentation, vec!["ŋč", "šü"]);
    }
}
