// Plausibility scoring for single-affix segmentations.

use crate::text::{char_len, has_vowel};
use crate::types::AffixEntry;

// Scoring weights.
const ROOT_MIN_LEN: f64 = 1.0;
const ROOT_COMFORTABLE_LEN: f64 = 0.5;
const ROOT_HAS_VOWEL: f64 = 1.0;
const MULTI_CHAR_AFFIX: f64 = 0.5;
// Categories that are frequent enough in the corpus to deserve a nudge.
const PREFERRED_CATEGORY: f64 = 0.3;
const PREFERRED_CATEGORIES: &[&str] = &["LOC", "GEN", "ACC", "3POSS", "1SG", "1PL"];

/// Score `root` + `affix` as a decomposition. Higher is more plausible.
pub fn score(root: &str, affix: &AffixEntry) -> f64 {
    let mut s = 0.0;

    let root_len = char_len(root);
    if root_len >= 2 {
        s += ROOT_MIN_LEN;
    }
    if root_len >= 3 {
        s += ROOT_COMFORTABLE_LEN;
    }

    if has_vowel(root) {
        s += ROOT_HAS_VOWEL;
    }

    if affix.len() >= 2 {
        s += MULTI_CHAR_AFFIX;
    }

    if PREFERRED_CATEGORIES.contains(&affix.category.as_str()) {
        s += PREFERRED_CATEGORY;
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_full_score() {
        // 2 + 0.5 + 1 + 0.5 + 0.3
        let s = score("kitab", &AffixEntry::new("da", "LOC"));
        assert!(approx(s, 3.3), "got {s}");
    }

    #[test]
    fn test_vowelless_root() {
        let s = score("xyz", &AffixEntry::new("da", "LOC"));
        assert!(approx(s, 2.3), "got {s}");
    }

    #[test]
    fn test_short_root_single_char_affix() {
        let s = score("ba", &AffixEntry::new("r", "AOR"));
        assert!(approx(s, 2.0), "got {s}");
    }

    #[test]
    fn test_lengths_count_characters() {
        // Two characters, four bytes.
        let s = score("ïŋ", &AffixEntry::new("ïz", "2SG.POL"));
        assert!(approx(s, 1.0 + 1.0 + 0.5), "got {s}");
    }
}
