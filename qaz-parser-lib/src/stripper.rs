// Greedy single-affix stripping, used when no known chain fits.

use crate::affixes::AffixTable;
use crate::confidence;
use crate::text::char_len;
use crate::types::{Analysis, Strategy};

pub const STRIP_NOTE: &str = "individual suffix analysis";

/// Picks the single highest-scoring affix that ends the word.
#[derive(Debug, Clone, Copy)]
pub struct SuffixStripper<'t> {
    table: &'t AffixTable,
}

impl<'t> SuffixStripper<'t> {
    pub fn new(table: &'t AffixTable) -> Self {
        Self { table }
    }

    /// Scan the whole table and keep the best candidate. A candidate only
    /// replaces the current best on a strictly higher score, so on ties the
    /// longer (earlier) affix wins. `word` must already be normalized.
    pub fn strip(&self, word: &str) -> Option<Analysis> {
        let word_len = char_len(word);
        let mut best: Option<(f64, Analysis)> = None;

        for affix in self.table.candidates(word) {
            // Root must keep at least two characters.
            if word_len <= affix.len() + 1 {
                continue;
            }
            let root = &word[..word.len() - affix.surface.len()];
            let s = confidence::score(root, affix);

            if best.as_ref().map_or(true, |(best_score, _)| s > *best_score) {
                best = Some((
                    s,
                    Analysis::segmented(
                        root,
                        vec![affix.clone()],
                        Strategy::SuffixStrip,
                        STRIP_NOTE,
                    ),
                ));
            }
        }

        best.map(|(_, analysis)| analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_higher_score() {
        let table = AffixTable::from_definitions(&[("PF", &["a"]), ("LOC", &["da"])]);
        let a = SuffixStripper::new(&table).strip("xyzda").expect("should strip");
        assert_eq!(a.root, "xyz");
        assert_eq!(a.affixes[0].surface, "da");
        assert_eq!(a.affixes[0].category, "LOC");
        assert_eq!(a.segmentation, vec!["xyz", "da"]);
        assert_eq!(a.notes, vec![STRIP_NOTE]);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // Same length, same score: definition order decides.
        let table = AffixTable::from_definitions(&[("X", &["ar"]), ("Y", &["ar"])]);
        let a = SuffixStripper::new(&table).strip("baqar").expect("should strip");
        assert_eq!(a.affixes[0].category, "X");
    }

    #[test]
    fn test_multi_char_affix_outscores_single() {
        // {ar} leaves "kitab" (3.0); {r} leaves "kitaba" (2.5).
        let table = AffixTable::from_definitions(&[("B", &["r"]), ("A", &["ar"])]);
        let a = SuffixStripper::new(&table).strip("kitabar").expect("should strip");
        assert_eq!(a.affixes[0].surface, "ar");
    }

    #[test]
    fn test_root_keeps_two_characters() {
        let table = AffixTable::from_definitions(&[("LOC", &["da"])]);
        let stripper = SuffixStripper::new(&table);
        assert!(stripper.strip("ada").is_none());
        assert!(stripper.strip("da").is_none());
        let a = stripper.strip("bada").expect("two-character root is allowed");
        assert_eq!(a.root, "ba");
    }

    #[test]
    fn test_no_candidate() {
        let table = AffixTable::from_definitions(&[("LOC", &["da"])]);
        assert!(SuffixStripper::new(&table).strip("kitab").is_none());
    }

    #[test]
    fn test_multibyte_root() {
        let table = AffixTable::new();
        let a = SuffixStripper::new(&table).strip("söziŋ").expect("should strip");
        assert_eq!(a.root, "söz");
        assert_eq!(a.affixes[0].surface, "iŋ");
    }
}
