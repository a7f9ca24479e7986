// Orthographic loanword signatures. Consulted only after every morphological
// strategy has failed.

use regex::Regex;

use crate::types::LoanwordFamily;

// Families are tried in this order; the first with any matching class wins.
const SIGNATURES: &[(LoanwordFamily, &[&str])] = &[
    (
        LoanwordFamily::PersianArabic,
        &["[āēīōū]", "[ṣṭḥġ]", "[ī]", "[ā]", "[ē]", "[ō]"],
    ),
    (
        LoanwordFamily::Russian,
        &["[č]", "[š]", "[ž]", "[ẕ]", "[ẓ]", "[ż]"],
    ),
    (
        LoanwordFamily::Arabic,
        &["[ḥ]", "[ṣ]", "[ṭ]", "[ġ]", "[ḫ]", "[ṗ]", "[ɫ]", "[ụ]"],
    ),
    (
        LoanwordFamily::TurkicSpecial,
        &["[ï]", "[ö]", "[ü]", "[ä]", "[ë]", "[ŋ]"],
    ),
];

#[derive(Debug, Clone)]
pub struct LoanwordDetector {
    families: Vec<(LoanwordFamily, Vec<Regex>)>,
}

impl LoanwordDetector {
    pub fn new() -> Self {
        let families = SIGNATURES
            .iter()
            .map(|(family, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("loanword signature is a valid character class"))
                    .collect();
                (*family, compiled)
            })
            .collect();
        Self { families }
    }

    /// First family with a signature character anywhere in `word`.
    pub fn detect(&self, word: &str) -> Option<LoanwordFamily> {
        self.families
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(word)))
            .map(|(family, _)| *family)
    }
}

impl Default for LoanwordDetector {
    fn default() -> Self {
        Self::new()
    }
}
