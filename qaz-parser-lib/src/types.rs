use std::fmt;

use serde::{Deserialize, Serialize};

/// A single affix surface tagged with its grammatical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixEntry {
    /// Normalized surface text (lowercase, NFC, optional segments removed).
    pub surface: String,
    /// Category label, e.g. "LOC", "3POSS", "POSS.2SG.POL".
    pub category: String,
}

impl AffixEntry {
    pub fn new(surface: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            category: category.into(),
        }
    }

    /// Length of the surface in characters.
    pub fn len(&self) -> usize {
        self.surface.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }
}

impl fmt::Display for AffixEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.surface, self.category)
    }
}

/// A known multi-morpheme tail, innermost affix first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixChain {
    pub affixes: Vec<AffixEntry>,
}

impl SuffixChain {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            affixes: pairs
                .iter()
                .map(|(surface, category)| AffixEntry::new(*surface, *category))
                .collect(),
        }
    }

    /// Concatenated surface of the affixes in `range`, in order.
    pub fn tail(&self, range: std::ops::Range<usize>) -> String {
        self.affixes[range]
            .iter()
            .map(|a| a.surface.as_str())
            .collect()
    }
}

/// Orthographic family a loanword was attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanwordFamily {
    PersianArabic,
    Russian,
    Arabic,
    TurkicSpecial,
}

impl LoanwordFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            LoanwordFamily::PersianArabic => "persian_arabic",
            LoanwordFamily::Russian => "russian",
            LoanwordFamily::Arabic => "arabic",
            LoanwordFamily::TurkicSpecial => "turkic_special",
        }
    }
}

impl fmt::Display for LoanwordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of the analysis cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    TrailingHyphen,
    PatternMatch,
    SuffixStrip,
    ShortWord,
    AggressiveSplit,
    Loanword(LoanwordFamily),
    Unrecognized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::TrailingHyphen => f.write_str("trailing hyphen"),
            Strategy::PatternMatch => f.write_str("pattern match"),
            Strategy::SuffixStrip => f.write_str("suffix strip"),
            Strategy::ShortWord => f.write_str("short word"),
            Strategy::AggressiveSplit => f.write_str("aggressive split"),
            Strategy::Loanword(family) => write!(f, "{family} loanword"),
            Strategy::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// A successful decomposition of one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The word as it was supplied.
    pub word: String,
    /// Residual stem. For aggressive splits this is the hyphen-joined marker
    /// `left-right`, not a morphological root.
    pub root: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affixes: Vec<AffixEntry>,
    pub segmentation: Vec<String>,
    pub notes: Vec<String>,
    pub strategy: Strategy,
}

impl Analysis {
    /// A result whose only piece is the root itself.
    pub(crate) fn whole(root: &str, strategy: Strategy, note: impl Into<String>) -> Self {
        Self {
            word: root.to_string(),
            root: root.to_string(),
            affixes: vec![],
            segmentation: vec![root.to_string()],
            notes: vec![note.into()],
            strategy,
        }
    }

    /// Root followed by each affix surface.
    pub(crate) fn segmented(
        root: &str,
        affixes: Vec<AffixEntry>,
        strategy: Strategy,
        note: impl Into<String>,
    ) -> Self {
        let mut segmentation = Vec::with_capacity(affixes.len() + 1);
        segmentation.push(root.to_string());
        segmentation.extend(affixes.iter().map(|a| a.surface.clone()));
        Self {
            word: root.to_string(),
            root: root.to_string(),
            affixes,
            segmentation,
            notes: vec![note.into()],
            strategy,
        }
    }
}

/// Outcome of analysing one word. Every word gets exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResult {
    Recognized(Analysis),
    Unrecognized { word: String, notes: Vec<String> },
}

impl AnalysisResult {
    pub fn word(&self) -> &str {
        match self {
            AnalysisResult::Recognized(a) => &a.word,
            AnalysisResult::Unrecognized { word, .. } => word,
        }
    }

    /// Empty for unrecognized words.
    pub fn root(&self) -> &str {
        match self {
            AnalysisResult::Recognized(a) => &a.root,
            AnalysisResult::Unrecognized { .. } => "",
        }
    }

    pub fn affixes(&self) -> &[AffixEntry] {
        match self {
            AnalysisResult::Recognized(a) => &a.affixes,
            AnalysisResult::Unrecognized { .. } => &[],
        }
    }

    pub fn segmentation(&self) -> &[String] {
        match self {
            AnalysisResult::Recognized(a) => &a.segmentation,
            AnalysisResult::Unrecognized { .. } => &[],
        }
    }

    pub fn notes(&self) -> &[String] {
        match self {
            AnalysisResult::Recognized(a) => &a.notes,
            AnalysisResult::Unrecognized { notes, .. } => notes,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            AnalysisResult::Recognized(a) => a.strategy,
            AnalysisResult::Unrecognized { .. } => Strategy::Unrecognized,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, AnalysisResult::Unrecognized { .. })
    }
}

/// One row of a word list: the word plus its corpus bookkeeping, carried
/// through analysis verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub occurrences: String,
    pub lines: String,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            occurrences: "1".to_string(),
            lines: "[1]".to_string(),
        }
    }
}

/// A word record together with its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    pub record: WordRecord,
    pub result: AnalysisResult,
}
