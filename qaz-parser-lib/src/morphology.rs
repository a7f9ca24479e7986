// Strategy cascade for a single word.
//
// Strategies are tried in a fixed order and the first success wins:
//   1. Trailing hyphen (short-circuits everything else)
//   2. Morphological analysis: chain patterns, then single-suffix stripping
//   3. Short words and postpositions
//   4. Aggressive binary split
//   5. Loanword signature
//   6. Unrecognized (always succeeds)

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::affixes::AffixTable;
use crate::heuristics::{AggressiveSplitter, HyphenHandler, ShortWordClassifier};
use crate::loanword::LoanwordDetector;
use crate::patterns::PatternMatcher;
use crate::stripper::SuffixStripper;
use crate::text::normalize;
use crate::types::*;

pub const UNRECOGNIZED_NOTE: &str = "UNRECOGNIZED - needs additional analysis";

/// Runs the cascade. Holds only read-only state, so one analyzer can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Analyzer<'t> {
    stripper: SuffixStripper<'t>,
    patterns: PatternMatcher,
    short_words: ShortWordClassifier,
    splitter: AggressiveSplitter,
    hyphen: HyphenHandler,
    loanwords: LoanwordDetector,
}

impl<'t> Analyzer<'t> {
    pub fn new(table: &'t AffixTable) -> Self {
        Self::with_patterns(table, PatternMatcher::new())
    }

    pub fn with_patterns(table: &'t AffixTable, patterns: PatternMatcher) -> Self {
        Self {
            stripper: SuffixStripper::new(table),
            patterns,
            short_words: ShortWordClassifier::new(),
            splitter: AggressiveSplitter,
            hyphen: HyphenHandler,
            loanwords: LoanwordDetector::new(),
        }
    }

    /// Analyse one word. Never fails: the worst outcome is `Unrecognized`.
    pub fn analyze(&self, word: &str) -> AnalysisResult {
        let normalized = normalize(word.trim());

        if normalized.is_empty() {
            warn!(word, "empty word");
            return unrecognized(word);
        }

        if HyphenHandler::applies(&normalized) {
            return match self.hyphen.handle(&normalized) {
                Some(analysis) => recognized(word, analysis),
                None => unrecognized(word),
            };
        }

        let found = self
            .morphological(&normalized)
            .or_else(|| self.short_words.classify(&normalized))
            .or_else(|| self.splitter.split(&normalized))
            .or_else(|| self.loanword(&normalized));

        match found {
            Some(analysis) => recognized(word, analysis),
            None => unrecognized(word),
        }
    }

    /// Analyse each record, keeping input order. With `parallel` the words
    /// are spread over the rayon pool.
    pub fn analyze_records(&self, records: &[WordRecord], parallel: bool) -> Vec<AnalyzedRecord> {
        let pair = |record: &WordRecord| AnalyzedRecord {
            record: record.clone(),
            result: self.analyze(&record.word),
        };
        if parallel {
            records.par_iter().map(pair).collect()
        } else {
            records.iter().map(pair).collect()
        }
    }

    fn morphological(&self, word: &str) -> Option<Analysis> {
        self.patterns
            .find(word)
            .or_else(|| self.stripper.strip(word))
    }

    fn loanword(&self, word: &str) -> Option<Analysis> {
        let family = self.loanwords.detect(word)?;
        Some(Analysis::whole(
            word,
            Strategy::Loanword(family),
            format!("{family} loanword"),
        ))
    }
}

/// Analyse a single word with a fresh analyzer over `table`.
pub fn analyze_word(word: &str, table: &AffixTable) -> AnalysisResult {
    Analyzer::new(table).analyze(word)
}

fn recognized(word: &str, mut analysis: Analysis) -> AnalysisResult {
    debug!(word, strategy = %analysis.strategy, root = %analysis.root, "analysed");
    analysis.word = word.to_string();
    AnalysisResult::Recognized(analysis)
}

fn unrecognized(word: &str) -> AnalysisResult {
    debug!(word, "unrecognized");
    AnalysisResult::Unrecognized {
        word: word.to_string(),
        notes: vec![UNRECOGNIZED_NOTE.to_string()],
    }
}

// ---------------------------------------------------------------------------
// Batch summary
// ---------------------------------------------------------------------------

/// Counts over a batch of analysed records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub recognized: usize,
    pub unrecognized: usize,
    /// Words per terminal strategy, keyed by its display name.
    pub by_strategy: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn from_records(records: &[AnalyzedRecord]) -> Self {
        let mut summary = Self::default();
        for r in records {
            summary.total += 1;
            if r.result.is_unrecognized() {
                summary.unrecognized += 1;
            } else {
                summary.recognized += 1;
            }
            *summary
                .by_strategy
                .entry(r.result.strategy().to_string())
                .or_insert(0) += 1;
        }
        summary
    }

    pub fn recognized_percent(&self) -> f64 {
        percent(self.recognized, self.total)
    }

    pub fn unrecognized_percent(&self) -> f64 {
        percent(self.unrecognized, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
