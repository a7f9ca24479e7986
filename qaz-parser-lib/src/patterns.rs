// Known multi-affix tails, matched against the end of a word.
//
// Each chain is matched on its own: a candidate tail is a contiguous run of
// two or more affixes taken from a single chain. Runs never straddle two
// chains, so combinations such as ADJ + 3POSS that only arise from adjacent
// list entries are not produced.

use crate::text::{char_len, normalize};
use crate::types::{Analysis, AffixEntry, Strategy, SuffixChain};

pub const PATTERN_NOTE: &str = "Turkic morpheme pattern matching";

// Smallest root a chain may leave behind.
const MIN_ROOT_LEN: usize = 2;
// Fewest affixes in a candidate tail.
const MIN_RUN: usize = 2;

// ---------------------------------------------------------------------------
// Chain library (innermost affix first)
// ---------------------------------------------------------------------------

const SUFFIX_CHAINS: &[&[(&str, &str)]] = &[
    // -sin-de-gi
    &[("sin", "3POSS"), ("de", "LOC"), ("gi", "ADJ")],
    &[("sin", "3POSS"), ("de", "LOC")],
    &[("ïm", "1SG"), ("da", "LOC")],
    &[("mïz", "1PL"), ("da", "LOC")],
    &[("ïŋïz", "2SG.POL"), ("da", "LOC")],
    &[("niŋ", "GEN"), ("ïm", "1SG")],
    &[("ip", "CV"), ("da", "LOC")],
    &[("ġan", "PTCP"), ("da", "LOC")],
    // Verb + person.
    &[("a", "CV"), ("mïz", "1PL")],
    &[("a", "CV"), ("ïm", "1SG")],
    &[("a", "CV"), ("ïŋïz", "2SG.POL")],
    // Noun + possessive + case.
    &[("ïm", "1SG"), ("niŋ", "GEN")],
    &[("ïm", "1SG"), ("nï", "ACC")],
];

/// Matches words against the curated chain library.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    chains: Vec<SuffixChain>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::with_chains(SUFFIX_CHAINS.iter().map(|c| SuffixChain::new(c)).collect())
    }

    /// Normalize caller-supplied chains. Affixes whose surface normalizes to
    /// nothing are dropped, and so are chains left too short to form a run.
    pub fn with_chains(chains: Vec<SuffixChain>) -> Self {
        let chains = chains
            .into_iter()
            .map(|chain| SuffixChain {
                affixes: chain
                    .affixes
                    .into_iter()
                    .map(|a| AffixEntry::new(normalize(&a.surface), a.category))
                    .filter(|a| !a.is_empty())
                    .collect(),
            })
            .filter(|chain| chain.affixes.len() >= MIN_RUN)
            .collect();
        Self { chains }
    }

    pub fn chains(&self) -> &[SuffixChain] {
        &self.chains
    }

    /// Find the first chain run that ends `word` and leaves a usable root.
    /// `word` must already be normalized.
    pub fn find(&self, word: &str) -> Option<Analysis> {
        for chain in &self.chains {
            let n = chain.affixes.len();
            for i in 0..n {
                for j in (i + MIN_RUN)..=n {
                    let tail = chain.tail(i..j);
                    let Some(root) = word.strip_suffix(tail.as_str()) else {
                        continue;
                    };
                    if char_len(root) < MIN_ROOT_LEN {
                        continue;
                    }
                    return Some(Analysis::segmented(
                        root,
                        chain.affixes[i..j].to_vec(),
                        Strategy::PatternMatch,
                        PATTERN_NOTE,
                    ));
                }
            }
        }
        None
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
