// Affix inventory for Chagatai-era Qazaq/Uzbek, keyed by grammatical category.
//
// Surfaces use the transcription notation: `[x]` marks a deletable segment.
// The table drops bracketed segments, normalizes, and flattens everything into
// one list ordered longest surface first so that less ambiguous affixes are
// tried before their shorter look-alikes.

use crate::text::{char_len, normalize, strip_optional_segments};
use crate::types::AffixEntry;

/// Category → surface definitions, in declaration order.
pub type AffixDefinitions = [(&'static str, &'static [&'static str])];

// ---------------------------------------------------------------------------
// Category definitions
// ---------------------------------------------------------------------------

pub const AFFIX_DEFINITIONS: &AffixDefinitions = &[
    // Person/number.
    ("1PL", &["k", "miz", "mïz", "mïzlar", "q"]),
    ("1SG", &["ben", "m", "men", "mïn", "im", "ïm", "um"]),
    ("2SG.POL", &["ïŋïz", "ŋiz", "ŋïz", "siz", "sïz", "uŋïz", "üŋiz"]),
    ("3PL", &["lar", "dular", "lär"]),
    (
        "3POSS",
        &[
            "ï", "i", "ïn", "sï", "un", "sin", "in", "šï", "sïh", "sïn", "u", "ün", "sun", "ī",
            "si", "su", "ü", "sü",
        ],
    ),
    // Possessives.
    (
        "POSS.1PL",
        &["ïmïz", "imiz", "ïmiz", "ïmïz", "miz", "mïz", "umïz", "ümiz", "ümüz"],
    ),
    ("POSS.1SG", &["im", "ïm", "m", "um", "üm"]),
    ("POSS.2SG", &["iŋ"]),
    ("POSS.2SG.POL", &["ïŋïz", "ŋïz", "iŋiz", "ŋiz", "uŋïz", "üŋiz"]),
    (
        "POSS.3",
        &[
            "ï", "i", "ïn", "sï", "šï", "sïh", "sïn", "u", "un", "ün", "sun", "ī", "si", "su",
            "ü", "sü",
        ],
    ),
    ("POSS.3PL", &["ï"]),
    ("POSS.3SG", &["ï", "un"]),
    // Case.
    ("ABL", &["da[y]n", "dan", "dän", "din", "dïn", "ï"]),
    ("ACC", &["i", "ï", "n", "n[ï]", "ni", "nï"]),
    ("DAT", &["a", "ä", "ar", "ga", "gä", "ġa", "kä", "na", "qa", "yä", "nä"]),
    ("GEN", &["[n]iŋ", "im", "niŋ", "nïŋ", "nuŋ"]),
    ("LOC", &["d[a]", "da", "dä", "nda", "ta", "ṭa", "te"]),
    // Verb inflection.
    ("AOR", &["a[r]", "ar", "är", "ur", "ür", "r"]),
    (
        "CV",
        &[
            "a", "ip", "ïp", "p", "up", "üp", "y", "y[y]", "yinče", "yu", "ä", "e", "gäč", "ġač",
            "gänčä", "ġanča", "käč", "künčä", "u", "yinčä", "yïnča", "ġïča", "äp", "ap",
        ],
    ),
    (
        "EV",
        &["ïptï", "ptï", "gän", "miš", "p", "üp", "ïp", "up", "updur", "üpdur"],
    ),
    ("GAN.PST", &["ġan", "kän"]),
    ("H.PST", &["atuġun"]),
    ("INF", &["uw", "üw", "w"]),
    ("NEG", &["ma", "mä", "me", "mes"]),
    ("NEG.AOR", &["mas", "mäs", "maṣ"]),
    ("NEG.COP", &["dägül", "ermez"]),
    ("NEG.IMP.2SG", &["ma"]),
    ("NEG.PTCP", &["mas", "mäs", "maz"]),
    ("OPT", &["gäy", "ġay"]),
    ("OPT.1PL", &["alïq", "älik", "äli", "äylä"]),
    ("OPT.1SG", &["ayïn", "äyin"]),
    ("OPT.3SG", &["gäy", "ġay"]),
    ("PASS", &["ïl", "il", "ïn", "l", "n", "ul", "ül", "un", "ün"]),
    ("PRF", &["gän", "qan", "ġan", "kän"]),
    ("PST", &["[di]", "[t]ï", "di", "dï", "du", "dü", "tu", "ti", "tï"]),
    ("PST3", &["di", "dï", "ti"]),
    (
        "PTCP",
        &[
            "[q]an", "[ur]", "äček", "ar", "är", "atuġun", "gän", "ġan", "ġän", "kän", "mïš",
            "qan", "ur", "ür", "ä", "gan", "mäkči", "miš", "r", "uwčï", "wči", "wčï", "üwči",
        ],
    ),
    (
        "VB",
        &[
            "la", "lan", "lät", "ä", "är", "ät", "äy", "güz", "ik", "lä", "laš", "ük", "län",
            "läš",
        ],
    ),
    ("VB.IMP.2SG", &["la"]),
    (
        "VN",
        &[
            "maġ", "mäk", "maq", "mek", "üš", "w", "ġu", "iš", "ma", "mä", "miš", "š", "üč", "uš",
            "üw",
        ],
    ),
    ("VOL", &["sun", "sün"]),
    ("VOL.1PL", &["älik", "äyik"]),
    ("VOL.1SG", &["äyüm", "yïn"]),
    ("VOL.3SG", &["sun", "sün"]),
    // Derivation.
    (
        "ADJ",
        &[
            "dar", "dār", "er", "gi", "ġï", "ġu", "i", "ï", "ī", "kä", "kar", "ki", "li", "lï",
            "lik", "lïq", "lü", "lu", "lük", "luq", "ük", "uq", "war",
        ],
    ),
    ("ADV", &["čä", "i", "ānä"]),
    (
        "NM",
        &[
            "ama", "ar", "čï", "čilik", "čilïq", "čïlïq", "dar", "daš", "dük", "duq", "gar", "ġu",
            "güč", "güči", "ġučï", "ġun", "im", "lig", "lïġ", "lik", "lïq", "lük", "tuġ", "qar",
            "qun", "š", "tik", "uq", "uš", "uw", "uwïl", "w", "uġ", "či", "gü", "č",
        ],
    ),
    ("RCP", &["iš", "äš", "ïš", "š", "uš", "üš"]),
    ("RFL", &["ïn", "ün"]),
    // Auxiliaries and copulas.
    ("AUX", &["al", "ber", "kel", "sal", "tur", "yat", "yür"]),
    ("AUX.3", &["dür"]),
    ("AUX.3/COP", &["dur", "dür"]),
    ("COP", &["dur", "dür", "e", "er"]),
    ("EVID", &["kän"]),
    ("EVID.COP", &["kän"]),
    // Other markers.
    ("ABIL", &["al"]),
    ("ACCORDING.TO", &["inčä"]),
    ("ALSO", &["da", "dä"]),
    ("ASRT", &["dur", "dür"]),
    ("BAL", &["dän"]),
    ("CM", &["ï", "ïn", "un", "in"]),
    ("CMP", &["raq", "räk", "üräk"]),
    ("CND", &["sa", "sä"]),
    ("COLL", &["w"]),
    (
        "CS",
        &[
            "ar", "dur", "küz", "sät", "t", "čür", "d", "dür", "güz", "ġuz", "ir", "ïr", "kär",
            "kir", "set", "tur", "tür", "ur", "ür", "t",
        ],
    ),
    ("DAN", &["dan"]),
    ("EMPH", &["da", "dä"]),
    ("EQU", &["day"]),
    ("EQV", &["ča", "čä", "daq", "day", "däy", "dek", "lay", "tek"]),
    ("EZ", &["ï", "i", "ye"]),
    ("IMP.2PL.POL", &["ŋïzlar"]),
    ("IMP.2SG.POL", &["ïŋïz", "ŋiz", "ŋïz", "uŋïz", "üŋiz"]),
    ("ORD", &["inči", "nči", "ïnčï", "njï"]),
    ("ORD.NM", &["nči"]),
    ("ORD.NUM", &["inči", "nči"]),
    ("PF", &["a", "ä", "e", "y"]),
    ("PL", &["dä", "lar", "lär", "ler"]),
    ("PL[POSS.3]", &["ï"]),
    ("PRV", &["sïz", "siz"]),
    ("PTCL", &["aq", "erki"]),
    ("Q", &["mi", "mu", "mü"]),
    ("TRM", &["ġača"]),
    ("TRM/CV", &["künčä"]),
    // Lexicalised forms.
    ("I.DAT", &["baŋa"]),
    ("YOU.POL", &["siz"]),
];

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Flattened, length-sorted affix inventory. Built once and only read after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixTable {
    entries: Vec<AffixEntry>,
}

impl AffixTable {
    /// Build the table from the built-in inventory.
    pub fn new() -> Self {
        Self::from_definitions(AFFIX_DEFINITIONS)
    }

    /// Build a table from arbitrary category definitions. Duplicate surfaces
    /// across categories are kept; scoring decides between them.
    pub fn from_definitions(definitions: &AffixDefinitions) -> Self {
        let mut entries: Vec<AffixEntry> = definitions
            .iter()
            .flat_map(|(category, surfaces)| {
                surfaces.iter().filter_map(move |raw| {
                    let surface = normalize(&strip_optional_segments(raw));
                    if surface.is_empty() {
                        None
                    } else {
                        Some(AffixEntry::new(surface, *category))
                    }
                })
            })
            .collect();

        // Stable: equal lengths keep definition order.
        entries.sort_by_key(|e| std::cmp::Reverse(char_len(&e.surface)));

        Self { entries }
    }

    /// All entries, longest surface first.
    pub fn all_affixes(&self) -> &[AffixEntry] {
        &self.entries
    }

    /// Entries whose surface ends `word`, in table order.
    pub fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a AffixEntry> + 'a {
        self.entries.iter().filter(move |e| word.ends_with(&e.surface))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AffixTable {
    fn default() -> Self {
        Self::new()
    }
}
