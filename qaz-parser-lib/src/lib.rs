pub mod types;
pub mod text;
pub mod affixes;
pub mod confidence;
pub mod patterns;
pub mod stripper;
pub mod heuristics;
pub mod loanword;
pub mod morphology;
pub mod output;
pub mod records;
pub mod corpus;
pub mod config;
pub mod error;

pub use affixes::AffixTable;
pub use config::ReportConfig;
pub use error::InputError;
pub use morphology::{analyze_word, Analyzer, BatchSummary};
pub use types::{AffixEntry, Analysis, AnalysisResult, AnalyzedRecord, Strategy, WordRecord};
