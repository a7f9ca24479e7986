use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_OUTPUT_DIR: &str = "morphological_analysis";

/// Where reports go and how batches are run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory receiving `*-morphological-analysis.csv` and
    /// `*-unknown-tokens.csv`. Created when missing.
    pub output_dir: PathBuf,
    /// Analyse words on the rayon thread pool.
    pub parallel: bool,
}

impl ReportConfig {
    /// Read `QAZ_OUTPUT_DIR` and `QAZ_PARALLEL` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output_dir = lookup("QAZ_OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let parallel = lookup("QAZ_PARALLEL")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            output_dir,
            parallel,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ReportConfig::default();
        assert_eq!(c.output_dir, PathBuf::from("morphological_analysis"));
        assert!(!c.parallel);
    }

    #[test]
    fn test_lookup_overrides() {
        let c = ReportConfig::from_lookup(|k| match k {
            "QAZ_OUTPUT_DIR" => Some("/tmp/out".to_string()),
            "QAZ_PARALLEL" => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(c.output_dir, PathBuf::from("/tmp/out"));
        assert!(c.parallel);
    }

    #[test]
    fn test_blank_output_dir_falls_back() {
        let c = ReportConfig::from_lookup(|k| (k == "QAZ_OUTPUT_DIR").then(|| "  ".to_string()));
        assert_eq!(c.output_dir, PathBuf::from("morphological_analysis"));
    }
}
