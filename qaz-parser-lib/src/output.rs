// Text rendering of analysis results.

use crate::morphology::BatchSummary;
use crate::types::*;

/// Render the `root + affixes` report column.
///
/// Format:
///   No affixes:   `kitab`
///   With affixes: `kitab + ïm[1SG] + da[LOC]`
///   Unrecognized: empty string
pub fn root_with_affixes(result: &AnalysisResult) -> String {
    let root = result.root();
    let affixes = result.affixes();
    if affixes.is_empty() {
        return root.to_string();
    }
    let tail = affixes
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{root} + {tail}")
}

/// Notes joined for a single report cell.
pub fn notes_column(result: &AnalysisResult) -> String {
    result.notes().join("; ")
}

/// Multi-line human-readable description of one analysed record.
pub fn describe(analyzed: &AnalyzedRecord) -> String {
    let result = &analyzed.result;
    let mut out = format!("Word: {}\n  Root: {}\n", result.word(), result.root());
    if !result.affixes().is_empty() {
        let affixes = result
            .affixes()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  Affixes: {affixes}\n"));
    }
    let segmentation = if result.segmentation().is_empty() {
        "None".to_string()
    } else {
        result.segmentation().join(" + ")
    };
    out.push_str(&format!("  Segmentation: {segmentation}\n"));
    out.push_str(&format!("  Notes: {}\n", result.notes().join(", ")));
    out.push_str(&format!("  Occurrences: {}\n", analyzed.record.occurrences));
    out
}

/// Console summary printed after a batch run.
pub fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total words: {}", summary.total),
        format!(
            "Successfully analyzed: {} ({:.1}%)",
            summary.recognized,
            summary.recognized_percent()
        ),
        format!(
            "Unrecognized words: {} ({:.1}%)",
            summary.unrecognized,
            summary.unrecognized_percent()
        ),
    ];
    for (strategy, count) in &summary.by_strategy {
        lines.push(format!("  {strategy}: {count}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_result() -> AnalysisResult {
        AnalysisResult::Recognized(Analysis {
            word: "kitabïmda".to_string(),
            root: "kitab".to_string(),
            affixes: vec![AffixEntry::new("ïm", "1SG"), AffixEntry::new("da", "LOC")],
            segmentation: vec!["kitab".into(), "ïm".into(), "da".into()],
            notes: vec!["Turkic morpheme pattern matching".to_string()],
            strategy: Strategy::PatternMatch,
        })
    }

    #[test]
    fn test_root_with_affixes() {
        assert_eq!(
            root_with_affixes(&pattern_result()),
            "kitab + ïm[1SG] + da[LOC]"
        );
    }

    #[test]
    fn test_root_only() {
        let r = AnalysisResult::Recognized(Analysis {
            word: "on".to_string(),
            root: "on".to_string(),
            affixes: vec![],
            segmentation: vec!["on".into()],
            notes: vec!["identified as short word/postposition".to_string()],
            strategy: Strategy::ShortWord,
        });
        assert_eq!(root_with_affixes(&r), "on");
    }

    #[test]
    fn test_unrecognized_renders_empty() {
        let r = AnalysisResult::Unrecognized {
            word: "bcf".to_string(),
            notes: vec!["UNRECOGNIZED - needs additional analysis".to_string()],
        };
        assert_eq!(root_with_affixes(&r), "");
        assert_eq!(notes_column(&r), "UNRECOGNIZED - needs additional analysis");
    }

    #[test]
    fn test_describe() {
        let analyzed = AnalyzedRecord {
            record: WordRecord {
                word: "kitabïmda".to_string(),
                occurrences: "3".to_string(),
                lines: "[2, 5]".to_string(),
            },
            result: pattern_result(),
        };
        let text = describe(&analyzed);
        assert!(text.contains("Root: kitab\n"));
        assert!(text.contains("Affixes: ïm[1SG], da[LOC]\n"));
        assert!(text.contains("Segmentation: kitab + ïm + da\n"));
        assert!(text.contains("Occurrences: 3\n"));
    }

    #[test]
    fn test_summary_lines() {
        let mut summary = BatchSummary {
            total: 4,
            recognized: 3,
            unrecognized: 1,
            ..Default::default()
        };
        summary.by_strategy.insert("short word".to_string(), 2);
        let lines = summary_lines(&summary);
        assert_eq!(lines[1], "Successfully analyzed: 3 (75.0%)");
        assert_eq!(lines[2], "Unrecognized words: 1 (25.0%)");
        assert_eq!(lines[3], "  short word: 2");
    }
}
