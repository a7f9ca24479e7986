// CSV word lists in, CSV reports out.
//
// Input needs a `word` column. Occurrence and line columns are found by name
// fragments so that lists produced by different tools can be read as-is.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::InputError;
use crate::output::{notes_column, root_with_affixes};
use crate::types::{AnalyzedRecord, WordRecord};

const WORD_COLUMN: &str = "word";
const OCCURRENCE_HINTS: &[&str] = &["occurrence", "count", "frequency"];
const LINE_HINTS: &[&str] = &["line"];
const DEFAULT_OCCURRENCES: &str = "1";
const DEFAULT_LINES: &str = "[1]";

pub const ANALYSIS_HEADER: &[&str] = &["word", "root + affixes", "occurrences", "lines", "notes"];
pub const UNKNOWN_HEADER: &[&str] = &["word", "number of occurrences", "lines"];

// Removed from input file names before building report names.
const NAME_SUFFIXES: &[&str] = &["-transcription-table", "-transcription", "-table"];

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read a whole file as UTF-8, dropping a leading byte-order mark.
pub fn read_utf8(path: &Path) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::InputNotFound(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| InputError::EncodingError {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;
    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Read a word list CSV from disk.
pub fn read_records(path: &Path) -> Result<Vec<WordRecord>, InputError> {
    let text = read_utf8(path)?;
    let records = parse_records(&text)?;
    info!(path = %path.display(), count = records.len(), "read word list");
    Ok(records)
}

/// Parse word list CSV text (header row required).
pub fn parse_records(text: &str) -> Result<Vec<WordRecord>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::detect(reader.headers()?)?;
    debug!(?columns, "detected columns");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        columns.check_width(&row)?;
        records.push(columns.extract(&row));
    }
    Ok(records)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    width: usize,
    word: usize,
    occurrences: Option<usize>,
    lines: Option<usize>,
}

impl Columns {
    fn detect(headers: &StringRecord) -> Result<Self, InputError> {
        let word = headers
            .iter()
            .position(|h| h.trim() == WORD_COLUMN)
            .ok_or_else(|| InputError::SchemaError {
                found: headers.iter().map(str::to_string).collect(),
            })?;

        // When several headers qualify the last one wins.
        let last_matching = |hints: &[&str]| {
            (0..headers.len()).rev().find_map(|i| {
                let lower = headers.get(i)?.to_lowercase();
                hints.iter().any(|hint| lower.contains(hint)).then_some(i)
            })
        };

        Ok(Self {
            width: headers.len(),
            word,
            occurrences: last_matching(OCCURRENCE_HINTS),
            lines: last_matching(LINE_HINTS),
        })
    }

    /// Short rows read as empty trailing fields. A row wider than the header
    /// almost always has an unquoted comma (`bar,1,[1, 4]`) and is rejected.
    fn check_width(&self, row: &StringRecord) -> Result<(), InputError> {
        if row.len() <= self.width {
            return Ok(());
        }
        Err(InputError::MalformedRecord {
            line: row.position().map_or(0, |p| p.line()),
            message: format!(
                "expected at most {} fields, found {}",
                self.width,
                row.len()
            ),
        })
    }

    fn extract(&self, row: &StringRecord) -> WordRecord {
        let field = |i: usize| row.get(i).unwrap_or("");
        WordRecord {
            word: field(self.word).to_string(),
            occurrences: self
                .occurrences
                .map_or_else(|| DEFAULT_OCCURRENCES.to_string(), |i| field(i).to_string()),
            lines: self
                .lines
                .map_or_else(|| DEFAULT_LINES.to_string(), |i| sanitize_lines(field(i))),
        }
    }
}

/// Drop backslashes and double quotes left over from earlier exports.
pub fn sanitize_lines(lines: &str) -> String {
    lines
        .chars()
        .filter(|c| *c != '\\' && *c != '"')
        .collect::<String>()
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write recognized words with their segmentation.
pub fn write_analysis_report<W: Write>(
    writer: W,
    records: &[AnalyzedRecord],
) -> Result<usize, InputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(ANALYSIS_HEADER)?;
    let mut written = 0;
    for r in records.iter().filter(|r| !r.result.is_unrecognized()) {
        let root = root_with_affixes(&r.result);
        let notes = notes_column(&r.result);
        wtr.write_record([
            r.result.word(),
            root.as_str(),
            r.record.occurrences.as_str(),
            r.record.lines.as_str(),
            notes.as_str(),
        ])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

/// Write unrecognized words in word list layout so they can be fed back in.
pub fn write_unknown_report<W: Write>(
    writer: W,
    records: &[AnalyzedRecord],
) -> Result<usize, InputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(UNKNOWN_HEADER)?;
    let mut written = 0;
    for r in records.iter().filter(|r| r.result.is_unrecognized()) {
        wtr.write_record([
            r.result.word(),
            r.record.occurrences.as_str(),
            r.record.lines.as_str(),
        ])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

/// Files produced by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub analysis: PathBuf,
    /// Only present when at least one word was unrecognized.
    pub unknown: Option<PathBuf>,
}

/// Base name for reports: the input file stem without transcription suffixes.
pub fn report_stem(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = NAME_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(&stem)
        .to_string();

    if let Some(rest) = name.strip_suffix("-transcription") {
        name = rest.to_string();
    }
    name
}

/// Write both reports for `input` into the configured output directory.
pub fn write_reports(
    records: &[AnalyzedRecord],
    input: &Path,
    config: &ReportConfig,
) -> Result<ReportPaths, InputError> {
    fs::create_dir_all(&config.output_dir)?;
    let stem = report_stem(input);

    let analysis = config
        .output_dir
        .join(format!("{stem}-morphological-analysis.csv"));
    let written = write_analysis_report(File::create(&analysis)?, records)?;
    info!(path = %analysis.display(), rows = written, "wrote analysis report");

    let unknown = if records.iter().any(|r| r.result.is_unrecognized()) {
        let path = config.output_dir.join(format!("{stem}-unknown-tokens.csv"));
        let written = write_unknown_report(File::create(&path)?, records)?;
        info!(path = %path.display(), rows = written, "wrote unknown tokens");
        Some(path)
    } else {
        None
    };

    Ok(ReportPaths { analysis, unknown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Analysis, AnalysisResult, Strategy};

    #[test]
    fn test_flexible_column_names() {
        let text = "word,Number of Occurrences,Line Numbers\nkitab,3,\"[1, 4]\"\n";
        let records = parse_records(text).unwrap();
        assert_eq!(
            records,
            vec![WordRecord {
                word: "kitab".to_string(),
                occurrences: "3".to_string(),
                lines: "[1, 4]".to_string(),
            }]
        );
    }

    #[test]
    fn test_defaults_when_columns_absent() {
        let records = parse_records("word\non\n").unwrap();
        assert_eq!(records[0].occurrences, "1");
        assert_eq!(records[0].lines, "[1]");
    }

    #[test]
    fn test_frequency_column() {
        let records = parse_records("frequency,word\n7,bar\n").unwrap();
        assert_eq!(records[0].word, "bar");
        assert_eq!(records[0].occurrences, "7");
    }

    #[test]
    fn test_missing_word_column() {
        let err = parse_records("token,count\nbar,1\n").unwrap_err();
        assert!(matches!(err, InputError::SchemaError { .. }));
    }

    #[test]
    fn test_short_rows_tolerated() {
        let records = parse_records("word,count,lines\nbar\n").unwrap();
        assert_eq!(records[0].word, "bar");
        assert_eq!(records[0].occurrences, "");
        assert_eq!(records[0].lines, "");
    }

    #[test]
    fn test_last_matching_header_wins() {
        let records = parse_records("count,word,occurrences\n1,bar,5\n").unwrap();
        assert_eq!(records[0].occurrences, "5");

        let records = parse_records("line,word,lines\n[1],bar,[7]\n").unwrap();
        assert_eq!(records[0].lines, "[7]");
    }

    #[test]
    fn test_unquoted_comma_is_malformed() {
        let err = parse_records("word,count,lines\non,1,[1]\nbar,1,[1, 4]\n").unwrap_err();
        match err {
            InputError::MalformedRecord { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "expected at most 3 fields, found 4");
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn test_sanitize_lines() {
        assert_eq!(sanitize_lines(" \\\"[3, 9]\\\" "), "[3, 9]");
    }

    #[test]
    fn test_report_stem() {
        assert_eq!(
            report_stem(Path::new("data/QAZ19th-text05-transcription-table.csv")),
            "QAZ19th-text05"
        );
        assert_eq!(report_stem(Path::new("text-table.csv")), "text");
        assert_eq!(
            report_stem(Path::new("text-transcription-transcription.csv")),
            "text"
        );
        assert_eq!(report_stem(Path::new("words.csv")), "words");
    }

    #[test]
    fn test_unknown_report_layout() {
        let records = vec![AnalyzedRecord {
            record: WordRecord {
                word: "bcf".to_string(),
                occurrences: "2".to_string(),
                lines: "[4, 6]".to_string(),
            },
            result: AnalysisResult::Unrecognized {
                word: "bcf".to_string(),
                notes: vec![],
            },
        }];
        let mut buf = Vec::new();
        assert_eq!(write_unknown_report(&mut buf, &records).unwrap(), 1);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "word,number of occurrences,lines\nbcf,2,\"[4, 6]\"\n");
    }

    #[test]
    fn test_analysis_report_skips_unrecognized() {
        let records = vec![
            AnalyzedRecord {
                record: WordRecord::new("on"),
                result: AnalysisResult::Recognized(Analysis {
                    word: "on".to_string(),
                    root: "on".to_string(),
                    affixes: vec![],
                    segmentation: vec!["on".to_string()],
                    notes: vec!["identified as short word/postposition".to_string()],
                    strategy: Strategy::ShortWord,
                }),
            },
            AnalyzedRecord {
                record: WordRecord::new("bcf"),
                result: AnalysisResult::Unrecognized {
                    word: "bcf".to_string(),
                    notes: vec![],
                },
            },
        ];
        let mut buf = Vec::new();
        assert_eq!(write_analysis_report(&mut buf, &records).unwrap(), 1);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "word,root + affixes,occurrences,lines,notes\n\
             on,on,1,[1],identified as short word/postposition\n"
        );
    }
}
