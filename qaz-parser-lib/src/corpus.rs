// Word lists from raw transcriptions.
//
// A transcription is whitespace-separated text with line markers such as
// `(12)` embedded in the token stream. Each word is counted and the lines it
// occurs on are collected.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::records::UNKNOWN_HEADER;
use crate::text::{normalize, strip_punctuation};
use crate::types::WordRecord;

// Line assumed for words that appear before the first marker.
const FIRST_LINE: u32 = 1;
const ELLIPSES: &[&str] = &["…", "..."];

/// One distinct word of a transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub word: String,
    pub occurrences: u32,
    /// Distinct line numbers, in order of first occurrence.
    pub lines: Vec<u32>,
}

impl CorpusEntry {
    /// Render as a word list row, lines as `[1, 4]`.
    pub fn to_record(&self) -> WordRecord {
        let lines = self
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        WordRecord {
            word: self.word.clone(),
            occurrences: self.occurrences.to_string(),
            lines: format!("[{lines}]"),
        }
    }
}

/// Count words in `text`, in order of first appearance.
pub fn build_word_list(text: &str) -> Vec<CorpusEntry> {
    let mut entries: Vec<CorpusEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current_line = FIRST_LINE;

    for token in text.split_whitespace() {
        if token.contains(')') {
            let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
            if let Ok(line) = digits.parse() {
                current_line = line;
            }
            continue;
        }
        if token.chars().all(|c| c.is_ascii_digit()) || ELLIPSES.contains(&token) {
            continue;
        }

        let word = normalize(&strip_punctuation(token));
        if word.is_empty() {
            continue;
        }

        match index.get(&word) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.occurrences += 1;
                if !entry.lines.contains(&current_line) {
                    entry.lines.push(current_line);
                }
            }
            None => {
                index.insert(word.clone(), entries.len());
                entries.push(CorpusEntry {
                    word,
                    occurrences: 1,
                    lines: vec![current_line],
                });
            }
        }
    }

    entries
}

/// Default output for the word list of `transcript`: the same path with a
/// `.csv` extension, or `<stem>-word-list.csv` next to it when the transcript
/// already is a `.csv` file.
pub fn word_list_path(transcript: &Path) -> PathBuf {
    let path = transcript.with_extension("csv");
    if path != transcript {
        return path;
    }
    let stem = transcript
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    transcript.with_file_name(format!("{stem}-word-list.csv"))
}

/// Write entries as a word list CSV readable by [`crate::records::parse_records`].
pub fn write_word_list<W: Write>(writer: W, entries: &[CorpusEntry]) -> Result<(), InputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(UNKNOWN_HEADER)?;
    for entry in entries {
        let r = entry.to_record();
        wtr.write_record([r.word.as_str(), r.occurrences.as_str(), r.lines.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
