use std::path::PathBuf;

/// Errors raised while reading word lists or writing reports. The analysis
/// itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("File '{}' is not valid UTF-8 (invalid byte at offset {offset})", .path.display())]
    EncodingError { path: PathBuf, offset: usize },

    #[error("CSV must contain a 'word' column (found: {})", .found.join(", "))]
    SchemaError { found: Vec<String> },

    #[error("CSV parsing error on line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Short hints shown under the error message.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            InputError::InputNotFound(_) => &[
                "Make sure the file exists and the path is correct.",
            ],
            InputError::EncodingError { .. } => &[
                "Try converting your file to UTF-8 encoding.",
                "In most text editors: Save As -> Encoding -> UTF-8",
            ],
            InputError::SchemaError { .. } => &[
                "Your CSV must contain a 'word' column.",
                "Expected format: word,occurrences,lines",
            ],
            InputError::MalformedRecord { .. } => &[
                "Ensure your file is a valid CSV with comma-separated values.",
                "Quote fields that contain commas, e.g. \"[1, 4]\".",
                "The first row should contain column headers including 'word'.",
            ],
            InputError::Io(_) => &[],
        }
    }
}

impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => InputError::Io(e),
            _ => InputError::MalformedRecord { line, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = InputError::InputNotFound(PathBuf::from("missing.csv"));
        assert_eq!(e.to_string(), "Input file 'missing.csv' not found");

        let e = InputError::SchemaError {
            found: vec!["token".to_string(), "count".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "CSV must contain a 'word' column (found: token, count)"
        );
        assert!(!e.tips().is_empty());
    }
}
