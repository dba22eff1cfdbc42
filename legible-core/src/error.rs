//! Core error types

use thiserror::Error;

/// Errors raised by the deterministic text pipeline and its rule/dictionary loaders
#[derive(Error, Debug)]
pub enum CoreError {
    /// No words survived tokenization
    #[error("no words found in input")]
    EmptyInput,

    /// Sentence count of zero passed to the metrics calculator
    #[error("no sentences found in input")]
    NoSentences,

    /// Segmentation rules failed to parse or validate
    #[error("invalid segmentation rules: {0}")]
    InvalidRules(String),

    /// No embedded rules for the requested language code
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Malformed line in a frequency dictionary
    #[error("invalid dictionary entry at line {line}: {reason}")]
    Dictionary {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// I/O error while reading a rules or dictionary file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
