//! Errors returned by [`TextAnalyzer`](crate::TextAnalyzer)

use legible_core::{CoreError, CorrectionError};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Why an analysis could not produce a report
///
/// The display strings of the three input errors are the messages returned
/// to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Text absent, empty or whitespace only
    #[error("No text provided")]
    MissingInput,

    /// Segmenter produced no sentences
    #[error("No sentences found")]
    NoSentences,

    /// Tokenizer produced no words
    #[error("No words found")]
    NoWords,

    /// Corrector failed and the fallback policy is `Fail`
    #[error("Grammar correction failed: {0}")]
    Correction(#[from] CorrectionError),

    /// Rejected builder settings
    #[error("configuration error: {0}")]
    Config(String),

    /// Error from the core pipeline or its rule/dictionary loaders
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Reading an [`Input`](crate::Input) failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Byte input was not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl ApiError {
    /// Whether the error was caused by the submitted text
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput | Self::NoSentences | Self::NoWords)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ApiError>;
