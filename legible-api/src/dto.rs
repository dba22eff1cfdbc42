//! Request and response types shared by the CLI and the HTTP server

use crate::error::{ApiError, Result};
use legible_core::{Readability, Statistics, TextMetrics};
use std::path::PathBuf;

/// Where the text to analyse comes from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Input {
    /// Text held in memory
    Text(String),
    /// A UTF-8 file on disk
    File(PathBuf),
    /// Bytes that must decode as UTF-8
    Bytes(Vec<u8>),
}

impl Input {
    /// Input read from `path` when analysed
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Load the text, decoding as UTF-8
    pub fn read_text(self) -> Result<String> {
        let text = match self {
            Self::Text(text) => text,
            Self::File(path) => std::fs::read_to_string(path)?,
            Self::Bytes(bytes) => String::from_utf8(bytes)?,
        };
        Ok(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Body of an analysis request; `text` may be absent
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzeRequest {
    /// Text to analyse
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    /// Request for `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Validated text together with its metrics, before correction
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Input with surrounding whitespace removed
    pub text: String,
    /// Statistics, readability and unrounded intermediates
    pub metrics: TextMetrics,
}

impl Measurement {
    /// Combine with the corrected text into a report
    pub fn into_report(self, grammar_correction: String) -> AnalysisReport {
        AnalysisReport {
            statistics: self.metrics.statistics,
            readability: self.metrics.readability,
            grammar_correction,
        }
    }
}

/// Complete analysis result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    /// Counting statistics
    pub statistics: Statistics,
    /// Readability scores
    pub readability: Readability,
    /// Corrected text (or the original under the `Original` fallback)
    pub grammar_correction: String,
}

/// Error payload returned to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

impl ErrorBody {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self::new(err.to_string())
    }
}
