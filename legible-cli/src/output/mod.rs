//! Output formatting module

use anyhow::Result;
use legible_api::AnalysisReport;
use legible_core::TextMetrics;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned key/value block per input
    #[default]
    Text,
    /// JSON array of reports
    Json,
    /// Markdown section per input
    Markdown,
}

/// A successful analysis with the intermediates used for detailed output
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The public report
    pub report: AnalysisReport,
    /// Sum of estimated syllables
    pub total_syllables: usize,
    /// Mean words per sentence (unrounded)
    pub words_per_sentence: f64,
    /// Mean syllables per word (unrounded)
    pub syllables_per_word: f64,
}

impl Analysis {
    /// Combine metrics and corrected text
    pub fn new(metrics: TextMetrics, grammar_correction: String) -> Self {
        Self {
            total_syllables: metrics.total_syllables,
            words_per_sentence: metrics.words_per_sentence,
            syllables_per_word: metrics.syllables_per_word,
            report: AnalysisReport {
                statistics: metrics.statistics,
                readability: metrics.readability,
                grammar_correction,
            },
        }
    }
}

/// Result for one input, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedInput {
    /// Input label (path, `<stdin>` or `<text>`)
    pub source: String,
    /// Analysis or error message
    pub outcome: std::result::Result<Analysis, String>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format the result for one input
    fn format_input(&mut self, input: &AnalyzedInput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_create_formatter_for_each_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, Box::new(buffer.clone()), true);
            formatter.format_input(&sample_ok()).unwrap();
            formatter.finish().unwrap();
            assert!(buffer.contents().contains("108.7"), "{format:?}");
        }
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(w.format, OutputFormat::Markdown);
    }
}
