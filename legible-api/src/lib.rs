//! Public API for Legible text readability analysis
//!
//! This crate provides a stable interface over the deterministic metrics in
//! `legible-core`: input validation, the metrics pipeline and the correction
//! step with its failure policy.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use legible_core::{
    words, CoreError, CorrectionError, IdentityCorrector, SentenceSegmenter, SentenceTokenizer,
    SpellingCorrector, SpellingDictionary, TextCorrector, TextMetrics,
};
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, CorrectionFallback, CorrectionMode};
pub use dto::{AnalysisReport, AnalyzeRequest, ErrorBody, Input, Measurement};
pub use error::ApiError;
pub use legible_core::{Readability, Statistics};

/// Main entry point for text analysis
///
/// Cheap to share: the segmenter rules and the corrector are reference
/// counted, and analysis holds no per-request state.
#[derive(Clone)]
pub struct TextAnalyzer {
    segmenter: SentenceSegmenter,
    corrector: Arc<dyn TextCorrector>,
    config: Config,
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("segmenter", &self.segmenter)
            .field("corrector", &self.corrector.name())
            .field("config", &self.config)
            .finish()
    }
}

impl TextAnalyzer {
    /// Create an analyzer with default configuration (English, spelling correction)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer from configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let segmenter = match config.rules_path() {
            Some(path) => SentenceSegmenter::from_rules_file(path)?,
            None => SentenceSegmenter::for_language(config.language())?,
        };

        let corrector: Arc<dyn TextCorrector> = match config.correction() {
            CorrectionMode::None => Arc::new(IdentityCorrector),
            CorrectionMode::Spelling => {
                let dictionary = match config.dictionary_path() {
                    Some(path) => Arc::new(SpellingDictionary::load_from_file(path)?),
                    None => SpellingDictionary::builtin(),
                };
                Arc::new(
                    SpellingCorrector::with_dictionary(dictionary)
                        .with_max_edit_distance(config.max_edit_distance()),
                )
            }
        };

        log::debug!(
            "Analyzer ready: rules={}, corrector={}, fallback={:?}",
            segmenter.rules().code(),
            corrector.name(),
            config.fallback()
        );

        Ok(Self {
            segmenter,
            corrector,
            config,
        })
    }

    /// Replace the corrector
    pub fn with_corrector(mut self, corrector: Arc<dyn TextCorrector>) -> Self {
        self.corrector = corrector;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the corrector, for running it elsewhere (e.g. a blocking pool)
    pub fn corrector(&self) -> Arc<dyn TextCorrector> {
        Arc::clone(&self.corrector)
    }

    /// Validate `text` and compute its metrics
    ///
    /// Checks, in order: text present and not blank, at least one sentence,
    /// at least one word.
    pub fn measure(&self, text: Option<&str>) -> Result<Measurement> {
        let text = text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(ApiError::MissingInput);
        }

        let sentence_count = self.segmenter.sentence_count(text);
        if sentence_count == 0 {
            return Err(ApiError::NoSentences);
        }

        let metrics = TextMetrics::compute(words(text), sentence_count).map_err(|e| match e {
            CoreError::EmptyInput => ApiError::NoWords,
            CoreError::NoSentences => ApiError::NoSentences,
            other => ApiError::Core(other),
        })?;

        Ok(Measurement {
            text: text.to_string(),
            metrics,
        })
    }

    /// Run the corrector on `text` and apply the fallback policy
    pub fn correct(&self, text: &str) -> Result<String> {
        self.apply_fallback(text, self.corrector.correct(text))
    }

    /// Resolve a correction outcome according to the fallback policy
    pub fn apply_fallback(
        &self,
        text: &str,
        outcome: std::result::Result<String, CorrectionError>,
    ) -> Result<String> {
        match (outcome, self.config.fallback()) {
            (Ok(corrected), _) => Ok(corrected),
            (Err(e), CorrectionFallback::Original) => {
                log::warn!(
                    "Correction with '{}' failed, returning original text: {e}",
                    self.corrector.name()
                );
                Ok(text.to_string())
            }
            (Err(e), CorrectionFallback::Fail) => Err(ApiError::Correction(e)),
        }
    }

    /// Measure and correct a request
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport> {
        self.run(request.text.as_deref())
    }

    /// Analyze text directly (convenience method)
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport> {
        self.run(Some(text))
    }

    /// Read an input and analyze it
    pub fn analyze_input(&self, input: Input) -> Result<AnalysisReport> {
        let text = input.read_text()?;
        self.analyze_text(&text)
    }

    fn run(&self, text: Option<&str>) -> Result<AnalysisReport> {
        let measurement = self.measure(text)?;
        let corrected = self.correct(&measurement.text)?;
        Ok(measurement.into_report(corrected))
    }
}

// Convenience functions

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> Result<AnalysisReport> {
    TextAnalyzer::new()?.analyze_text(text)
}

/// Analyze a file with default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<AnalysisReport> {
    TextAnalyzer::new()?.analyze_input(Input::from_file(path.as_ref().to_path_buf()))
}
