//! High-level configuration API

use crate::error::{ApiError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which corrector the analyzer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CorrectionMode {
    /// Dictionary-based spelling correction
    #[default]
    Spelling,
    /// Return the text unchanged
    None,
}

impl FromStr for CorrectionMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "spelling" => Ok(Self::Spelling),
            "none" | "off" => Ok(Self::None),
            other => Err(ApiError::Config(format!("unknown correction mode: {other}"))),
        }
    }
}

/// What to return when the corrector fails or times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CorrectionFallback {
    /// Report the uncorrected text
    #[default]
    Original,
    /// Fail the whole analysis
    Fail,
}

impl FromStr for CorrectionFallback {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "fail" => Ok(Self::Fail),
            other => Err(ApiError::Config(format!("unknown fallback policy: {other}"))),
        }
    }
}

/// High-level configuration for text analysis
#[derive(Debug, Clone)]
pub struct Config {
    language: String,
    rules_path: Option<PathBuf>,
    correction: CorrectionMode,
    fallback: CorrectionFallback,
    max_edit_distance: usize,
    dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            rules_path: None,
            correction: CorrectionMode::default(),
            fallback: CorrectionFallback::default(),
            max_edit_distance: 2,
            dictionary_path: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration with correction disabled
    pub fn without_correction() -> Self {
        Self {
            correction: CorrectionMode::None,
            ..Self::default()
        }
    }

    /// Language code of the embedded segmentation rules
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Custom segmentation rules file, if any
    pub fn rules_path(&self) -> Option<&Path> {
        self.rules_path.as_deref()
    }

    /// Corrector selection
    pub fn correction(&self) -> CorrectionMode {
        self.correction
    }

    /// Correction failure policy
    pub fn fallback(&self) -> CorrectionFallback {
        self.fallback
    }

    /// Maximum edit distance searched by the spelling corrector
    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Custom frequency dictionary, if any
    pub fn dictionary_path(&self) -> Option<&Path> {
        self.dictionary_path.as_deref()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language of the embedded rules
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Load segmentation rules from a TOML file instead
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules_path = Some(path.into());
        self
    }

    /// Select the corrector
    pub fn correction(mut self, mode: CorrectionMode) -> Self {
        self.config.correction = mode;
        self
    }

    /// Set the correction failure policy
    pub fn fallback(mut self, fallback: CorrectionFallback) -> Self {
        self.config.fallback = fallback;
        self
    }

    /// Set the spelling corrector's edit distance (1 or 2)
    pub fn max_edit_distance(mut self, distance: usize) -> Self {
        self.config.max_edit_distance = distance;
        self
    }

    /// Use a custom frequency dictionary
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.language.is_empty() && self.config.rules_path.is_none() {
            return Err(ApiError::Config(
                "language or rules file required".to_string(),
            ));
        }

        if !(1..=2).contains(&self.config.max_edit_distance) {
            return Err(ApiError::Config(format!(
                "max_edit_distance must be 1 or 2, got {}",
                self.config.max_edit_distance
            )));
        }

        Ok(self.config)
    }
}
