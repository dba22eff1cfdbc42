//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use legible_api::{Config, CorrectionFallback, CorrectionMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default origin allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "https://dapper-lily-09264d.netlify.app";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Tokio worker threads (0 = number of CPUs)
    pub workers: usize,

    /// Maximum blocking-pool threads
    pub threads: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Enable the CORS layer
    pub cors_enabled: bool,

    /// Allowed origins (empty = any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: 2,
            threads: 4,
            timeout_secs: 120,
            cors_enabled: true,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// Analysis settings shared by `analyze` and `serve`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Corrector selection
    pub correction: CorrectionMode,

    /// Correction failure policy
    pub fallback: CorrectionFallback,

    /// Spelling corrector edit distance (1 or 2)
    pub max_edit_distance: usize,

    /// Correction timeout used by the server, in milliseconds
    pub correction_timeout_ms: u64,

    /// Custom frequency dictionary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,

    /// Custom segmentation rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            correction: CorrectionMode::Spelling,
            fallback: CorrectionFallback::Original,
            max_edit_distance: 2,
            correction_timeout_ms: 10_000,
            dictionary: None,
            rules: None,
        }
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct AnalysisOverrides {
    /// Disable correction
    pub no_correction: bool,
    /// Rules file
    pub rules: Option<PathBuf>,
    /// Dictionary file
    pub dictionary: Option<PathBuf>,
    /// Fallback policy
    pub fallback: Option<CorrectionFallback>,
}

impl AnalysisConfig {
    /// Build the analyzer configuration, command-line overrides first
    pub fn to_api_config(&self, overrides: &AnalysisOverrides) -> Result<Config> {
        let correction = if overrides.no_correction {
            CorrectionMode::None
        } else {
            self.correction
        };

        let mut builder = Config::builder()
            .correction(correction)
            .fallback(overrides.fallback.unwrap_or(self.fallback))
            .max_edit_distance(self.max_edit_distance);

        if let Some(rules) = overrides.rules.as_ref().or(self.rules.as_ref()) {
            builder = builder.rules_file(rules);
        }
        if let Some(dictionary) = overrides.dictionary.as_ref().or(self.dictionary.as_ref()) {
            builder = builder.dictionary_file(dictionary);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}
