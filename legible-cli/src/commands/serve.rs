//! Serve command implementation

use crate::commands::init_logging;
use crate::config::{AnalysisOverrides, CliConfig};
use crate::server::{self, ServerSettings};
use anyhow::{Context, Result};
use clap::Args;
use legible_api::{CorrectionFallback, TextAnalyzer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the serve command
///
/// Flags override environment variables, which override the config file.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, env = "LEGIBLE_HOST", value_name = "ADDR")]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Tokio worker threads (0 = number of CPUs)
    #[arg(short, long, env = "GUNICORN_WORKERS", value_name = "N")]
    pub workers: Option<usize>,

    /// Maximum threads for analysis and correction
    #[arg(long, env = "GUNICORN_THREADS", value_name = "N")]
    pub threads: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, env = "GUNICORN_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Allowed CORS origin (repeatable or comma separated)
    #[arg(
        long = "cors-origin",
        env = "LEGIBLE_CORS_ORIGIN",
        value_name = "ORIGIN",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Disable CORS headers entirely
    #[arg(long)]
    pub no_cors: bool,

    /// Report the text unchanged instead of spell-correcting it
    #[arg(long)]
    pub no_correction: bool,

    /// What to do when correction fails: original | fail
    #[arg(long, value_name = "POLICY")]
    pub fallback: Option<CorrectionFallback>,

    /// Correction timeout in milliseconds
    #[arg(long, value_name = "MILLIS")]
    pub correction_timeout_ms: Option<u64>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segmentation rules file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Word frequency list for the spelling corrector
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.settings(&config);
        let api_config = config.analysis.to_api_config(&AnalysisOverrides {
            no_correction: self.no_correction,
            rules: self.rules.clone(),
            dictionary: self.dictionary.clone(),
            fallback: self.fallback,
        })?;

        let analyzer =
            TextAnalyzer::with_config(api_config).context("Failed to initialize analyzer")?;
        let languages = legible_core::language::preload();
        log::info!(
            "Loaded {languages} embedded rule set(s); corrector: {}",
            analyzer.corrector().name()
        );

        let workers = match settings.workers {
            0 => num_cpus::get(),
            n => n,
        };
        log::info!(
            "Starting runtime with {workers} worker(s) and up to {} blocking thread(s)",
            settings.threads
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .max_blocking_threads(settings.threads)
            .enable_all()
            .build()
            .context("Failed to build async runtime")?;

        runtime.block_on(server::serve(Arc::new(analyzer), settings))
    }

    /// Merge flags and environment over the config file
    pub fn settings(&self, config: &CliConfig) -> ServerSettings {
        let server = &config.server;

        let cors_origins = if self.no_cors || !server.cors_enabled {
            None
        } else if self.cors_origins.is_empty() {
            Some(server.cors_origins.clone())
        } else {
            Some(self.cors_origins.clone())
        };

        ServerSettings {
            host: self.host.clone().unwrap_or_else(|| server.host.clone()),
            port: self.port.unwrap_or(server.port),
            workers: self.workers.unwrap_or(server.workers),
            threads: self.threads.unwrap_or(server.threads).max(1),
            request_timeout: Duration::from_secs(self.timeout.unwrap_or(server.timeout_secs)),
            correction_timeout: Duration::from_millis(
                self.correction_timeout_ms
                    .unwrap_or(config.analysis.correction_timeout_ms),
            ),
            cors_origins,
        }
    }
}
