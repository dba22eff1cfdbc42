//! Analyze command implementation

use crate::commands::init_logging;
use crate::config::{AnalysisOverrides, CliConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, Analysis, AnalyzedInput, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use legible_api::{CorrectionFallback, TextAnalyzer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report the text unchanged instead of spell-correcting it
    #[arg(long)]
    pub no_correction: bool,

    /// What to do when correction fails: original | fail
    #[arg(long, value_name = "POLICY")]
    pub fallback: Option<CorrectionFallback>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segmentation rules file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Word frequency list for the spelling corrector
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let api_config = config.analysis.to_api_config(&self.overrides())?;
        let analyzer =
            TextAnalyzer::with_config(api_config).context("Failed to initialize analyzer")?;

        let sources = self.sources()?;
        log::info!("Analyzing {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(sources.len() as u64);

        let results: Vec<AnalyzedInput> = sources
            .par_iter()
            .map(|source| {
                let result = analyze_source(&analyzer, source);
                progress.input_completed(&result.source);
                result
            })
            .collect();
        progress.finish();

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        for result in &results {
            formatter.format_input(result)?;
        }
        formatter.finish()?;

        let failed = results.iter().filter(|r| r.outcome.is_err()).count();
        if failed > 0 {
            return Err(CliError::AnalysisFailed {
                failed,
                total: results.len(),
            }
            .into());
        }

        Ok(())
    }

    fn overrides(&self) -> AnalysisOverrides {
        AnalysisOverrides {
            no_correction: self.no_correction,
            rules: self.rules.clone(),
            dictionary: self.dictionary.clone(),
            fallback: self.fallback,
        }
    }

    /// Inline text, else stdin (explicit `-` or no inputs), then resolved files
    fn sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Inline(text.clone())]);
        }
        if self.input.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }

        let mut sources = Vec::new();
        if self.input.iter().any(|p| p == "-") {
            sources.push(InputSource::Stdin);
        }

        let patterns: Vec<String> = self.input.iter().filter(|p| *p != "-").cloned().collect();
        if !patterns.is_empty() {
            sources.extend(
                resolve_patterns(&patterns)?
                    .into_iter()
                    .map(InputSource::File),
            );
        }

        Ok(sources)
    }
}

/// Read, measure and correct one input; failures become the input's error message
fn analyze_source(analyzer: &TextAnalyzer, source: &InputSource) -> AnalyzedInput {
    let label = source.label();
    let outcome = source
        .read_text()
        .and_then(|text| {
            let measurement = analyzer.measure(Some(&text))?;
            let corrected = analyzer.correct(&measurement.text)?;
            Ok(Analysis::new(measurement.metrics, corrected))
        })
        .map_err(|e| {
            log::warn!("{label}: {e:#}");
            format!("{e:#}")
        });

    AnalyzedInput {
        source: label,
        outcome,
    }
}
