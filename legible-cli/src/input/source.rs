//! Where a text to analyze comes from

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// A single input of the `analyze` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Inline(String),
    /// Standard input (`-`)
    Stdin,
    /// A file resolved from a pattern
    File(PathBuf),
}

impl InputSource {
    /// Label used in reports
    pub fn label(&self) -> String {
        match self {
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the full text of the input
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read standard input")?;
                Ok(buffer)
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
