//! JSON output formatter

use super::{AnalyzedInput, OutputFormatter};
use anyhow::Result;
use legible_api::AnalysisReport;
use serde::Serialize;
use std::io::Write;

/// One element of the JSON array
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Entry<'a> {
    Report {
        source: &'a str,
        report: &'a AnalysisReport,
    },
    Error {
        source: &'a str,
        error: &'a str,
    },
}

/// JSON formatter - outputs an array of `{source, report}` / `{source, error}`
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_input(&mut self, input: &AnalyzedInput) -> Result<()> {
        let entry = match &input.outcome {
            Ok(analysis) => Entry::Report {
                source: &input.source,
                report: &analysis.report,
            },
            Err(message) => Entry::Error {
                source: &input.source,
                error: message,
            },
        };
        self.entries.push(serde_json::to_value(entry)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
