//! Markdown output formatter

use super::{AnalyzedInput, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - a section per input with statistics tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    inputs: usize,
    failed: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inputs: 0,
            failed: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_input(&mut self, input: &AnalyzedInput) -> Result<()> {
        self.inputs += 1;
        writeln!(self.writer, "## {}", input.source)?;
        writeln!(self.writer)?;

        let analysis = match &input.outcome {
            Ok(analysis) => analysis,
            Err(message) => {
                self.failed += 1;
                writeln!(self.writer, "**Error:** {message}")?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        let stats = &analysis.report.statistics;
        writeln!(self.writer, "### Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Sentences | {} |", stats.sentence_count)?;
        writeln!(self.writer, "| Words | {} |", stats.word_count)?;
        writeln!(self.writer, "| Unique words | {} |", stats.unique_word_count)?;
        writeln!(
            self.writer,
            "| Average word length | {:.2} |",
            stats.average_word_length
        )?;
        writeln!(self.writer)?;

        let readability = &analysis.report.readability;
        writeln!(self.writer, "### Readability")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Score | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(
            self.writer,
            "| Flesch Reading Ease | {:.2} |",
            readability.flesch_reading_ease
        )?;
        writeln!(
            self.writer,
            "| Flesch-Kincaid Grade | {:.2} |",
            readability.flesch_kincaid_grade
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Corrected text")?;
        writeln!(self.writer)?;
        for line in analysis.report.grammar_correction.lines() {
            writeln!(self.writer, "> {line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Inputs analyzed: {}, failed: {}*",
            self.inputs - self.failed,
            self.failed
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
