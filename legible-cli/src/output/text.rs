//! Plain text output formatter

use super::{AnalyzedInput, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - an aligned key/value block per input
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    fn row(&mut self, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "  {key:<24}{value}")
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_input(&mut self, input: &AnalyzedInput) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;

        writeln!(self.writer, "{}", input.source)?;
        let analysis = match &input.outcome {
            Ok(analysis) => analysis,
            Err(message) => {
                self.row("Error:", message)?;
                return Ok(());
            }
        };

        let stats = &analysis.report.statistics;
        let readability = &analysis.report.readability;
        self.row("Sentences:", stats.sentence_count)?;
        self.row("Words:", stats.word_count)?;
        self.row("Unique words:", stats.unique_word_count)?;
        self.row("Average word length:", format!("{:.2}", stats.average_word_length))?;
        self.row("Syllables:", analysis.total_syllables)?;
        self.row("Words per sentence:", format!("{:.2}", analysis.words_per_sentence))?;
        self.row("Syllables per word:", format!("{:.2}", analysis.syllables_per_word))?;
        self.row(
            "Flesch reading ease:",
            format!("{:.2}", readability.flesch_reading_ease),
        )?;
        self.row(
            "Flesch-Kincaid grade:",
            format!("{:.2}", readability.flesch_kincaid_grade),
        )?;
        writeln!(self.writer, "  Corrected text:")?;
        for line in analysis.report.grammar_correction.lines() {
            writeln!(self.writer, "    {line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
