//! Word statistics and readability formulas

use crate::error::{CoreError, Result};
use crate::syllable::syllable_count;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Round to two decimal places
///
/// Rounds the exact stored value: `89.0 / 40.0` (just above 2.225) gives 2.23,
/// and only exact ties such as `2.125` go to even.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Flesch Reading Ease, rounded to two decimals (higher is easier)
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round2(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid grade level, rounded to two decimals
pub fn flesch_kincaid_grade(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round2(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Counting statistics for a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of sentences reported by the segmenter
    pub sentence_count: usize,
    /// Number of words after punctuation trimming
    pub word_count: usize,
    /// Number of distinct lowercase word forms
    pub unique_word_count: usize,
    /// Mean characters per word, rounded to two decimals
    pub average_word_length: f64,
}

/// Readability scores for a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    /// Flesch Reading Ease
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level
    pub flesch_kincaid_grade: f64,
}

/// Full result of the metrics calculation, including unrounded intermediates
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    /// Public statistics
    pub statistics: Statistics,
    /// Public readability scores
    pub readability: Readability,
    /// Sum of character counts over all words
    pub total_chars: usize,
    /// Sum of estimated syllables over all words
    pub total_syllables: usize,
    /// word_count / sentence_count
    pub words_per_sentence: f64,
    /// total_syllables / word_count
    pub syllables_per_word: f64,
}

impl TextMetrics {
    /// Compute metrics from a word sequence and a sentence count
    ///
    /// Fails with [`CoreError::EmptyInput`] when `words` yields nothing and
    /// with [`CoreError::NoSentences`] when `sentence_count` is zero.
    pub fn compute<'a, I>(words: I, sentence_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut word_count = 0usize;
        let mut total_chars = 0usize;
        let mut total_syllables = 0usize;
        let mut unique = HashSet::new();

        for word in words {
            word_count += 1;
            total_chars += word.chars().count();
            total_syllables += syllable_count(word);
            unique.insert(word.to_lowercase());
        }

        if word_count == 0 {
            return Err(CoreError::EmptyInput);
        }
        if sentence_count == 0 {
            return Err(CoreError::NoSentences);
        }

        let words_per_sentence = word_count as f64 / sentence_count as f64;
        let syllables_per_word = total_syllables as f64 / word_count as f64;

        Ok(Self {
            statistics: Statistics {
                sentence_count,
                word_count,
                unique_word_count: unique.len(),
                average_word_length: round2(total_chars as f64 / word_count as f64),
            },
            readability: Readability {
                flesch_reading_ease: flesch_reading_ease(words_per_sentence, syllables_per_word),
                flesch_kincaid_grade: flesch_kincaid_grade(words_per_sentence, syllables_per_word),
            },
            total_chars,
            total_syllables,
            words_per_sentence,
            syllables_per_word,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(2.125), 2.12);
        assert_eq!(round2(2.375), 2.38);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(-15.591), -15.59);
    }

    #[test]
    fn test_round2_uses_stored_value() {
        // 89/40 is stored slightly above 2.225, 91/40 slightly below 2.275
        assert_eq!(round2(89.0 / 40.0), 2.23);
        assert_eq!(round2(91.0 / 40.0), 2.27);
        assert_eq!(round2(69.78500000000001), 69.79);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_average_word_length_rounding() {
        let words: Vec<&str> = std::iter::repeat("ab")
            .take(31)
            .chain(std::iter::repeat("abc").take(9))
            .collect();
        let metrics = TextMetrics::compute(words, 1).unwrap();
        assert_eq!(metrics.total_chars, 89);
        assert_eq!(metrics.statistics.word_count, 40);
        assert_eq!(metrics.statistics.average_word_length, 2.23);
    }

    #[test]
    fn test_formulas_reference_point() {
        assert_eq!(flesch_reading_ease(10.0, 1.5), 69.79);
        assert_eq!(flesch_kincaid_grade(10.0, 1.5), 6.01);
    }

    #[test]
    fn test_average_word_length() {
        let metrics = TextMetrics::compute(["ab", "cde"], 1).unwrap();
        assert_eq!(metrics.statistics.average_word_length, 2.5);
        assert_eq!(metrics.total_chars, 5);
    }

    #[test]
    fn test_unique_words_case_insensitive() {
        let metrics = TextMetrics::compute(["The", "cat", "the", "CAT", "sat"], 1).unwrap();
        assert_eq!(metrics.statistics.word_count, 5);
        assert_eq!(metrics.statistics.unique_word_count, 3);
    }

    #[test]
    fn test_empty_words_rejected() {
        let err = TextMetrics::compute(std::iter::empty(), 1).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInput));
    }

    #[test]
    fn test_zero_sentences_rejected() {
        let err = TextMetrics::compute(["word"], 0).unwrap_err();
        assert!(matches!(err, CoreError::NoSentences));
    }

    #[test]
    fn test_intermediates() {
        // "table" = 2, "the" = 1, "a" = 1 syllables
        let metrics = TextMetrics::compute(["table", "the", "a", "a"], 2).unwrap();
        assert_eq!(metrics.total_syllables, 5);
        assert_eq!(metrics.words_per_sentence, 2.0);
        assert_eq!(metrics.syllables_per_word, 1.25);
        assert_eq!(
            metrics.readability.flesch_reading_ease,
            flesch_reading_ease(2.0, 1.25)
        );
    }

    #[test]
    fn test_counts_unicode_scalars() {
        let metrics = TextMetrics::compute(["café"], 1).unwrap();
        assert_eq!(metrics.total_chars, 4);
    }
}
