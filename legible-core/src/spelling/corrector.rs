//! Spelling corrector over whole texts

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::correction::{CorrectionError, TextCorrector};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::edits::edits1;

/// Word runs, single symbols and single whitespace characters
static TOKEN_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn token_regex() -> Result<&'static Regex, CorrectionError> {
    TOKEN_RE
        .get_or_init(|| Regex::new(r"\w+|[^\w\s]|\s"))
        .as_ref()
        .map_err(|e| CorrectionError::Failed(format!("tokenizer pattern: {e}")))
}

/// Dictionary-based spelling corrector
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: Arc<SpellingDictionary>,
    max_edit_distance: usize,
}

impl SpellingCorrector {
    /// Corrector over the built-in English dictionary
    pub fn english() -> Self {
        Self::with_dictionary(SpellingDictionary::builtin())
    }

    /// Corrector over a custom dictionary
    pub fn with_dictionary(dictionary: Arc<SpellingDictionary>) -> Self {
        Self {
            dictionary,
            max_edit_distance: 2,
        }
    }

    /// Limit candidate search to 1 or 2 edits
    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance.clamp(1, 2);
        self
    }

    /// Maximum edit distance searched
    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// The dictionary in use
    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// Correct a single word, preserving its case pattern
    pub fn correct_word(&self, word: &str) -> String {
        if !Self::is_correctable(word) {
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if self.dictionary.contains(&lower) {
            return word.to_string();
        }

        match self.best_candidate(&lower) {
            Some(candidate) => restore_case(word, &candidate),
            None => word.to_string(),
        }
    }

    /// Only multi-letter ASCII words are candidates for correction
    fn is_correctable(word: &str) -> bool {
        word.chars().count() > 1 && word.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn best_candidate(&self, lower: &str) -> Option<String> {
        let first = edits1(lower);
        if let Some(best) = self.most_frequent(first.iter().map(String::as_str)) {
            return Some(best.to_string());
        }

        if self.max_edit_distance < 2 {
            return None;
        }

        let second: Vec<String> = first
            .iter()
            .flat_map(|edit| edits1(edit))
            .filter(|edit| self.dictionary.contains(edit))
            .collect();
        self.most_frequent(second.iter().map(String::as_str))
            .map(str::to_string)
    }

    /// Highest frequency known word; ties go to the lexicographically smallest
    fn most_frequent<'a>(&self, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
        candidates
            .filter_map(|word| {
                let frequency = self.dictionary.frequency(word);
                (frequency > 0).then_some((word, frequency))
            })
            .max_by(|(a, fa), (b, fb)| fa.cmp(fb).then_with(|| b.cmp(a)))
            .map(|(word, _)| word)
    }
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self::english()
    }
}

impl TextCorrector for SpellingCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectionError> {
        let regex = token_regex()?;
        let mut corrected = String::with_capacity(text.len());
        let mut changed = 0usize;

        for token in regex.find_iter(text).map(|m| m.as_str()) {
            if token.chars().any(char::is_alphanumeric) {
                let word = self.correct_word(token);
                if word != token {
                    changed += 1;
                }
                corrected.push_str(&word);
            } else {
                corrected.push_str(token);
            }
        }

        log::debug!("Spelling corrector changed {changed} word(s)");
        Ok(corrected)
    }

    fn name(&self) -> &str {
        "spelling"
    }
}

fn restore_case(original: &str, candidate: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);

    if first_upper && chars.all(char::is_uppercase) {
        candidate.to_uppercase()
    } else if first_upper {
        let mut out = String::with_capacity(candidate.len());
        let mut rest = candidate.chars();
        if let Some(c) = rest.next() {
            out.extend(c.to_uppercase());
        }
        out.extend(rest);
        out
    } else {
        candidate.to_string()
    }
}
