//! Word frequency dictionary

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};

/// Embedded English frequency list
const BUILTIN_ENGLISH: &str = include_str!("../../data/en_frequency.txt");

static BUILTIN: OnceLock<Arc<SpellingDictionary>> = OnceLock::new();

/// Words (lowercase) and their frequencies
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: HashMap<String, u64>,
    total_count: u64,
}

impl SpellingDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English dictionary, parsed once per process
    pub fn builtin() -> Arc<SpellingDictionary> {
        BUILTIN
            .get_or_init(|| match Self::from_frequency_list(BUILTIN_ENGLISH) {
                Ok(dictionary) => {
                    log::debug!("Loaded built-in dictionary with {} words", dictionary.len());
                    Arc::new(dictionary)
                }
                Err(e) => {
                    log::error!("Built-in dictionary is malformed: {e}");
                    Arc::new(Self::new())
                }
            })
            .clone()
    }

    /// Parse a `word count` per line list
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_frequency_list(content: &str) -> Result<Self> {
        let mut dictionary = Self::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = |reason: &str| CoreError::Dictionary {
                line: idx + 1,
                reason: reason.to_string(),
            };

            let mut parts = line.split_whitespace();
            let word = parts.next().ok_or_else(|| invalid("missing word"))?;
            let count = parts
                .next()
                .ok_or_else(|| invalid("missing frequency"))?
                .parse::<u64>()
                .map_err(|e| invalid(&format!("bad frequency: {e}")))?;
            if parts.next().is_some() {
                return Err(invalid("expected `word count`"));
            }

            dictionary.add_word(word, count);
        }

        Ok(dictionary)
    }

    /// Load a frequency list from a file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_frequency_list(&content)
    }

    /// Add a word, replacing any previous frequency
    pub fn add_word(&mut self, word: &str, frequency: u64) {
        let old = self.words.insert(word.to_lowercase(), frequency).unwrap_or(0);
        self.total_count = self.total_count.saturating_sub(old).saturating_add(frequency);
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Frequency of a word, 0 if unknown
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all frequencies, saturating at `u64::MAX`
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }
}
