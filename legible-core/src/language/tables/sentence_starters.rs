//! Words that open a sentence
//!
//! After an abbreviation, a following word from this set ("The", "He", ...)
//! means the abbreviation's dot also ends the sentence.

use std::collections::HashSet;

/// Case-sensitive set of sentence starters
#[derive(Debug, Clone, Default)]
pub struct StarterSet {
    words: HashSet<String>,
    longest: usize,
}

impl StarterSet {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words: HashSet<String> = words.into_iter().map(str::to_string).collect();
        let longest = words.iter().map(String::len).max().unwrap_or(0);
        Self { words, longest }
    }

    /// Trailing ASCII punctuation is ignored, so `"However,"` matches `"However"`
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
        !word.is_empty() && word.len() <= self.longest && self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
