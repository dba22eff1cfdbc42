//! Word and sentence tokenization
//!
//! Words are whitespace-delimited tokens with surrounding ASCII punctuation
//! removed. Sentence tokenization is delegated to a [`SentenceTokenizer`],
//! normally the rule-based [`SentenceSegmenter`](crate::SentenceSegmenter).

use std::str::SplitWhitespace;

/// Anything that can split text into sentences
pub trait SentenceTokenizer: Send + Sync {
    /// Split `text` into trimmed, non-empty sentences in document order
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of sentences in `text`
    fn sentence_count(&self, text: &str) -> usize {
        self.sentences(text).len()
    }
}

/// Strip leading and trailing ASCII punctuation from a raw token
#[inline]
pub fn preprocess_word(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Lazily tokenize `text` into words
///
/// The iterator borrows from `text` and can only be consumed once.
pub fn words(text: &str) -> Words<'_> {
    Words {
        tokens: text.split_whitespace(),
    }
}

/// Iterator over the words of a text, see [`words`]
#[derive(Debug)]
pub struct Words<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens
            .by_ref()
            .map(preprocess_word)
            .find(|word| !word.is_empty())
    }
}
