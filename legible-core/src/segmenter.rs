//! Rule-based sentence segmentation
//!
//! The segmenter scans the text once. Every run of terminator characters,
//! optionally followed by closing quotes or brackets, that is followed by
//! whitespace or the end of the text becomes a [`Candidate`]. The language
//! rules then accept or reject it.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::language::{
    get_rules, BoundaryDecision, Candidate, ConfigurableLanguageRules, LanguageRules,
};
use crate::tokenizer::SentenceTokenizer;

/// Sentence segmenter driven by [`LanguageRules`]
#[derive(Clone)]
pub struct SentenceSegmenter {
    rules: Arc<dyn LanguageRules>,
}

impl std::fmt::Debug for SentenceSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceSegmenter")
            .field("language", &self.rules.code())
            .finish()
    }
}

impl SentenceSegmenter {
    /// Create a segmenter from shared rules
    pub fn new(rules: Arc<dyn LanguageRules>) -> Self {
        Self { rules }
    }

    /// Segmenter using the embedded English rules
    pub fn english() -> Result<Self> {
        Self::for_language("en")
    }

    /// Segmenter using embedded rules for `code`
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(get_rules(code)?))
    }

    /// Segmenter using rules loaded from a TOML file
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        let rules = ConfigurableLanguageRules::from_file(path)?;
        Ok(Self::new(Arc::new(rules)))
    }

    /// The rules in use
    pub fn rules(&self) -> &dyn LanguageRules {
        self.rules.as_ref()
    }

    /// Byte offsets one past each accepted sentence boundary
    pub fn boundaries(&self, text: &str) -> Vec<usize> {
        let rules = self.rules.as_ref();
        let mut boundaries = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            if !rules.is_terminator_char(ch) {
                continue;
            }

            let mut term_end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !rules.is_terminator_char(next) {
                    break;
                }
                term_end = idx + next.len_utf8();
                chars.next();
            }

            let mut end = term_end;
            while let Some(&(idx, next)) = chars.peek() {
                if !rules.is_closing(next) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            let rest = &text[end..];
            if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
                continue;
            }

            let candidate = Candidate {
                text,
                start,
                end,
                terminators: &text[start..term_end],
                next_word: rest.split_whitespace().next(),
            };

            if rules.boundary_decision(&candidate) == BoundaryDecision::Accept {
                boundaries.push(end);
            }
        }

        boundaries
    }
}

impl SentenceTokenizer for SentenceSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut last = 0;

        for end in self.boundaries(text) {
            let sentence = text[last..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            last = end;
        }

        let tail = text[last..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        SentenceSegmenter::english().unwrap().sentences(text)
    }

    #[test]
    fn test_simple_sentences() {
        assert_eq!(
            split("Hello world. This is a test."),
            vec!["Hello world.", "This is a test."]
        );
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        assert_eq!(split("just some words"), vec!["just some words"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(split("").is_empty());
        assert!(split("   \n\t").is_empty());
    }

    #[test]
    fn test_title_abbreviation() {
        assert_eq!(
            split("Dr. Smith arrived. He sat down."),
            vec!["Dr. Smith arrived.", "He sat down."]
        );
    }

    #[test]
    fn test_abbreviation_followed_by_starter() {
        assert_eq!(
            split("She moved to the U.S. The weather was better."),
            vec!["She moved to the U.S.", "The weather was better."]
        );
    }

    #[test]
    fn test_latin_abbreviation_mid_sentence() {
        assert_eq!(split("Bring fruit, e.g. apples and pears."), vec![
            "Bring fruit, e.g. apples and pears."
        ]);
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(
            split("It cost 5.50 dollars. Fine."),
            vec!["It cost 5.50 dollars.", "Fine."]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(
            split("Is it done? Yes! Great."),
            vec!["Is it done?", "Yes!", "Great."]
        );
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(split("Wait... what happened?"), vec!["Wait... what happened?"]);
        assert_eq!(split("Wait... Nothing."), vec!["Wait...", "Nothing."]);
    }

    #[test]
    fn test_closing_quotes_and_brackets() {
        assert_eq!(
            split("He said \"go home.\" Then he left. (It was late.) Bye."),
            vec![
                "He said \"go home.\"",
                "Then he left.",
                "(It was late.)",
                "Bye."
            ]
        );
    }

    #[test]
    fn test_quoted_exclamation_continues() {
        assert_eq!(
            split("\"Stop!\" she said. Nobody did."),
            vec!["\"Stop!\" she said.", "Nobody did."]
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(
            split("The author J. Smith wrote it."),
            vec!["The author J. Smith wrote it."]
        );
    }

    #[test]
    fn test_trailing_fragment() {
        assert_eq!(
            split("First one. and a fragment"),
            vec!["First one.", "and a fragment"]
        );
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            split("Café au lait… Très bon. Merci!"),
            vec!["Café au lait…", "Très bon.", "Merci!"]
        );
    }

    #[test]
    fn test_sentence_count() {
        let segmenter = SentenceSegmenter::english().unwrap();
        assert_eq!(segmenter.sentence_count("One. Two. Three."), 3);
    }

    #[test]
    fn test_custom_rules_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(
            &path,
            "[metadata]\ncode = \"x\"\nname = \"Semicolons\"\n\n[terminators]\nchars = [\";\"]\n",
        )
        .unwrap();

        let segmenter = SentenceSegmenter::from_rules_file(&path).unwrap();
        assert_eq!(segmenter.rules().name(), "Semicolons");
        assert_eq!(segmenter.sentences("a; b. c"), vec!["a;", "b. c"]);
    }
}
