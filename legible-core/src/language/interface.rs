//! Public contract for sentence boundary rules
//!
//! The segmenter finds candidate boundaries (a run of terminators, optional
//! closing quotes or brackets, then whitespace or end of text) and asks a
//! [`LanguageRules`] implementation whether each candidate really ends a
//! sentence.

/// What a quote or bracket character does
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnclosureRole {
    Open,
    Close,
    /// Straight quotes, or a character configured both ways
    Both,
}

/// Decision about a candidate boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundaryDecision {
    /// The candidate ends a sentence
    Accept,
    /// Not a boundary
    Reject,
}

/// A candidate sentence boundary found by the segmenter
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Full text being segmented
    pub text: &'a str,
    /// Byte offset of the first terminator in the run
    pub start: usize,
    /// Byte offset one past the terminator run and any closing enclosures
    pub end: usize,
    /// The terminator run itself, e.g. `"."`, `"?!"`, `"..."`
    pub terminators: &'a str,
    /// The whitespace-delimited token following the candidate, if any
    pub next_word: Option<&'a str>,
}

impl<'a> Candidate<'a> {
    /// Whether the candidate sits at the end of the text
    #[inline]
    pub fn at_end(&self) -> bool {
        self.next_word.is_none()
    }

    /// The following token with leading quotes/brackets removed
    pub fn next_word_core(&self) -> Option<&'a str> {
        self.next_word
            .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
    }

    /// Whether the following token starts with an uppercase letter
    pub fn next_is_capitalized(&self) -> bool {
        self.next_word_core()
            .and_then(|word| word.chars().next())
            .is_some_and(char::is_uppercase)
    }
}

/// Language-specific rules for sentence boundary detection
pub trait LanguageRules: Send + Sync + 'static {
    /// Language code, e.g. `"en"`
    fn code(&self) -> &str;

    /// Human-readable language name
    fn name(&self) -> &str;

    fn is_terminator_char(&self, ch: char) -> bool;

    /// `None` if `ch` is not a configured quote or bracket
    fn enclosure_role(&self, ch: char) -> Option<EnclosureRole>;

    /// Does an abbreviation end right before the dot at byte `dot_pos`?
    fn is_abbreviation(&self, text: &str, dot_pos: usize) -> bool;

    /// Is `word` a token that typically opens a new sentence?
    fn is_sentence_starter(&self, word: &str) -> bool;

    /// Accept or reject a candidate boundary
    fn boundary_decision(&self, candidate: &Candidate<'_>) -> BoundaryDecision;

    /// May `ch` trail a terminator as a closing quote or bracket?
    #[inline]
    fn is_closing(&self, ch: char) -> bool {
        matches!(
            self.enclosure_role(ch),
            Some(EnclosureRole::Close | EnclosureRole::Both)
        )
    }
}
