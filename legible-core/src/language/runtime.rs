//! Rule tables behind the [`LanguageRules`] trait
//!
//! Built from a parsed [`RuleSet`].

use crate::error::{CoreError, Result};
use crate::language::{
    config::RuleSet,
    interface::{BoundaryDecision, Candidate, EnclosureRole, LanguageRules},
    tables::{AbbreviationTrie, EllipsisMatcher, EnclosureTable, StarterSet, TerminatorSet},
};
use std::path::Path;

/// Language rules loaded from a TOML rule file
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageRules {
    code: String,
    name: String,
    terminators: TerminatorSet,
    enclosures: EnclosureTable,
    abbreviations: AbbreviationTrie,
    ellipsis: EllipsisMatcher,
    starters: StarterSet,
}

impl ConfigurableLanguageRules {
    /// Validate a rule set and build its lookup tables
    pub fn from_config(rules: &RuleSet) -> Result<Self> {
        rules.validate().map_err(CoreError::InvalidRules)?;

        Ok(Self {
            code: rules.metadata.code.clone(),
            name: rules.metadata.name.clone(),
            terminators: TerminatorSet::new(rules.terminators.chars.iter().copied()),
            enclosures: EnclosureTable::new(
                rules
                    .enclosures
                    .pairs
                    .iter()
                    .map(|pair| (pair.open, pair.close, pair.symmetric)),
            ),
            // abbreviations match regardless of case
            abbreviations: AbbreviationTrie::from_words(rules.abbreviations.words(), false),
            ellipsis: EllipsisMatcher::new(
                rules.ellipsis.patterns.clone(),
                rules.ellipsis.treat_as_boundary,
            ),
            starters: StarterSet::from_words(rules.sentence_starters.words()),
        })
    }

    /// Parse and build rules from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let rules: RuleSet =
            toml::from_str(toml_str).map_err(|e| CoreError::InvalidRules(e.to_string()))?;
        Self::from_config(&rules)
    }

    /// Load rules from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Number of abbreviations known to the rules (prefixes included)
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Number of sentence starters known to the rules
    pub fn sentence_starter_count(&self) -> usize {
        self.starters.len()
    }

    /// Single uppercase letter immediately before the dot, e.g. `J.` in `J. Smith`
    fn is_initial(text: &str, dot_pos: usize) -> bool {
        let mut rev = text[..dot_pos].chars().rev();
        match (rev.next(), rev.next()) {
            (Some(letter), prev) => {
                letter.is_uppercase() && prev.map_or(true, |p| !p.is_alphanumeric())
            }
            _ => false,
        }
    }
}

impl LanguageRules for ConfigurableLanguageRules {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_terminator_char(&self, ch: char) -> bool {
        self.terminators.contains(ch)
    }

    #[inline]
    fn enclosure_role(&self, ch: char) -> Option<EnclosureRole> {
        self.enclosures.role(ch)
    }

    fn is_abbreviation(&self, text: &str, dot_pos: usize) -> bool {
        self.abbreviations.find_abbrev(text, dot_pos)
    }

    fn is_sentence_starter(&self, word: &str) -> bool {
        self.starters.contains(word)
    }

    fn boundary_decision(&self, candidate: &Candidate<'_>) -> BoundaryDecision {
        let run = candidate.terminators;

        // `"Stop!" she said` continues the sentence; otherwise `!` and `?` end it
        if run.contains(['!', '?']) {
            let quoted = candidate.start + run.len() < candidate.end;
            return if quoted && !candidate.at_end() && !candidate.next_is_capitalized() {
                BoundaryDecision::Reject
            } else {
                BoundaryDecision::Accept
            };
        }

        if self.ellipsis.matches(run) {
            let ends_sentence = self.ellipsis.ends_sentences()
                && (candidate.at_end() || candidate.next_is_capitalized());
            return if ends_sentence {
                BoundaryDecision::Accept
            } else {
                BoundaryDecision::Reject
            };
        }

        if run != "." || candidate.at_end() {
            return BoundaryDecision::Accept;
        }

        let next_is_starter = candidate
            .next_word_core()
            .is_some_and(|word| self.is_sentence_starter(word));

        if self.is_abbreviation(candidate.text, candidate.start) {
            return if next_is_starter {
                BoundaryDecision::Accept
            } else {
                BoundaryDecision::Reject
            };
        }

        if Self::is_initial(candidate.text, candidate.start)
            && candidate.next_is_capitalized()
            && !next_is_starter
        {
            return BoundaryDecision::Reject;
        }

        BoundaryDecision::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = [".", "!", "?", "…"]

[ellipsis]
treat_as_boundary = true
patterns = ["...", "…"]

[enclosures]
pairs = [
    { open = "(", close = ")" },
    { open = '"', close = '"', symmetric = true },
]

[abbreviations]
titles = ["Dr", "Mr"]
geographic = ["U.S"]

[sentence_starters]
pronouns = ["He", "She", "The"]
"#;

    fn rules() -> ConfigurableLanguageRules {
        ConfigurableLanguageRules::from_toml_str(RULES).unwrap()
    }

    /// Decide the first terminator run that is followed by whitespace or end of text
    fn decide(text: &str) -> BoundaryDecision {
        let rules = rules();
        let mut start = None;
        for (i, c) in text.char_indices() {
            if !rules.is_terminator_char(c) {
                start = None;
                continue;
            }
            let s = *start.get_or_insert(i);
            let end = i + c.len_utf8();
            let boundary = text[end..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);
            if boundary {
                let candidate = Candidate {
                    text,
                    start: s,
                    end,
                    terminators: &text[s..end],
                    next_word: text[end..].split_whitespace().next(),
                };
                return rules.boundary_decision(&candidate);
            }
        }
        panic!("no candidate in {text:?}");
    }

    #[test]
    fn test_metadata() {
        let rules = rules();
        assert_eq!(rules.code(), "en");
        assert_eq!(rules.name(), "English");
        assert_eq!(rules.abbreviation_count(), 4);
        assert_eq!(rules.sentence_starter_count(), 3);
    }

    #[test]
    fn test_plain_period_accepts() {
        assert_eq!(decide("It rained. Then"), BoundaryDecision::Accept);
        assert_eq!(decide("It rained. then"), BoundaryDecision::Accept);
    }

    #[test]
    fn test_abbreviation_rejects() {
        assert_eq!(decide("Dr. Smith"), BoundaryDecision::Reject);
        assert_eq!(decide("with Mr. Jones"), BoundaryDecision::Reject);
    }

    #[test]
    fn test_abbreviation_before_starter_accepts() {
        assert_eq!(decide("in the U.S. He"), BoundaryDecision::Accept);
    }

    #[test]
    fn test_abbreviation_at_end_accepts() {
        assert_eq!(decide("Ask the Dr."), BoundaryDecision::Accept);
    }

    #[test]
    fn test_initials() {
        assert_eq!(decide("J. Smith"), BoundaryDecision::Reject);
        assert_eq!(decide("plan B. The"), BoundaryDecision::Accept);
        assert_eq!(decide("vitamin B. it"), BoundaryDecision::Accept);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(decide("Wait... what"), BoundaryDecision::Reject);
        assert_eq!(decide("Wait... What"), BoundaryDecision::Accept);
        assert_eq!(decide("Wait… What"), BoundaryDecision::Accept);
        assert_eq!(decide("Wait..."), BoundaryDecision::Accept);
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(decide("Really?! yes"), BoundaryDecision::Accept);
        assert_eq!(decide("Dr! x"), BoundaryDecision::Accept);
    }

    #[test]
    fn test_quoted_exclamation() {
        let rules = rules();
        let text = "\"Stop!\" she said";
        let candidate = Candidate {
            text,
            start: 5,
            end: 7,
            terminators: "!",
            next_word: Some("she"),
        };
        assert_eq!(rules.boundary_decision(&candidate), BoundaryDecision::Reject);

        let candidate = Candidate {
            next_word: Some("She"),
            ..candidate
        };
        assert_eq!(rules.boundary_decision(&candidate), BoundaryDecision::Accept);
    }

    #[test]
    fn test_ellipsis_boundary_disabled() {
        let toml_str = RULES.replace("treat_as_boundary = true", "treat_as_boundary = false");
        let rules = ConfigurableLanguageRules::from_toml_str(&toml_str).unwrap();
        let text = "Wait... What";
        let candidate = Candidate {
            text,
            start: 4,
            end: 7,
            terminators: "...",
            next_word: Some("What"),
        };
        assert_eq!(rules.boundary_decision(&candidate), BoundaryDecision::Reject);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ConfigurableLanguageRules::from_toml_str("not = [valid").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRules(_)));
    }

    #[test]
    fn test_closing_enclosures() {
        let rules = rules();
        assert!(rules.is_closing(')'));
        assert!(rules.is_closing('"'));
        assert!(!rules.is_closing('('));
    }
}
