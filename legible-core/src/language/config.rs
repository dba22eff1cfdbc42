//! TOML schema for segmentation rule files
//!
//! ```toml
//! [metadata]
//! code = "en"
//! name = "English"
//!
//! [terminators]
//! chars = [".", "!", "?"]
//!
//! [abbreviations]
//! titles = ["Dr", "Mr"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on `[enclosures] pairs`
pub const MAX_ENCLOSURE_PAIRS: usize = 255;

/// A parsed rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    pub metadata: RuleMetadata,
    pub terminators: TerminatorRules,
    #[serde(default)]
    pub ellipsis: EllipsisRules,
    #[serde(default)]
    pub enclosures: EnclosureRules,
    /// Words whose trailing dot does not end a sentence, by category
    #[serde(default)]
    pub abbreviations: WordLists,
    /// Capitalised words that open a sentence after an abbreviation, by category
    #[serde(default)]
    pub sentence_starters: WordLists,
}

/// `[metadata]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub code: String,
    pub name: String,
}

/// `[terminators]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminatorRules {
    pub chars: Vec<char>,
}

/// `[ellipsis]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EllipsisRules {
    /// An ellipsis before a capitalised word (or the end of text) ends the sentence
    #[serde(default = "EllipsisRules::default_boundary")]
    pub treat_as_boundary: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl EllipsisRules {
    fn default_boundary() -> bool {
        true
    }
}

impl Default for EllipsisRules {
    fn default() -> Self {
        Self {
            treat_as_boundary: true,
            patterns: vec!["...".to_string()],
        }
    }
}

/// `[enclosures]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnclosureRules {
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

/// An opening/closing pair; `symmetric` marks straight quotes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
    #[serde(default)]
    pub symmetric: bool,
}

/// Word lists keyed by free-form category name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordLists(HashMap<String, Vec<String>>);

impl WordLists {
    /// Every listed word, categories in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    /// Number of listed words, duplicates included
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Whether no words are listed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Words of one category
    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }
}

impl RuleSet {
    /// Check constraints the schema alone cannot express
    pub(crate) fn validate(&self) -> Result<(), String> {
        let terminators = &self.terminators.chars;
        if terminators.is_empty() {
            return Err("at least one terminator character is required".to_string());
        }

        if self.enclosures.pairs.len() > MAX_ENCLOSURE_PAIRS {
            return Err(format!(
                "{} enclosure pairs given, at most {MAX_ENCLOSURE_PAIRS} allowed",
                self.enclosures.pairs.len()
            ));
        }

        if let Some(ch) = self
            .enclosures
            .pairs
            .iter()
            .flat_map(|pair| [pair.open, pair.close])
            .find(|ch| terminators.contains(ch))
        {
            return Err(format!("'{ch}' is both an enclosure and a terminator"));
        }

        if self.ellipsis.patterns.iter().any(String::is_empty) {
            return Err("ellipsis patterns must not be empty".to_string());
        }

        Ok(())
    }
}
