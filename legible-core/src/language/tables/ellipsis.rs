//! Ellipsis recognition

/// Recognises terminator runs that form an ellipsis
#[derive(Debug, Clone)]
pub struct EllipsisMatcher {
    patterns: Vec<String>,
    ends_sentences: bool,
}

impl EllipsisMatcher {
    pub fn new(patterns: Vec<String>, ends_sentences: bool) -> Self {
        Self {
            patterns,
            ends_sentences,
        }
    }

    /// Does this terminator run end in an ellipsis?
    ///
    /// Any run of two or more dots counts, so `".."` and `"...."` behave like
    /// `"..."`.
    pub fn matches(&self, run: &str) -> bool {
        (run.len() >= 2 && run.bytes().all(|b| b == b'.'))
            || self.patterns.iter().any(|p| run.ends_with(p.as_str()))
    }

    /// Whether an ellipsis may end a sentence at all
    pub fn ends_sentences(&self) -> bool {
        self.ends_sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs() {
        let matcher = EllipsisMatcher::new(vec!["...".to_string(), "…".to_string()], true);

        for run in ["...", "..", ".....", "…", "?…"] {
            assert!(matcher.matches(run), "{run}");
        }
        for run in [".", "?", "!?"] {
            assert!(!matcher.matches(run), "{run}");
        }
        assert!(matcher.ends_sentences());
    }

    #[test]
    fn test_no_patterns() {
        let matcher = EllipsisMatcher::new(Vec::new(), false);
        assert!(matcher.matches(".."));
        assert!(!matcher.matches("…"));
        assert!(!matcher.ends_sentences());
    }
}
