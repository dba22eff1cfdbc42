//! Text correction collaborator
//!
//! The analysis pipeline treats correction as an opaque `text -> text`
//! transform. Implementations must be shareable across threads.

use thiserror::Error;

/// Errors reported by a [`TextCorrector`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrectionError {
    /// The corrector did not finish within its time budget
    #[error("correction timed out after {millis} ms")]
    TimedOut {
        /// Budget that elapsed, in milliseconds
        millis: u64,
    },

    /// The corrector failed for any other reason
    #[error("{0}")]
    Failed(String),
}

/// Pluggable text corrector
pub trait TextCorrector: Send + Sync {
    /// Return a corrected version of `text`
    fn correct(&self, text: &str) -> Result<String, CorrectionError>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}

/// Corrector that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCorrector;

impl TextCorrector for IdentityCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectionError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_input() {
        let corrector = IdentityCorrector;
        assert_eq!(corrector.correct("Teh text  stays.").unwrap(), "Teh text  stays.");
        assert_eq!(corrector.name(), "none");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CorrectionError::TimedOut { millis: 250 }.to_string(),
            "correction timed out after 250 ms"
        );
        assert_eq!(
            CorrectionError::Failed("backend unavailable".into()).to_string(),
            "backend unavailable"
        );
    }

    #[test]
    fn test_trait_object() {
        let corrector: Box<dyn TextCorrector> = Box::new(IdentityCorrector);
        assert_eq!(corrector.correct("x").unwrap(), "x");
    }
}
