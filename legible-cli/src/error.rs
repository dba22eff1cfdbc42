//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No file matched the given patterns
    #[error("No files found matching: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Some inputs could not be analyzed
    #[error("{failed} of {total} input(s) could not be analyzed")]
    AnalysisFailed {
        /// Number of failed inputs
        failed: usize,
        /// Number of inputs
        total: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("*.txt".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_analysis_failed_display() {
        let error = CliError::AnalysisFailed { failed: 1, total: 3 };
        assert_eq!(error.to_string(), "1 of 3 input(s) could not be analyzed");
    }

    #[test]
    fn test_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad port".into()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }
}
