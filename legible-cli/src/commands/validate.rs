//! Validate command implementation

use anyhow::Result;
use clap::Args;
use legible_core::{ConfigurableLanguageRules, LanguageRules};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the segmentation rules file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating segmentation rules: {}", self.rules.display());

        match ConfigurableLanguageRules::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                println!("  Abbreviations: {}", rules.abbreviation_count());
                println!("  Sentence starters: {}", rules.sentence_starter_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                anyhow::bail!("Validation failed: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_rules() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "test"
name = "Test Language"

[terminators]
chars = ["."]

[abbreviations]
common = ["etc"]
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[metadata]\ncode = \"\"\n").unwrap();

        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            rules: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
