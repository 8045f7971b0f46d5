//! Error types for the keyword-density library.
//!
//! The analysis pipeline itself never fails: every string, including the empty
//! string, produces a result. Errors only show up at the edges, when a caller
//! asks for a language that has no profile, hands in a body that exceeds the
//! input ceiling, supplies a broken tokenizer pattern, or loads a bad
//! configuration file.
//!
//! # Examples
//!
//! ```
//! use keyword_density::error::{KeywordDensityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KeywordDensityError::unsupported_language("klingon"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for keyword-density operations.
#[derive(Error, Debug)]
pub enum KeywordDensityError {
    /// I/O errors (reading input files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid tokenizer pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// No language profile is registered under the requested name
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Input text exceeds the configured character ceiling
    #[error("Input too large: {chars} characters (limit {limit})")]
    InputTooLarge { chars: usize, limit: usize },

    /// Configuration values are out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying context from the edges (CLI input handling)
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KeywordDensityError.
pub type Result<T> = std::result::Result<T, KeywordDensityError>;

impl KeywordDensityError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KeywordDensityError::Analysis(msg.into())
    }

    /// Create a new unsupported-language error.
    pub fn unsupported_language<S: Into<String>>(name: S) -> Self {
        KeywordDensityError::UnsupportedLanguage(name.into())
    }

    /// Create a new input-too-large error.
    pub fn input_too_large(chars: usize, limit: usize) -> Self {
        KeywordDensityError::InputTooLarge { chars, limit }
    }

    /// Create a new invalid-configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        KeywordDensityError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = KeywordDensityError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = KeywordDensityError::unsupported_language("klingon");
        assert_eq!(error.to_string(), "Unsupported language: klingon");

        let error = KeywordDensityError::input_too_large(60_000, 50_000);
        assert_eq!(
            error.to_string(),
            "Input too large: 60000 characters (limit 50000)"
        );

        let error = KeywordDensityError::invalid_config("min_density must be >= 0");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: min_density must be >= 0"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = KeywordDensityError::from(io_error);

        match error {
            KeywordDensityError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_anyhow_keeps_context() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = KeywordDensityError::from(
            anyhow::Error::new(io_error).context("Failed to read input file notes.txt"),
        );

        assert!(matches!(error, KeywordDensityError::Anyhow(_)));
        assert_eq!(
            error.to_string(),
            "Failed to read input file notes.txt: File not found"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = KeywordDensityError::from(json_error);
        assert!(matches!(error, KeywordDensityError::Json(_)));
    }
}
