//! The `{ "text": ... }` request body accepted by front ends.

use serde::{Deserialize, Serialize};

use crate::error::{KeywordDensityError, Result};

/// A request to analyze one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new<S: Into<String>>(text: S) -> Self {
        AnalyzeRequest { text: text.into() }
    }

    /// Parse a JSON request body. A missing or non-string `text` is an error.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Reject texts longer than `max_chars` characters.
    ///
    /// Empty text is valid and analyzes to the empty result.
    pub fn validate(&self, max_chars: usize) -> Result<()> {
        let chars = self.char_count();
        if chars > max_chars {
            log::warn!("Rejecting request: {chars} characters exceeds limit of {max_chars}");
            return Err(KeywordDensityError::input_too_large(chars, max_chars));
        }
        Ok(())
    }
}
