//! Regex-based tokenizer implementation.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KeywordDensityError, Result};

/// Whole words made only of ASCII lowercase letters.
///
/// Boundaries are ASCII word boundaries. A run glued to a digit or an
/// underscore yields nothing (`"test123"`), while non-ASCII letters act as
/// separators: `"café"` produces `caf` and `"test@123"` produces `test`.
pub const ALPHABETIC_WORD_PATTERN: &str = r"(?-u:\b)[a-z]+(?-u:\b)";

static ALPHABETIC_WORD_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(ALPHABETIC_WORD_PATTERN).expect("alphabetic word pattern is valid"))
});

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// The input is lowercased before matching, so the default pattern sees
/// `"Python"` and `"PYTHON"` as `python`.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer that extracts lowercase alphabetic words.
    pub fn new() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&ALPHABETIC_WORD_REGEX),
        }
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| KeywordDensityError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let text = text.to_lowercase();

        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
