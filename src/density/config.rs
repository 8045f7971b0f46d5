//! Configuration for keyword density analysis.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::error::{KeywordDensityError, Result};

/// Minimum occurrences for a keyword or stop word to be reported.
pub const DEFAULT_MIN_COUNT: usize = 2;

/// Minimum density (percent) for a keyword or stop word to be reported.
pub const DEFAULT_MIN_DENSITY: f64 = 0.8;

/// Minimum occurrences for a phrase to be reported.
pub const DEFAULT_MIN_PHRASE_COUNT: usize = 2;

/// How far above its Zipf expectation a count must be to be flagged.
///
/// A word is over-frequent when `count > factor * expected(rank)`. At 1.5 the
/// top word of a corpus can only be flagged once there are at least three
/// distinct meaningful words, since with n words the top word's ratio is at
/// most H(n).
pub const DEFAULT_OVER_FREQUENCY_FACTOR: f64 = 1.5;

/// Words seen fewer times than this are never flagged as over-frequent.
pub const DEFAULT_MIN_OVER_FREQUENT_COUNT: usize = 2;

/// Ceiling on input length, in characters, enforced at the request boundary.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 50_000;

/// Configuration for [`TextAnalyzer`](crate::density::TextAnalyzer).
///
/// Every field has a default, so a JSON file only needs the values it changes:
///
/// ```
/// use keyword_density::density::AnalyzerConfig;
///
/// let config = AnalyzerConfig::from_json(r#"{ "min_density": 1.5 }"#).unwrap();
/// assert_eq!(config.min_density, 1.5);
/// assert_eq!(config.min_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language whose stemmer and stop words are used.
    pub language: Language,
    /// Minimum occurrences for single keywords and stop words.
    pub min_count: usize,
    /// Minimum density (percent) for single keywords and stop words.
    pub min_density: f64,
    /// Minimum occurrences for phrases.
    pub min_phrase_count: usize,
    /// Multiplicative margin over the Zipf expectation.
    pub over_frequency_factor: f64,
    /// Minimum occurrences before a word can be flagged as over-frequent.
    pub min_over_frequent_count: usize,
    /// Maximum accepted input length in characters.
    pub max_input_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            min_count: DEFAULT_MIN_COUNT,
            min_density: DEFAULT_MIN_DENSITY,
            min_phrase_count: DEFAULT_MIN_PHRASE_COUNT,
            over_frequency_factor: DEFAULT_OVER_FREQUENCY_FACTOR,
            min_over_frequent_count: DEFAULT_MIN_OVER_FREQUENT_COUNT,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded analyzer config from {}", path.as_ref().display());
        Self::from_json(&content)
    }

    /// Check that values are in range.
    pub fn validate(&self) -> Result<()> {
        if !self.min_density.is_finite() || self.min_density < 0.0 {
            return Err(KeywordDensityError::invalid_config(format!(
                "min_density must be a non-negative number, got {}",
                self.min_density
            )));
        }

        // Below 1.0 the top word of a perfectly Zipfian text would be flagged.
        if !self.over_frequency_factor.is_finite() || self.over_frequency_factor < 1.0 {
            return Err(KeywordDensityError::invalid_config(format!(
                "over_frequency_factor must be >= 1.0, got {}",
                self.over_frequency_factor
            )));
        }

        if self.max_input_chars == 0 {
            return Err(KeywordDensityError::invalid_config(
                "max_input_chars must be greater than 0",
            ));
        }

        Ok(())
    }
}
