//! The keyword density analyzer.
//!
//! [`TextAnalyzer`] runs the four stages in order for each text:
//!
//! ```text
//! Raw Text → Tokenizer → Classifier → Aggregator → Scorer → AnalysisResult
//!                          ↑
//!                   LanguageProfile
//!             (stemmer + stop words)
//! ```
//!
//! An analyzer holds only read-only state, so one instance can serve any
//! number of threads.
//!
//! # Examples
//!
//! ```
//! use keyword_density::density::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let result = analyzer.analyze("apple banana apple orange apple banana");
//!
//! assert_eq!(result.total_words, 6);
//! let apple = result.keyword("apple").unwrap();
//! assert_eq!(apple.times_used, 3);
//! assert_eq!(apple.density, 50.0);
//! ```

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::language::{self, Language, LanguageProfile};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::density::aggregate::aggregate;
use crate::density::classify::classify;
use crate::density::config::AnalyzerConfig;
use crate::density::request::AnalyzeRequest;
use crate::density::result::AnalysisResult;
use crate::density::score::score;
use crate::error::Result;

/// Computes keyword density, phrase frequency and over-frequency flags.
#[derive(Clone)]
pub struct TextAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    profile: Arc<dyn LanguageProfile>,
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    /// An English analyzer with default thresholds.
    pub fn new() -> Self {
        Self::from_config(AnalyzerConfig::default())
    }

    /// An analyzer for a built-in language with default thresholds.
    pub fn for_language(language: Language) -> Self {
        Self::from_config(AnalyzerConfig {
            language,
            ..AnalyzerConfig::default()
        })
    }

    /// An analyzer using the language and thresholds of `config`.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        TextAnalyzer {
            tokenizer: Arc::new(RegexTokenizer::new()),
            profile: language::profile(config.language),
            config,
        }
    }

    /// An analyzer with an injected language profile and default thresholds.
    pub fn with_profile(profile: Arc<dyn LanguageProfile>) -> Self {
        TextAnalyzer {
            tokenizer: Arc::new(RegexTokenizer::new()),
            profile,
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the thresholds. The language profile is left unchanged.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn profile(&self) -> &Arc<dyn LanguageProfile> {
        &self.profile
    }

    /// Analyze one text.
    ///
    /// Never fails: text without any word yields [`AnalysisResult::empty`].
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let classified = classify(self.tokenizer.tokenize(text), self.profile.as_ref());
        if classified.tokens.is_empty() {
            log::debug!("No words found in {} bytes of input", text.len());
            return AnalysisResult::empty();
        }

        let frequencies = aggregate(&classified.tokens);
        log::trace!(
            "Aggregated {} words: {} keyword stems, {} stop word stems, {} phrases",
            frequencies.total_words,
            frequencies.meaningful.len(),
            frequencies.stopwords.len(),
            frequencies.phrases.len()
        );

        let result = score(
            &frequencies,
            &classified.display,
            &classified.stopword_display,
            &self.config,
        );
        log::debug!(
            "Analyzed {} words with {}: {} keywords, {} stop words, {} phrases reported",
            result.total_words,
            self.profile.name(),
            result.single_keywords.len(),
            result.stopwords.len(),
            result.phrases.len()
        );

        result
    }

    /// Analyze many independent texts in parallel. Results keep input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Validate a request against the input ceiling, then analyze it.
    pub fn handle_request(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        request.validate(self.config.max_input_chars)?;
        Ok(self.analyze(&request.text))
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("profile", &self.profile.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Analyze `text` with the built-in profile for `language` (e.g. `"english"`).
///
/// Fails only when no profile exists for `language`.
pub fn analyze(text: &str, language: &str) -> Result<AnalysisResult> {
    let language: Language = language.parse()?;
    Ok(TextAnalyzer::for_language(language).analyze(text))
}
