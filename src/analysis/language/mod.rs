//! Language profiles.
//!
//! A [`LanguageProfile`] bundles the two language-specific capabilities the
//! density analyzer needs: stemming a word and deciding whether a word is a
//! stop word. Profiles are read-only and shared; the built-in ones are built
//! once per process and handed out as `Arc`s.
//!
//! # Available Languages
//!
//! - [`english`] - Porter stemming with the English stop word list
//!
//! # Examples
//!
//! ```
//! use keyword_density::analysis::language::profile_for;
//!
//! let profile = profile_for("english").unwrap();
//! assert_eq!(profile.stem("tasks"), "task");
//! assert!(profile.is_stopword("the"));
//! assert!(profile_for("klingon").is_err());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::stemmer::Stemmer;
use crate::analysis::stop::StopWords;
use crate::error::{KeywordDensityError, Result};

pub mod english;

pub use english::EnglishProfile;

/// Languages with a built-in profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    English,
}

impl Language {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
        }
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = KeywordDensityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            _ => Err(KeywordDensityError::unsupported_language(s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Stemming and stop word classification for one language.
pub trait LanguageProfile: Send + Sync {
    /// Reduce a lowercase word to its aggregation key.
    fn stem(&self, word: &str) -> String;

    /// Whether a lowercase word is a stop word.
    fn is_stopword(&self, word: &str) -> bool;

    /// Name of this profile (for logging).
    fn name(&self) -> &str;
}

/// A profile assembled from any stemmer and stop word set.
///
/// Handy for fixtures: pair an
/// [`IdentityStemmer`](crate::analysis::stemmer::IdentityStemmer) with a
/// short stop list to get fully predictable keys.
pub struct CustomProfile {
    name: String,
    stemmer: Box<dyn Stemmer>,
    stop_words: StopWords,
}

impl CustomProfile {
    /// Create a new custom profile.
    pub fn new<S: Into<String>>(name: S, stemmer: Box<dyn Stemmer>, stop_words: StopWords) -> Self {
        CustomProfile {
            name: name.into(),
            stemmer,
            stop_words,
        }
    }
}

impl fmt::Debug for CustomProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomProfile")
            .field("name", &self.name)
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

impl LanguageProfile for CustomProfile {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(word)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

static ENGLISH_PROFILE: LazyLock<Arc<dyn LanguageProfile>> =
    LazyLock::new(|| Arc::new(EnglishProfile::new()) as Arc<dyn LanguageProfile>);

/// Get the shared built-in profile for a language.
pub fn profile(language: Language) -> Arc<dyn LanguageProfile> {
    match language {
        Language::English => Arc::clone(&ENGLISH_PROFILE),
    }
}

/// Get the shared built-in profile for a language name such as `"english"` or `"en"`.
pub fn profile_for(name: &str) -> Result<Arc<dyn LanguageProfile>> {
    Ok(profile(name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::IdentityStemmer;

    #[test]
    fn test_language_parsing() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" English ".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "arabic".parse::<Language>(),
            Err(KeywordDensityError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_language_names() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.name(), "english");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::English.to_string(), "english");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"english\"");
    }

    #[test]
    fn test_profile_is_shared() {
        let a = profile(Language::English);
        let b = profile_for("en").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "english");
    }

    #[test]
    fn test_custom_profile() {
        let profile = CustomProfile::new(
            "fixture",
            Box::new(IdentityStemmer::new()),
            StopWords::from_words(vec!["of"]),
        );

        assert_eq!(profile.stem("tasks"), "tasks");
        assert!(profile.is_stopword("of"));
        assert!(!profile.is_stopword("the"));
        assert_eq!(profile.name(), "fixture");
    }
}
