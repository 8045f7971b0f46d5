//! Text analysis building blocks.
//!
//! This module provides tokenization, stemming, stop word classification and
//! the language profiles that combine them. The density analyzer in
//! [`crate::density`] drives these pieces for each call.

pub mod language;
pub mod stemmer;
pub mod stop;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use language::{CustomProfile, EnglishProfile, Language, LanguageProfile};
pub use stemmer::{IdentityStemmer, PorterStemmer, Stemmer};
pub use stop::StopWords;
pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer};
