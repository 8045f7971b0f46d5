//! Stemming strategies.
//!
//! A [`Stemmer`] reduces a word to the key under which its occurrences are
//! counted, so that "task" and "tasks" aggregate together. The stemmer is an
//! injected capability of a [`LanguageProfile`](crate::analysis::language::LanguageProfile).

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod porter;

pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;
