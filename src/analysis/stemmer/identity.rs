//! Identity stemmer that returns words unchanged.

use crate::analysis::stemmer::Stemmer;

/// A stemmer that performs no stemming.
///
/// Useful with fixture word lists in tests, or for languages where every
/// surface form should be counted on its own.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer::new();

        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem("tasks"), "tasks");
        assert_eq!(stemmer.name(), "identity");
    }
}
