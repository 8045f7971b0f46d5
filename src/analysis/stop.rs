//! Stop word sets.
//!
//! A [`StopWords`] set decides whether a token counts as a meaningful word or
//! as a stop word. Stop words are still counted (they appear in the stop word
//! table and in the total word count) but never become keywords and break
//! phrase adjacency.
//!
//! # Examples
//!
//! ```
//! use keyword_density::analysis::stop::StopWords;
//!
//! let stop_words = StopWords::english();
//! assert!(stop_words.is_stop_word("the"));
//! assert!(!stop_words.is_stop_word("keyword"));
//!
//! let custom = StopWords::from_words(vec!["foo", "bar"]);
//! assert_eq!(custom.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stop words list (the NLTK English corpus list).
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Default English stop words as a shared set, built once per process.
static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// An immutable set of stop words.
///
/// Cloning is cheap: the underlying set is shared.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// The default English stop word set.
    pub fn english() -> Self {
        StopWords {
            words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create a stop word set from an explicit set of words.
    pub fn with_stop_words(words: HashSet<String>) -> Self {
        StopWords {
            words: Arc::new(words),
        }
    }

    /// Create a stop word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stop_words() {
        let stop_words = StopWords::english();

        assert_eq!(stop_words.len(), 179);
        for word in ["the", "is", "on", "under", "from", "and", "a"] {
            assert!(stop_words.is_stop_word(word), "{word} should be a stop word");
        }
        for word in ["python", "table", "extract", "keyword"] {
            assert!(!stop_words.is_stop_word(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_english_set_is_shared() {
        let a = StopWords::english();
        let b = StopWords::default();
        assert!(Arc::ptr_eq(&a.words, &b.words));
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = StopWords::from_words(vec!["foo", "bar", "baz", "foo"]);
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.is_stop_word("bar"));
        assert!(!stop_words.is_stop_word("the"));
    }
}
