use std::fmt::{Debug, Formatter};

use crate::analysis::language::LanguageProfile;
use crate::analysis::stemmer::{PorterStemmer, Stemmer};
use crate::analysis::stop::StopWords;

/// English: Porter stemming and the English stop word list.
#[derive(Clone, Default)]
pub struct EnglishProfile {
    stemmer: PorterStemmer,
    stop_words: StopWords,
}

impl EnglishProfile {
    pub fn new() -> Self {
        EnglishProfile {
            stemmer: PorterStemmer::new(),
            stop_words: StopWords::english(),
        }
    }
}

impl LanguageProfile for EnglishProfile {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(word)
    }

    fn name(&self) -> &str {
        "english"
    }
}

impl Debug for EnglishProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishProfile")
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}
