//! Frequency tables for keywords, stop words and phrases.

use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;

use crate::density::classify::ClassifiedToken;

/// A counter that remembers the order in which keys were first seen.
///
/// Iteration follows first-insertion order, which is what lets the scorer's
/// stable sort break count ties deterministically.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: IndexMap<K, usize, RandomState>,
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        FrequencyTable {
            counts: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Occurrences of `key`, zero when unseen.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Counts in first-insertion order.
    pub fn counts(&self) -> Vec<usize> {
        self.counts.values().copied().collect()
    }
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

/// An ordered pair of adjacent meaningful stems.
pub type PhraseKey = (String, String);

/// All counts gathered from one classified token stream.
#[derive(Debug, Clone, Default)]
pub struct Frequencies {
    pub meaningful: FrequencyTable<String>,
    pub stopwords: FrequencyTable<String>,
    pub phrases: FrequencyTable<PhraseKey>,
    /// Every token, stop words included.
    pub total_words: usize,
}

/// Count keywords, stop words and adjacent meaningful pairs.
///
/// Pairs are taken over the full token stream, so a stop word between two
/// meaningful words keeps them from forming a phrase.
pub fn aggregate(tokens: &[ClassifiedToken]) -> Frequencies {
    let mut frequencies = Frequencies {
        total_words: tokens.len(),
        ..Frequencies::default()
    };

    for token in tokens {
        if token.is_stopword {
            frequencies.stopwords.increment(token.stem.clone());
        } else {
            frequencies.meaningful.increment(token.stem.clone());
        }
    }

    for pair in tokens.windows(2) {
        if !pair[0].is_stopword && !pair[1].is_stopword {
            frequencies
                .phrases
                .increment((pair[0].stem.clone(), pair[1].stem.clone()));
        }
    }

    frequencies
}
