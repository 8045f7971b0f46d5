//! Zipf's-law over-frequency detection.
//!
//! Zipf's law says the r-th most frequent word occurs about `1/r` as often as
//! the most frequent one. For a text with `n` distinct meaningful words and
//! `N` meaningful occurrences, a perfectly Zipfian distribution has a top
//! count of `N / H(n)` (with `H(n)` the n-th harmonic number), so the
//! expected count at rank `r` is
//!
//! ```text
//! expected(r) = N / (H(n) * r)
//! ```
//!
//! A word is over-frequent when its count exceeds `factor * expected(rank)`.
//! Ranks are competition ranks: tied counts share the best rank, so a long
//! tail of words seen once is compared against the expectation of its first
//! position rather than against ever smaller ones.
//!
//! # Examples
//!
//! ```
//! use keyword_density::density::zipf::ZipfDetector;
//!
//! let detector = ZipfDetector::default();
//! let counts = [("normal", 5), ("overused", 50), ("rare", 2)];
//! assert_eq!(detector.over_frequent_words(&counts), vec!["overused"]);
//! ```

use crate::density::config::{
    AnalyzerConfig, DEFAULT_MIN_OVER_FREQUENT_COUNT, DEFAULT_OVER_FREQUENCY_FACTOR,
};

/// The n-th harmonic number, `1 + 1/2 + ... + 1/n`.
pub fn harmonic_number(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

/// Competition rank of each count: 1 + the number of strictly larger counts.
pub fn competition_ranks(counts: &[usize]) -> Vec<usize> {
    let mut sorted = counts.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    counts
        .iter()
        .map(|&count| sorted.partition_point(|&other| other > count) + 1)
        .collect()
}

/// Flags counts that sit far above the Zipf curve fitted to their text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfDetector {
    factor: f64,
    min_count: usize,
}

impl ZipfDetector {
    /// Create a detector with the given margin and minimum count.
    pub fn new(factor: f64, min_count: usize) -> Self {
        ZipfDetector { factor, min_count }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.over_frequency_factor, config.min_over_frequent_count)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Expected count at `rank` for `distinct` words totalling `total` occurrences.
    pub fn expected_count(rank: usize, distinct: usize, total: usize) -> f64 {
        if rank == 0 || distinct == 0 {
            return 0.0;
        }
        total as f64 / (harmonic_number(distinct) * rank as f64)
    }

    /// One flag per count, in input order.
    ///
    /// Nothing is flagged when there are fewer than two distinct words.
    pub fn detect(&self, counts: &[usize]) -> Vec<bool> {
        if counts.len() < 2 {
            return vec![false; counts.len()];
        }

        let total: usize = counts.iter().sum();
        let anchor = total as f64 / harmonic_number(counts.len());

        competition_ranks(counts)
            .into_iter()
            .zip(counts)
            .map(|(rank, &count)| {
                let expected = anchor / rank as f64;
                count >= self.min_count && count as f64 > self.factor * expected
            })
            .collect()
    }

    /// Names of the over-frequent words among `(word, count)` pairs, in input order.
    pub fn over_frequent_words<'a>(&self, counts: &[(&'a str, usize)]) -> Vec<&'a str> {
        let values: Vec<usize> = counts.iter().map(|(_, count)| *count).collect();

        counts
            .iter()
            .zip(self.detect(&values))
            .filter(|(_, flagged)| *flagged)
            .map(|((word, _), _)| *word)
            .collect()
    }
}

impl Default for ZipfDetector {
    fn default() -> Self {
        Self::new(DEFAULT_OVER_FREQUENCY_FACTOR, DEFAULT_MIN_OVER_FREQUENT_COUNT)
    }
}
