//! Result records returned by the density analyzer.
//!
//! Field names serialize in camelCase (`timesUsed`, `isOverFrequent`,
//! `singleKeywords`, ...) so the JSON matches what existing consumers read.

use serde::{Deserialize, Serialize};

use crate::density::level::DensityLevel;

/// A single keyword or stop word with its frequency statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    /// Display form: the shortest surface word seen for this stem.
    pub keyword: String,
    /// Percentage of all words, rounded to two decimals.
    pub density: f64,
    /// Number of occurrences of the stem.
    pub times_used: usize,
    pub is_stopword: bool,
    /// Whether the count is far above its Zipf expectation. Always false for stop words.
    pub is_over_frequent: bool,
}

impl KeywordResult {
    /// Density band of this keyword.
    pub fn level(&self) -> DensityLevel {
        DensityLevel::from_density(self.density)
    }
}

/// A two-word phrase and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseResult {
    /// The display forms of both words joined by a space.
    pub phrase: String,
    pub times_used: usize,
}

/// The full result of analyzing one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Meaningful keywords passing the count and density thresholds, most used first.
    pub single_keywords: Vec<KeywordResult>,
    /// Stop words passing the same thresholds, most used first.
    pub stopwords: Vec<KeywordResult>,
    /// Phrases passing the phrase count threshold, most used first.
    pub phrases: Vec<PhraseResult>,
    /// Number of word tokens, stop words included.
    pub total_words: usize,
    /// Number of distinct meaningful stems.
    pub unique_words: usize,
}

impl AnalysisResult {
    /// The canonical empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no words were found at all.
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Look up a reported keyword by its display form.
    pub fn keyword(&self, keyword: &str) -> Option<&KeywordResult> {
        self.single_keywords.iter().find(|k| k.keyword == keyword)
    }

    /// Look up a reported stop word by its display form.
    pub fn stopword(&self, keyword: &str) -> Option<&KeywordResult> {
        self.stopwords.iter().find(|k| k.keyword == keyword)
    }

    /// Look up a reported phrase.
    pub fn phrase(&self, phrase: &str) -> Option<&PhraseResult> {
        self.phrases.iter().find(|p| p.phrase == phrase)
    }

    /// Reported keywords flagged as over-frequent.
    pub fn over_frequent_keywords(&self) -> impl Iterator<Item = &KeywordResult> {
        self.single_keywords.iter().filter(|k| k.is_over_frequent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult::empty();
        assert!(result.is_empty());
        assert!(result.single_keywords.is_empty());
        assert!(result.stopwords.is_empty());
        assert!(result.phrases.is_empty());
        assert_eq!(result.unique_words, 0);
    }

    #[test]
    fn test_camel_case_serialization() {
        let result = AnalysisResult {
            single_keywords: vec![KeywordResult {
                keyword: "apple".to_string(),
                density: 50.0,
                times_used: 3,
                is_stopword: false,
                is_over_frequent: false,
            }],
            stopwords: Vec::new(),
            phrases: vec![PhraseResult {
                phrase: "apple banana".to_string(),
                times_used: 2,
            }],
            total_words: 6,
            unique_words: 3,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["totalWords"], 6);
        assert_eq!(value["uniqueWords"], 3);
        assert_eq!(value["singleKeywords"][0]["timesUsed"], 3);
        assert_eq!(value["singleKeywords"][0]["isStopword"], false);
        assert_eq!(value["singleKeywords"][0]["isOverFrequent"], false);
        assert_eq!(value["phrases"][0]["phrase"], "apple banana");
    }

    #[test]
    fn test_lookups() {
        let keyword = KeywordResult {
            keyword: "data".to_string(),
            density: 2.5,
            times_used: 5,
            is_stopword: false,
            is_over_frequent: true,
        };
        let result = AnalysisResult {
            single_keywords: vec![keyword.clone()],
            total_words: 200,
            unique_words: 40,
            ..AnalysisResult::default()
        };

        assert_eq!(result.keyword("data"), Some(&keyword));
        assert!(result.keyword("science").is_none());
        assert!(result.stopword("data").is_none());
        assert_eq!(result.over_frequent_keywords().count(), 1);
        assert_eq!(keyword.level(), DensityLevel::Elevated);
    }
}
