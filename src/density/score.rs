//! Turning raw counts into reported results.

use crate::density::aggregate::{Frequencies, FrequencyTable};
use crate::density::classify::DisplayForms;
use crate::density::config::AnalyzerConfig;
use crate::density::result::{AnalysisResult, KeywordResult, PhraseResult};
use crate::density::zipf::ZipfDetector;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `total_words` taken by `count`, in percent, rounded to two decimals.
pub fn density(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    round2(count as f64 / total_words as f64 * 100.0)
}

/// Build the reported result from the aggregated counts.
///
/// `display` holds the surface forms of meaningful words and phrases,
/// `stopword_display` those of stop words.
pub fn score(
    frequencies: &Frequencies,
    display: &DisplayForms,
    stopword_display: &DisplayForms,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    let total_words = frequencies.total_words;
    if total_words == 0 {
        return AnalysisResult::empty();
    }

    let over_frequent = ZipfDetector::from_config(config).detect(&frequencies.meaningful.counts());

    let single_keywords = keyword_results(
        &frequencies.meaningful,
        display,
        total_words,
        false,
        &over_frequent,
        config,
    );
    let stopwords = keyword_results(
        &frequencies.stopwords,
        stopword_display,
        total_words,
        true,
        &[],
        config,
    );

    let mut phrases: Vec<PhraseResult> = frequencies
        .phrases
        .iter()
        .filter(|(_, count)| *count >= config.min_phrase_count)
        .map(|((first, second), count)| PhraseResult {
            phrase: format!("{} {}", display.get(first), display.get(second)),
            times_used: count,
        })
        .collect();
    phrases.sort_by(|a, b| b.times_used.cmp(&a.times_used));

    AnalysisResult {
        single_keywords,
        stopwords,
        phrases,
        total_words,
        unique_words: frequencies.meaningful.len(),
    }
}

/// Keyword rows that pass the count and density thresholds, most used first.
///
/// `over_frequent` is aligned with the table's insertion order; missing
/// entries read as not flagged.
fn keyword_results(
    table: &FrequencyTable<String>,
    display: &DisplayForms,
    total_words: usize,
    is_stopword: bool,
    over_frequent: &[bool],
    config: &AnalyzerConfig,
) -> Vec<KeywordResult> {
    let mut results: Vec<KeywordResult> = table
        .iter()
        .enumerate()
        .filter_map(|(slot, (stem, count))| {
            let density = density(count, total_words);
            if count < config.min_count || density < config.min_density {
                return None;
            }
            Some(KeywordResult {
                keyword: display.get(stem).to_string(),
                density,
                times_used: count,
                is_stopword,
                is_over_frequent: over_frequent.get(slot).copied().unwrap_or(false),
            })
        })
        .collect();

    // Stable: ties keep counting order.
    results.sort_by(|a, b| b.times_used.cmp(&a.times_used));
    results
}
