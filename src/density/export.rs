//! JSON and CSV export of analysis results.

use crate::density::result::AnalysisResult;
use crate::error::Result;

/// Header row of [`to_csv`].
pub const CSV_HEADER: &str = "Type,Keyword/Phrase,Density,Times Used,Is Stopword";

/// Serialize a result as JSON.
pub fn to_json(result: &AnalysisResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Render a result as CSV: keywords, then stop words, then phrases.
pub fn to_csv(result: &AnalysisResult) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for item in &result.single_keywords {
        csv.push_str(&format!(
            "Single Keyword,{},{}%,{},No\n",
            quote(&item.keyword),
            item.density,
            item.times_used
        ));
    }

    for item in &result.stopwords {
        csv.push_str(&format!(
            "Stopword,{},{}%,{},Yes\n",
            quote(&item.keyword),
            item.density,
            item.times_used
        ));
    }

    for item in &result.phrases {
        csv.push_str(&format!(
            "Phrase,{},,{},N/A\n",
            quote(&item.phrase),
            item.times_used
        ));
    }

    csv
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::result::{KeywordResult, PhraseResult};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            single_keywords: vec![KeywordResult {
                keyword: "apple".to_string(),
                density: 50.0,
                times_used: 3,
                is_stopword: false,
                is_over_frequent: false,
            }],
            stopwords: vec![KeywordResult {
                keyword: "the".to_string(),
                density: 33.33,
                times_used: 2,
                is_stopword: true,
                is_over_frequent: false,
            }],
            phrases: vec![PhraseResult {
                phrase: "apple banana".to_string(),
                times_used: 2,
            }],
            total_words: 6,
            unique_words: 2,
        }
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                CSV_HEADER,
                "Single Keyword,\"apple\",50%,3,No",
                "Stopword,\"the\",33.33%,2,Yes",
                "Phrase,\"apple banana\",,2,N/A",
            ]
        );
    }

    #[test]
    fn test_to_csv_empty() {
        assert_eq!(to_csv(&AnalysisResult::empty()), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_to_json() {
        let compact = to_json(&sample(), false).unwrap();
        assert!(compact.contains("\"singleKeywords\""));
        assert!(!compact.contains('\n'));

        let pretty = to_json(&sample(), true).unwrap();
        assert!(pretty.contains('\n'));

        let parsed: AnalysisResult = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, sample());
    }
}
