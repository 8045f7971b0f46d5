//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KeywordDensityArgs, OutputFormat};
use crate::density::export;
use crate::density::result::{AnalysisResult, KeywordResult};
use crate::error::Result;

/// One word of a `stem` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StemRow {
    pub word: String,
    pub stem: String,
    pub is_stopword: bool,
}

/// Result structure for the `stem` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemReport {
    pub language: String,
    pub words: Vec<StemRow>,
}

/// A command result that can be written in every output format.
pub trait Render: Serialize {
    /// Human-readable rendering.
    fn to_human(&self) -> String;

    /// CSV rendering, header included.
    fn to_csv(&self) -> String;
}

impl Render for AnalysisResult {
    fn to_human(&self) -> String {
        let mut out = format!(
            "Total words:  {}\nUnique words: {}\n",
            self.total_words, self.unique_words
        );

        out.push_str(&keyword_lines("Keywords", &self.single_keywords));
        out.push_str(&keyword_lines("Stop words", &self.stopwords));

        if !self.phrases.is_empty() {
            out.push_str("\nPhrases:\n");
            for phrase in &self.phrases {
                out.push_str(&format!(
                    "  {:<30} {:>5}\n",
                    phrase.phrase, phrase.times_used
                ));
            }
        }

        let over_frequent: Vec<&str> = self
            .over_frequent_keywords()
            .map(|k| k.keyword.as_str())
            .collect();
        if !over_frequent.is_empty() {
            out.push_str(&format!("\nOver-frequent: {}\n", over_frequent.join(", ")));
        }

        out
    }

    fn to_csv(&self) -> String {
        export::to_csv(self)
    }
}

impl Render for StemReport {
    fn to_human(&self) -> String {
        self.words
            .iter()
            .map(|row| {
                let marker = if row.is_stopword { " [stopword]" } else { "" };
                format!("{} -> {}{marker}\n", row.word, row.stem)
            })
            .collect()
    }

    fn to_csv(&self) -> String {
        let mut out = String::from("Word,Stem,Is Stopword\n");
        for row in &self.words {
            let is_stopword = if row.is_stopword { "Yes" } else { "No" };
            out.push_str(&format!("{},{},{is_stopword}\n", row.word, row.stem));
        }
        out
    }
}

fn keyword_lines(title: &str, keywords: &[KeywordResult]) -> String {
    if keywords.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{title}:\n");
    for keyword in keywords {
        let marker = if keyword.is_over_frequent {
            "  [over-frequent]"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<20} {:>7}% {:>5}  {}{marker}\n",
            keyword.keyword,
            keyword.density,
            keyword.times_used,
            keyword.level()
        ));
    }
    out
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(message: &str, result: &T, args: &KeywordDensityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: Render>(message: &str, result: &T, args: &KeywordDensityArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KeywordDensityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Render>(result: &T) -> Result<()> {
    print!("{}", result.to_csv());
    Ok(())
}
