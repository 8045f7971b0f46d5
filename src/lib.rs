//! # keyword-density
//!
//! Keyword density and phrase frequency analysis for natural-language text.
//!
//! ## Features
//!
//! - Regex word tokenization with Unicode word boundaries
//! - Porter stemming and English stop word classification
//! - Keyword and stop word density with configurable thresholds
//! - Two-word phrase counting
//! - Zipf's-law over-frequency detection
//! - JSON and CSV export
//!
//! ```
//! let result = keyword_density::analyze("extract table from pdf and extract table from csv", "english")?;
//! assert_eq!(result.phrase("extract table").map(|p| p.times_used), Some(2));
//! # Ok::<(), keyword_density::error::KeywordDensityError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod density;
pub mod error;

pub use density::analyze;

pub mod prelude {
    pub use crate::analysis::{Language, LanguageProfile, Stemmer, StopWords, Tokenizer};
    pub use crate::density::{
        AnalysisResult, AnalyzeRequest, AnalyzerConfig, DensityLevel, KeywordResult,
        PhraseResult, TextAnalyzer, analyze,
    };
    pub use crate::error::{KeywordDensityError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
