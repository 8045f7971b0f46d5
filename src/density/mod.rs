//! Keyword density analysis.
//!
//! The pipeline turns raw text into an [`AnalysisResult`] in four stages:
//! tokenization, classification ([`classify`]), aggregation ([`aggregate`])
//! and scoring ([`score`]). [`TextAnalyzer`] wires them together.

pub mod aggregate;
pub mod analyzer;
pub mod classify;
pub mod config;
pub mod export;
pub mod level;
pub mod request;
pub mod result;
pub mod score;
pub mod zipf;

// Re-export commonly used types
pub use analyzer::{TextAnalyzer, analyze};
pub use config::AnalyzerConfig;
pub use level::DensityLevel;
pub use request::AnalyzeRequest;
pub use result::{AnalysisResult, KeywordResult, PhraseResult};
pub use zipf::ZipfDetector;
