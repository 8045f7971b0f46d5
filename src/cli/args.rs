//! Command line argument parsing for the keyword-density CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::Language;

/// keyword-density - Keyword density and phrase frequency analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "keyword-density")]
#[command(about = "Keyword density, phrase frequency and over-frequency analysis for text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeywordDensityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeywordDensityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze the keyword density of a text
    Analyze(AnalyzeArgs),

    /// Show the stem and stop word status of words
    Stem(StemArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input file (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language of the text
    #[arg(short, long, env = "KEYWORD_DENSITY_LANGUAGE")]
    pub language: Option<Language>,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Treat the input as a JSON request body `{ "text": ... }`
    #[arg(long)]
    pub json_body: bool,

    /// Maximum number of characters accepted
    #[arg(long, value_name = "CHARS")]
    pub max_chars: Option<usize>,
}

impl AnalyzeArgs {
    /// Whether the text comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Language of the words
    #[arg(short, long, default_value = "english")]
    pub language: Language,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
