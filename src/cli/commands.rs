//! Command implementations for the keyword-density CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use anyhow::Context;

use crate::analysis::language;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::density::{AnalyzeRequest, AnalyzerConfig, TextAnalyzer};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: KeywordDensityArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Stem(stem_args) => stem_words(stem_args.clone(), &args),
    }
}

/// Analyze a file or stdin.
fn analyze_text(args: AnalyzeArgs, cli_args: &KeywordDensityArgs) -> Result<()> {
    let config = build_config(&args)?;
    let input = read_input(&args)?;

    let request = if args.json_body {
        AnalyzeRequest::from_json(&input)?
    } else {
        AnalyzeRequest::new(input)
    };

    let analyzer = TextAnalyzer::from_config(config);
    let start = Instant::now();
    let result = analyzer.handle_request(&request)?;
    log::info!(
        "Analyzed {} characters in {:?}",
        request.char_count(),
        start.elapsed()
    );

    output_result("Keyword density analysis", &result, cli_args)
}

/// Stem each word and report whether it is a stop word.
fn stem_words(args: StemArgs, cli_args: &KeywordDensityArgs) -> Result<()> {
    let profile = language::profile(args.language);

    let words = args
        .words
        .iter()
        .map(|word| {
            let lowered = word.to_lowercase();
            StemRow {
                stem: profile.stem(&lowered),
                is_stopword: profile.is_stopword(&lowered),
                word: word.clone(),
            }
        })
        .collect();

    let report = StemReport {
        language: args.language.name().to_string(),
        words,
    };
    output_result("Stems", &report, cli_args)
}

/// Merge the config file, if any, with command line overrides.
fn build_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(max_chars) = args.max_chars {
        config.max_input_chars = max_chars;
    }

    config.validate()?;
    Ok(config)
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => {
            log::debug!("Reading input from {}", path.display());
            let input = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            Ok(input)
        }
        _ => {
            log::debug!("Reading input from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;
    use crate::error::KeywordDensityError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn analyze_args(input: Option<PathBuf>) -> AnalyzeArgs {
        AnalyzeArgs {
            input,
            language: None,
            config: None,
            json_body: false,
            max_chars: None,
        }
    }

    #[test]
    fn test_build_config_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_count": 3, "max_input_chars": 500 }}"#).unwrap();

        let mut args = analyze_args(None);
        args.config = Some(file.path().to_path_buf());
        args.language = Some(Language::English);
        args.max_chars = Some(100);

        let config = build_config(&args).unwrap();
        assert_eq!(config.min_count, 3);
        assert_eq!(config.max_input_chars, 100);
    }

    #[test]
    fn test_build_config_rejects_zero_limit() {
        let mut args = analyze_args(None);
        args.max_chars = Some(0);

        assert!(matches!(
            build_config(&args),
            Err(KeywordDensityError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "apple banana apple").unwrap();

        let args = analyze_args(Some(file.path().to_path_buf()));
        assert_eq!(read_input(&args).unwrap(), "apple banana apple");
    }

    #[test]
    fn test_read_input_missing_file() {
        let args = analyze_args(Some(PathBuf::from("/nonexistent/input.txt")));
        let error = read_input(&args).unwrap_err();

        assert!(matches!(error, KeywordDensityError::Anyhow(_)));
        assert!(
            error
                .to_string()
                .starts_with("Failed to read input file /nonexistent/input.txt: ")
        );
    }
}
