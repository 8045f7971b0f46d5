//! Stemming and stop word classification of a token stream.

use ahash::AHashMap;

use crate::analysis::language::LanguageProfile;
use crate::analysis::token::Token;

/// A token reduced to its stem and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub stem: String,
    pub is_stopword: bool,
}

/// Shortest surface form seen for each stem.
///
/// Built as a fold over the token stream in order: a new form replaces the
/// stored one only when strictly shorter, so among equally short forms the
/// first one seen wins.
#[derive(Debug, Clone, Default)]
pub struct DisplayForms {
    forms: AHashMap<String, String>,
}

impl DisplayForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `surface` under `stem`.
    pub fn observe(&mut self, stem: &str, surface: &str) {
        match self.forms.get_mut(stem) {
            Some(current) => {
                if surface.len() < current.len() {
                    *current = surface.to_string();
                }
            }
            None => {
                self.forms.insert(stem.to_string(), surface.to_string());
            }
        }
    }

    /// Display form for a stem, falling back to the stem itself.
    pub fn get<'a>(&'a self, stem: &'a str) -> &'a str {
        self.forms.get(stem).map(String::as_str).unwrap_or(stem)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// The classified token stream of one text, in input order.
///
/// Meaningful words and stop words keep separate display forms, so a stop
/// word never shows up under the surface form of a keyword with the same stem.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub tokens: Vec<ClassifiedToken>,
    pub display: DisplayForms,
    pub stopword_display: DisplayForms,
}

impl Classified {
    /// Stems of meaningful words, in order.
    pub fn meaningful_stems(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| !t.is_stopword)
            .map(|t| t.stem.as_str())
    }

    /// Stems of stop words, in order.
    pub fn stopword_stems(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_stopword)
            .map(|t| t.stem.as_str())
    }
}

/// Stem and classify every token.
///
/// A token is a stop word when its surface form is in the profile's stop set.
pub fn classify<I>(tokens: I, profile: &dyn LanguageProfile) -> Classified
where
    I: IntoIterator<Item = Token>,
{
    let mut classified = Classified::default();

    for token in tokens {
        let stem = profile.stem(&token.text);
        let is_stopword = profile.is_stopword(&token.text);
        if is_stopword {
            classified.stopword_display.observe(&stem, &token.text);
        } else {
            classified.display.observe(&stem, &token.text);
        }
        classified.tokens.push(ClassifiedToken { stem, is_stopword });
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::EnglishProfile;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    #[test]
    fn test_classify_preserves_order() {
        let profile = EnglishProfile::new();
        let classified = classify(tokens(&["the", "tasks", "of", "running"]), &profile);

        assert_eq!(classified.tokens.len(), 4);
        assert_eq!(classified.meaningful_stems().collect::<Vec<_>>(), vec!["task", "run"]);
        assert_eq!(classified.stopword_stems().collect::<Vec<_>>(), vec!["the", "of"]);
    }

    #[test]
    fn test_display_form_is_shortest_surface() {
        let profile = EnglishProfile::new();
        let classified = classify(tokens(&["tasks", "task", "tasks"]), &profile);

        assert_eq!(classified.display.get("task"), "task");
    }

    #[test]
    fn test_stopword_display_is_separate() {
        let profile = EnglishProfile::new();
        let classified = classify(tokens(&["does", "doe", "does"]), &profile);

        assert_eq!(classified.display.get("doe"), "doe");
        assert_eq!(classified.stopword_display.get("doe"), "does");
        assert_eq!(classified.display.len(), 1);
        assert_eq!(classified.stopword_display.len(), 1);
    }

    #[test]
    fn test_display_form_ties_keep_first_seen() {
        let mut display = DisplayForms::new();
        display.observe("connect", "connects");
        display.observe("connect", "connected");
        display.observe("connect", "connectz");
        assert_eq!(display.get("connect"), "connects");

        display.observe("connect", "connect");
        assert_eq!(display.get("connect"), "connect");
        assert_eq!(display.len(), 1);
    }

    #[test]
    fn test_unknown_stem_falls_back() {
        let display = DisplayForms::new();
        assert!(display.is_empty());
        assert_eq!(display.get("missing"), "missing");
    }
}
