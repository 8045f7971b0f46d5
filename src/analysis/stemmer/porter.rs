//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of suffix rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Within steps 2–4 the first (longest) matching suffix decides: if its
//! measure condition fails, no shorter suffix is tried.
//!
//! # Examples
//!
//! ```
//! use keyword_density::analysis::stemmer::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::stemmer::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm for English.
///
/// Stateless, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the letter at `pos` acts as a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(&self, word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !self.is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(&self, word: &[u8]) -> usize {
        let n = word.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && self.is_consonant(word, i) {
            i += 1;
        }

        loop {
            while i < n && !self.is_consonant(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            while i < n && self.is_consonant(word, i) {
                i += 1;
            }
            m += 1;
        }

        m
    }

    fn contains_vowel(&self, word: &[u8]) -> bool {
        (0..word.len()).any(|i| !self.is_consonant(word, i))
    }

    fn ends_with_double_consonant(&self, word: &[u8]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && self.is_consonant(word, len - 1)
    }

    /// Check for a consonant-vowel-consonant ending whose last letter is not w, x or y.
    fn ends_cvc(&self, word: &[u8]) -> bool {
        let len = word.len();
        len >= 3
            && self.is_consonant(word, len - 3)
            && !self.is_consonant(word, len - 2)
            && self.is_consonant(word, len - 1)
            && !matches!(word[len - 1], b'w' | b'x' | b'y')
    }

    /// Apply the first rule whose suffix matches, if the remaining stem has
    /// at least `min_measure`.
    fn apply_rules(&self, word: &str, rules: &[(&str, &str)], min_measure: usize) -> String {
        for (suffix, replacement) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if self.measure(stem.as_bytes()) >= min_measure {
                    return format!("{stem}{replacement}");
                }
                return word.to_string();
            }
        }
        word.to_string()
    }

    fn step1a(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if let Some(stem) = word.strip_suffix("ies") {
            format!("{stem}i")
        } else if word.ends_with("ss") {
            word.to_string()
        } else if let Some(stem) = word.strip_suffix('s') {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("eed") {
            return if self.measure(stem.as_bytes()) > 0 {
                format!("{stem}ee")
            } else {
                word.to_string()
            };
        }

        let stem = match word.strip_suffix("ed").or_else(|| word.strip_suffix("ing")) {
            Some(stem) if self.contains_vowel(stem.as_bytes()) => stem,
            _ => return word.to_string(),
        };

        let bytes = stem.as_bytes();
        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if self.ends_with_double_consonant(bytes)
            && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z')
        {
            stem[..stem.len() - 1].to_string()
        } else if self.measure(bytes) == 1 && self.ends_cvc(bytes) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    fn step1c(&self, word: &str) -> String {
        match word.strip_suffix('y') {
            Some(stem) if self.contains_vowel(stem.as_bytes()) => format!("{stem}i"),
            _ => word.to_string(),
        }
    }

    fn step2(&self, word: &str) -> String {
        self.apply_rules(word, STEP2_RULES, 1)
    }

    fn step3(&self, word: &str) -> String {
        self.apply_rules(word, STEP3_RULES, 1)
    }

    fn step4(&self, word: &str) -> String {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let removable = self.measure(stem.as_bytes()) > 1
                    && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'));
                return if removable {
                    stem.to_string()
                } else {
                    word.to_string()
                };
            }
        }
        word.to_string()
    }

    fn step5(&self, word: &str) -> String {
        let word = match word.strip_suffix('e') {
            Some(stem) => {
                let bytes = stem.as_bytes();
                let m = self.measure(bytes);
                if m > 1 || (m == 1 && !self.ends_cvc(bytes)) {
                    stem.to_string()
                } else {
                    word.to_string()
                }
            }
            None => word.to_string(),
        };

        if word.ends_with("ll") && self.measure(word.as_bytes()) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();

        // Non-ASCII input is left alone; the rules index by byte.
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = self.step1a(&word);
        let word = self.step1b(&word);
        let word = self.step1c(&word);
        let word = self.step2(&word);
        let word = self.step3(&word);
        let word = self.step4(&word);
        self.step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_step1_examples() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("feed"), "feed");
        assert_eq!(stemmer.stem("plastered"), "plaster");
        assert_eq!(stemmer.stem("motoring"), "motor");
        assert_eq!(stemmer.stem("sing"), "sing");
        assert_eq!(stemmer.stem("troubled"), "troubl");
        assert_eq!(stemmer.stem("sized"), "size");
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("falling"), "fall");
        assert_eq!(stemmer.stem("filing"), "file");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_later_steps() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("hopefulness"), "hope");
        assert_eq!(stemmer.stem("generalization"), "gener");
        assert_eq!(stemmer.stem("controll"), "control");
    }

    #[test]
    fn test_plural_and_singular_share_a_stem() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("task"), stemmer.stem("tasks"));
        assert_eq!(stemmer.stem("table"), stemmer.stem("tables"));
        assert_eq!(stemmer.stem("Python"), "python");
    }

    #[test]
    fn test_short_and_non_ascii_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("AS"), "as");
        assert_eq!(stemmer.stem("cafés"), "cafés");
    }

    #[test]
    fn test_porter_measure() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.measure(b"tree"), 0);
        assert_eq!(stemmer.measure(b"trees"), 1);
        assert_eq!(stemmer.measure(b"trouble"), 1);
        assert_eq!(stemmer.measure(b"troubles"), 2);
        assert_eq!(stemmer.measure(b"oaten"), 2);
    }

    #[test]
    fn test_porter_consonant_detection() {
        let stemmer = PorterStemmer::new();
        let word = b"trouble";

        assert!(stemmer.is_consonant(word, 0)); // t
        assert!(stemmer.is_consonant(word, 1)); // r
        assert!(!stemmer.is_consonant(word, 2)); // o
        assert!(!stemmer.is_consonant(word, 3)); // u
        assert!(stemmer.is_consonant(word, 4)); // b
        assert!(stemmer.is_consonant(word, 5)); // l
        assert!(!stemmer.is_consonant(word, 6)); // e

        assert!(stemmer.is_consonant(b"toy", 2));
        assert!(!stemmer.is_consonant(b"syzygy", 1));
    }
}
