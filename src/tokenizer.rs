//! Separator-set word splitting for ciphertext.
//!
//! Deliberately dumber than a real lexer: any character in the separator
//! set ends the current token, empty runs produce nothing, and everything
//! else (letters, apostrophes, stray symbols) stays inside the token.

use crate::quip_char::DEFAULT_SEPARATORS;
use std::collections::HashSet;

/// Splits text on a fixed set of separator characters.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separators: HashSet<char>,
}

impl Tokenizer {
    /// Build a tokenizer splitting on every character of `separators`.
    pub fn new(separators: &str) -> Self {
        Self {
            separators: separators.chars().collect(),
        }
    }

    /// Tokens of `text` in order, borrowing from the input. Runs of
    /// separators collapse; leading/trailing separators produce no token.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c| self.separators.contains(&c))
            .filter(|token| !token.is_empty())
            .collect()
    }
}

impl Default for Tokenizer {
    /// The ciphertext separator set: whitespace, digits, and sentence
    /// punctuation — with apostrophes excluded so contractions hold
    /// together.
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("THE DOG RAN"), vec!["THE", "DOG", "RAN"]);
    }

    #[test]
    fn test_tokenize_collapses_separator_runs() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("  a,,b!!c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_keeps_apostrophes_inside_tokens() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_digits_and_punctuation_separate() {
        let t = Tokenizer::default();
        assert_eq!(
            t.tokenize("call 911; \"now\" (please)"),
            vec!["call", "now", "please"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_separator_only_input() {
        let t = Tokenizer::default();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize(" .,!  33 ").is_empty());
    }

    #[test]
    fn test_custom_separator_set() {
        let t = Tokenizer::new("-");
        assert_eq!(t.tokenize("a-b c-d"), vec!["a", "b c", "d"]);
    }

    #[test]
    fn test_tokenize_preserves_case_and_order() {
        let t = Tokenizer::default();
        assert_eq!(t.tokenize("Zebra apple Mango"), vec!["Zebra", "apple", "Mango"]);
    }
}
