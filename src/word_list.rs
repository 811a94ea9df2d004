//! `word_list` — the pattern-indexed dictionary the search draws its
//! candidates from.
//!
//! The corpus is read line by line (either from a file or from an
//! in-memory string — the latter is what the tests use). Each accepted
//! word is grouped under its *shape pattern*: the canonical string in
//! which every letter is replaced by a capital symbol identifying the
//! first position that letter occurred at, with apostrophes kept literal.
//! `LETTER` and `BETTER` share the pattern `ABCCBD`; `LETTER` and
//! `ISSUES` do not. Grouping by pattern means a ciphertext word only ever
//! has to be compared against dictionary words that could match it under
//! *some* substitution.
//!
//! Storage is the crate's own [`HashTable`]: pattern → `Vec` of uppercase
//! words in corpus insertion order, duplicates preserved. Built once at
//! load time, read-only afterward.

use crate::errors::LoadError;
use crate::hash_table::HashTable;
use crate::quip_char::QuipChar;

use log::{debug, info};
use std::path::Path;

/// Compute the shape pattern of `word`.
///
/// Letters are case-folded and numbered by first occurrence (`A`, `B`,
/// ...), apostrophes pass through verbatim, and every other character is
/// excluded from the pattern. A word never holds more than 26 distinct
/// letters, so the symbol range cannot overflow.
pub(crate) fn word_pattern(word: &str) -> String {
    let mut first_seen: HashTable<char, char> = HashTable::new();
    let mut next_symbol = 'A';
    let mut pattern = String::with_capacity(word.len());

    for ch in word.chars() {
        if ch.is_cipher_letter() {
            let folded = ch.to_ascii_uppercase();
            match first_seen.find(&folded) {
                Some(&symbol) => pattern.push(symbol),
                None => {
                    first_seen.associate(folded, next_symbol);
                    pattern.push(next_symbol);
                    next_symbol = (next_symbol as u8 + 1) as char;
                }
            }
        } else if ch.is_apostrophe() {
            pattern.push(ch);
        }
    }

    pattern
}

/// The dictionary: every corpus word, grouped by shape pattern.
#[derive(Debug, Default)]
pub struct WordList {
    patterns: HashTable<String, Vec<String>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a corpus from a file path.
    ///
    /// The dictionary is reset before the file is touched, so a failed
    /// load leaves it empty rather than holding stale or partial state.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.patterns.reset();
        let path_ref = path.as_ref();
        let contents = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        self.load_from_str(&contents);
        Ok(())
    }

    /// Load a corpus from an in-memory string, one candidate word per line.
    ///
    /// A line containing any character outside {letters, apostrophe} is
    /// skipped silently; accepted lines are uppercased and appended to
    /// their pattern's bucket in corpus order (duplicates preserved).
    pub fn load_from_str(&mut self, contents: &str) {
        self.patterns.reset();

        let mut accepted = 0usize;
        let mut skipped = 0usize;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.chars().any(|c| !c.is_cipher_letter() && !c.is_apostrophe()) {
                skipped += 1;
                continue;
            }

            let word = line.to_ascii_uppercase();
            let pattern = word_pattern(&word);
            match self.patterns.find_mut(&pattern) {
                Some(bucket) => bucket.push(word),
                None => self.patterns.associate(pattern, vec![word]),
            }
            accepted += 1;
        }

        debug!("word list: accepted {accepted} words, skipped {skipped} lines");
        info!("word list loaded: {} patterns", self.patterns.item_count());
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        let folded = word.to_ascii_uppercase();
        self.patterns
            .find(&word_pattern(&folded))
            .is_some_and(|bucket| bucket.iter().any(|w| *w == folded))
    }

    /// All dictionary words that could be what `cipher_word` decrypts to,
    /// given what is already known.
    ///
    /// `current_translation` is the cipher word rendered under the live
    /// mapping: known letters in place, [`UNKNOWN`] elsewhere, apostrophes
    /// verbatim. A candidate must share the cipher word's pattern and
    /// agree with the translation position by position — known letters
    /// match exactly, unknown positions hold a letter (never an
    /// apostrophe), apostrophes line up.
    ///
    /// Caller-contract violations — mismatched lengths, characters outside
    /// the allowed sets, or category-incompatible positions — yield an
    /// empty result indistinguishable from "no candidates".
    pub fn find_candidates(&self, cipher_word: &str, current_translation: &str) -> Vec<String> {
        let cipher: Vec<char> = cipher_word.to_ascii_uppercase().chars().collect();
        let translation: Vec<char> = current_translation.to_ascii_uppercase().chars().collect();

        if cipher.len() != translation.len()
            || cipher.iter().any(|&c| !c.is_cipher_letter() && !c.is_apostrophe())
            || translation
                .iter()
                .any(|&c| !c.is_cipher_letter() && !c.is_apostrophe() && !c.is_unknown())
            || !categories_line_up(&cipher, &translation)
        {
            return Vec::new();
        }

        let pattern = word_pattern(cipher_word);
        let Some(bucket) = self.patterns.find(&pattern) else {
            return Vec::new();
        };

        bucket
            .iter()
            .filter(|word| compatible_with_translation(word, &translation))
            .cloned()
            .collect()
    }
}

/// Per-position category compatibility between a cipher word and its
/// current translation: a letter or unknown in the translation demands a
/// letter in the cipher word, an apostrophe demands an apostrophe.
fn categories_line_up(cipher: &[char], translation: &[char]) -> bool {
    cipher.iter().zip(translation.iter()).all(|(&c, &t)| {
        if t.is_apostrophe() {
            c.is_apostrophe()
        } else {
            // t is a letter or the unknown marker
            c.is_cipher_letter()
        }
    })
}

/// Position-wise agreement between a same-pattern dictionary word and the
/// current translation.
fn compatible_with_translation(word: &str, translation: &[char]) -> bool {
    word.chars().zip(translation.iter()).all(|(w, &t)| {
        if t.is_cipher_letter() {
            w == t
        } else if t.is_unknown() {
            w.is_cipher_letter()
        } else {
            // t is an apostrophe
            w.is_apostrophe()
        }
    })
}
