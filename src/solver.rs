//! The decrypter: dictionary-constrained backtracking over letter
//! substitutions.
//!
//! The search walks one shared [`Translator`] (the mapping stack) through
//! a depth-first traversal of word hypotheses. At each frame it picks the
//! ciphertext word with the most unknown letters, asks the [`WordList`]
//! for every dictionary word that could still match it, and tries each
//! in turn: push the implied letter pairs, prune if any fully-resolved
//! word in the new translation is not in the dictionary, record the
//! translation if it is complete and clean, recurse otherwise — and in
//! every case pop before moving to the next candidate. Each frame returns
//! with exactly the mapping state it entered with; that balance is what
//! makes sibling candidates independent of each other and the enumeration
//! complete.
//!
//! # Examples
//!
//! ```
//! use quipcrack::solver::Decrypter;
//!
//! let mut decrypter = Decrypter::new();
//! decrypter.load_from_str("good\ndog\ncat\n");
//!
//! // "XYYZ ZYX" is "GOOD DOG" under G→X, O→Y, D→Z.
//! let solutions = decrypter.crack("XYYZ ZYX");
//! assert_eq!(solutions, vec!["GOOD DOG"]);
//! ```

use crate::errors::LoadError;
use crate::quip_char::QuipChar;
use crate::tokenizer::Tokenizer;
use crate::translator::Translator;
use crate::word_list::WordList;

use log::debug;
use std::path::Path;

/// Cracks monoalphabetic substitution ciphers against a loaded word list.
///
/// Owns the dictionary and the tokenizer; every [`Decrypter::crack`] call
/// runs on a fresh mapping stack of its own, so the type is reusable
/// across cracks and the dictionary is read-only after loading.
#[derive(Debug, Default)]
pub struct Decrypter {
    word_list: WordList,
    tokenizer: Tokenizer,
}

impl Decrypter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the word-list corpus from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read; the dictionary is
    /// left empty in that case (a subsequent [`Decrypter::crack`] simply
    /// finds nothing).
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.word_list.load_from_path(path)
    }

    /// Load the word-list corpus from an in-memory string.
    pub fn load_from_str(&mut self, contents: &str) {
        self.word_list.load_from_str(contents);
    }

    /// Find every complete decryption of `ciphertext` consistent with the
    /// loaded dictionary, lexicographically sorted.
    ///
    /// A decryption qualifies when a single one-to-one letter substitution
    /// resolves every letter of the ciphertext and every resulting word is
    /// in the dictionary. All qualifying substitutions are enumerated; an
    /// empty result means none exist (including the nothing-loaded case).
    pub fn crack(&self, ciphertext: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(ciphertext);
        debug!("cracking {} tokens", tokens.len());

        let mut solutions = Vec::new();
        if tokens.is_empty() {
            return solutions;
        }

        let mut translator = Translator::new();
        self.crack_from(ciphertext, &tokens, &mut translator, &mut solutions);
        debug!("search finished: {} solutions", solutions.len());

        solutions.sort();
        solutions
    }

    /// One frame of the depth-first search. On return the translator holds
    /// exactly the state it held on entry.
    fn crack_from(
        &self,
        ciphertext: &str,
        tokens: &[&str],
        translator: &mut Translator,
        solutions: &mut Vec<String>,
    ) {
        // Resolve the word we know least about; if everything is resolved
        // the caller has already recorded (or pruned) this state.
        let Some(target) = most_unknown_token(tokens, translator) else {
            return;
        };

        let current = translator.get_translation(target);
        for candidate in self.word_list.find_candidates(target, &current) {
            if translator.push_mapping(target, &candidate).is_err() {
                // Hypothesis conflicts with committed letters; nothing was
                // changed, move on to the next candidate.
                continue;
            }

            let translation = translator.get_translation(ciphertext);
            if self.contains_invalid_word(&translation) {
                // Some fully-resolved word is not in the dictionary: no
                // extension of this hypothesis can recover.
            } else if is_fully_resolved(&translation) {
                solutions.push(translation);
            } else {
                self.crack_from(ciphertext, tokens, translator, solutions);
            }

            let popped = translator.pop_mapping();
            debug_assert!(popped.is_ok(), "each frame pops only the mapping it pushed");
        }
    }

    /// True if the translation holds a fully-resolved word that is not in
    /// the dictionary. Words still containing unknowns are given the
    /// benefit of the doubt.
    fn contains_invalid_word(&self, translation: &str) -> bool {
        resolved_words(translation)
            .iter()
            .any(|word| !self.word_list.contains(word))
    }
}

/// The token whose current translation has the most unknown letters, ties
/// going to the earliest token. `None` when every token is fully resolved.
fn most_unknown_token<'a>(tokens: &[&'a str], translator: &Translator) -> Option<&'a str> {
    let mut best: Option<&str> = None;
    let mut best_unknowns = 0usize;

    for &token in tokens {
        let unknowns = translator
            .get_translation(token)
            .chars()
            .filter(|c| c.is_unknown())
            .count();
        if unknowns > best_unknowns {
            best = Some(token);
            best_unknowns = unknowns;
        }
    }

    best
}

/// No unknown markers anywhere in the translation.
fn is_fully_resolved(translation: &str) -> bool {
    !translation.chars().any(|c| c.is_unknown())
}

/// Maximal runs of letters/apostrophes/unknowns in `translation`, keeping
/// only the runs with no unknowns: the words whose dictionary fate is
/// already sealed.
fn resolved_words(translation: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut run = String::new();
    let mut run_resolved = true;

    for ch in translation.chars() {
        if ch.is_cipher_letter() || ch.is_apostrophe() || ch.is_unknown() {
            run.push(ch);
            run_resolved &= !ch.is_unknown();
        } else {
            if !run.is_empty() && run_resolved {
                words.push(std::mem::take(&mut run));
            }
            run.clear();
            run_resolved = true;
        }
    }
    if !run.is_empty() && run_resolved {
        words.push(run);
    }

    words
}
