//! The letter-mapping store: a stack of substitution snapshots with
//! speculative extension and exact rollback.
//!
//! The solver treats the [`Translator`] as its single piece of mutable
//! search state. Each hypothesis ("this cipher word is that dictionary
//! word") is a [`Translator::push_mapping`]; abandoning the hypothesis is a
//! [`Translator::pop_mapping`]. A rejected push changes nothing, so the
//! caller never has to repair state after a conflict.
//!
//! Mappings are bidirectional: alongside the cipher→plain table a
//! plain→cipher reverse table is kept, so the injectivity probe (no two
//! cipher letters sharing a plain letter) is a single slot read instead of
//! a scan.

use crate::errors::MappingError;
use crate::quip_char::{letter_index, QuipChar, ALPHABET_SIZE, UNKNOWN};

/// One total substitution snapshot: cipher letter → plain letter, with the
/// reverse direction mirrored. Slots are uppercase bytes; `None` = unknown.
///
/// Fixed arrays rather than a map: the domain is exactly the 26 ASCII
/// letters, so clone-on-push is a 52-byte copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LetterMapping {
    forward: [Option<u8>; ALPHABET_SIZE],
    reverse: [Option<u8>; ALPHABET_SIZE],
}

impl LetterMapping {
    /// The fully-unknown mapping.
    pub(crate) const EMPTY: LetterMapping = LetterMapping {
        forward: [None; ALPHABET_SIZE],
        reverse: [None; ALPHABET_SIZE],
    };

    /// Plain letter currently assigned to `cipher` (uppercase), if any.
    /// Non-letter input is a caller error and simply reads as unknown.
    pub(crate) fn plain_for(&self, cipher: char) -> Option<char> {
        letter_index(cipher)
            .and_then(|ix| self.forward[ix])
            .map(char::from)
    }

    /// Bind `cipher`→`plain` (case-folded), failing if either direction of
    /// the pair is already committed to a different partner. Binding an
    /// identical existing pair is a no-op success.
    ///
    /// Both arguments must be ASCII letters; [`Translator::push_mapping`]
    /// validates fragments before any binding is attempted.
    fn try_bind(&mut self, cipher: char, plain: char) -> bool {
        let (Some(ci), Some(pi)) = (letter_index(cipher), letter_index(plain)) else {
            return false;
        };
        let c = b'A' + ci as u8;
        let p = b'A' + pi as u8;

        if self.forward[ci].is_some_and(|prev| prev != p) {
            return false; // cipher letter already maps elsewhere
        }
        if self.reverse[pi].is_some_and(|prev| prev != c) {
            return false; // plain letter already taken by another cipher letter
        }

        self.forward[ci] = Some(p);
        self.reverse[pi] = Some(c);
        true
    }
}

/// Stack of [`LetterMapping`] snapshots; "current" = top, or the
/// fully-unknown default when the stack is empty.
///
/// Created once per search and owned by it exclusively.
#[derive(Debug, Default)]
pub struct Translator {
    stack: Vec<LetterMapping>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speculatively extend the current mapping with the letter pairs
    /// implied by aligning `cipher_fragment` against `plain_fragment`.
    ///
    /// Apostrophes are stripped from both fragments first. The push is
    /// rejected — with no state change whatsoever — if the stripped
    /// fragments differ in length, contain non-letters, contradict
    /// themselves, or contradict the mapping currently on top of the
    /// stack. Checks are case-insensitive throughout.
    ///
    /// On success a new snapshot (current top overlaid with the new pairs)
    /// becomes the current mapping.
    ///
    /// # Errors
    ///
    /// Returns the first [`MappingError`] encountered; callers that only
    /// care about accept/reject can treat the `Err` as a boolean.
    pub fn push_mapping(&mut self, cipher_fragment: &str, plain_fragment: &str) -> Result<(), MappingError> {
        let cipher: Vec<char> = cipher_fragment.chars().filter(|c| !c.is_apostrophe()).collect();
        let plain: Vec<char> = plain_fragment.chars().filter(|c| !c.is_apostrophe()).collect();

        if cipher.len() != plain.len() {
            return Err(MappingError::LengthMismatch {
                cipher_len: cipher.len(),
                plain_len: plain.len(),
            });
        }
        if let Some(&bad) = cipher.iter().find(|c| !c.is_cipher_letter()) {
            return Err(MappingError::NonLetterCipher { invalid_char: bad });
        }
        if let Some(&bad) = plain.iter().find(|c| !c.is_cipher_letter()) {
            return Err(MappingError::NonLetterPlain { invalid_char: bad });
        }

        // First pass: the fragment pair must be consistent on its own
        // (functional and injective within itself).
        let mut fragment_only = LetterMapping::EMPTY;
        for (&c, &p) in cipher.iter().zip(plain.iter()) {
            if !fragment_only.try_bind(c, p) {
                return Err(MappingError::InconsistentPairing {
                    cipher: c.to_ascii_uppercase(),
                });
            }
        }

        // Second pass: overlay onto a copy of the current top. Any clash
        // with existing entries rejects the push; the copy is simply
        // dropped, so the stack is untouched.
        let mut derived = self.current().clone();
        for (&c, &p) in cipher.iter().zip(plain.iter()) {
            if !derived.try_bind(c, p) {
                return Err(MappingError::ConflictsWithCurrent {
                    cipher: c.to_ascii_uppercase(),
                    plain: p.to_ascii_uppercase(),
                });
            }
        }

        self.stack.push(derived);
        Ok(())
    }

    /// Remove the top snapshot, restoring the previous one (or the default
    /// mapping if none remain) as current.
    ///
    /// # Errors
    ///
    /// Fails with [`MappingError::EmptyStack`] if nothing was pushed —
    /// a caller-invariant violation, never hit by the search itself.
    pub fn pop_mapping(&mut self) -> Result<(), MappingError> {
        self.stack.pop().map(|_| ()).ok_or(MappingError::EmptyStack)
    }

    /// Render `text` under the current mapping: every letter is looked up
    /// case-insensitively and rendered in the input character's case, with
    /// [`UNKNOWN`] for unmapped letters; non-letters pass through verbatim.
    pub fn get_translation(&self, text: &str) -> String {
        let current = self.current();
        text.chars()
            .map(|ch| {
                if !ch.is_cipher_letter() {
                    return ch;
                }
                match current.plain_for(ch) {
                    Some(plain) if ch.is_ascii_lowercase() => plain.to_ascii_lowercase(),
                    Some(plain) => plain,
                    None => UNKNOWN,
                }
            })
            .collect()
    }

    fn current(&self) -> &LetterMapping {
        self.stack.last().unwrap_or(&LetterMapping::EMPTY)
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}
