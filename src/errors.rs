//! Error types for the translator and word-list loader, with error codes
//! and helpful messages.
//!
//! # Error Codes
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - M001: `LengthMismatch` (Cipher and plain fragments differ in length)
//! - M002: `NonLetterCipher` (Cipher fragment has a non-letter)
//! - M003: `NonLetterPlain` (Plain fragment has a non-letter)
//! - M004: `InconsistentPairing` (The fragment pair contradicts itself)
//! - M005: `ConflictsWithCurrent` (The pair conflicts with the live mapping)
//! - M006: `EmptyStack` (Pop on an empty mapping stack)
//! - D001: `Io` (Word-list file could not be read)
//!
//! Every mapping error means "rejected, nothing changed": the translator
//! guarantees no state mutation on any failed push, and a failed load
//! leaves the word list empty rather than half-populated.

use std::io;

/// Why a speculative mapping push (or a pop) was rejected.
///
/// All variants are recoverable "no state change" signals except
/// [`MappingError::EmptyStack`], which indicates a caller bug: the search
/// only pops what it pushed.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("cipher fragment ({cipher_len} letters) and plain fragment ({plain_len} letters) differ in length")]
    LengthMismatch { cipher_len: usize, plain_len: usize },

    #[error("cipher fragment contains non-letter '{invalid_char}'")]
    NonLetterCipher { invalid_char: char },

    #[error("plain fragment contains non-letter '{invalid_char}'")]
    NonLetterPlain { invalid_char: char },

    #[error("fragment pair is self-contradictory at cipher letter '{cipher}'")]
    InconsistentPairing { cipher: char },

    #[error("pair '{cipher}'→'{plain}' conflicts with the current mapping")]
    ConflictsWithCurrent { cipher: char, plain: char },

    #[error("pop on an empty mapping stack")]
    EmptyStack,
}

impl MappingError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MappingError::LengthMismatch { .. } => "M001",
            MappingError::NonLetterCipher { .. } => "M002",
            MappingError::NonLetterPlain { .. } => "M003",
            MappingError::InconsistentPairing { .. } => "M004",
            MappingError::ConflictsWithCurrent { .. } => "M005",
            MappingError::EmptyStack => "M006",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            MappingError::LengthMismatch { .. } => {
                Some("After stripping apostrophes, both fragments must pair up letter for letter")
            }
            MappingError::NonLetterCipher { .. } | MappingError::NonLetterPlain { .. } => {
                Some("Only letters participate in a mapping; punctuation other than apostrophes is not allowed in fragments")
            }
            MappingError::InconsistentPairing { .. } => {
                Some("A cipher letter cannot map to two plain letters, and two cipher letters cannot share a plain letter")
            }
            MappingError::ConflictsWithCurrent { .. } => {
                Some("The hypothesis contradicts letters already committed; try a different candidate")
            }
            MappingError::EmptyStack => {
                Some("Every pop must match an earlier successful push; this indicates a bug in the caller")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure to load a word-list corpus.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
}

impl LoadError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io(_) => "D001",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::Io(_) => {
                Some("Check that the word-list path exists and is readable; the dictionary is left empty after a failed load")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = MappingError::EmptyStack;
        assert_eq!(err.code(), "M006");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("M006"));
        assert!(detailed.contains("pop"));
    }

    /// Test that all `MappingError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<MappingError> = vec![
            MappingError::LengthMismatch { cipher_len: 3, plain_len: 4 },
            MappingError::NonLetterCipher { invalid_char: '3' },
            MappingError::NonLetterPlain { invalid_char: '!' },
            MappingError::InconsistentPairing { cipher: 'X' },
            MappingError::ConflictsWithCurrent { cipher: 'X', plain: 'E' },
            MappingError::EmptyStack,
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with('M'), "Error code '{code}' should start with 'M'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }

        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = MappingError::ConflictsWithCurrent { cipher: 'Q', plain: 'E' };
        let detailed = err.display_detailed();

        assert!(detailed.contains(err.code()));
        assert!(detailed.contains(&err.to_string()));
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }

    /// Error messages should carry the actual offending values.
    #[test]
    fn test_error_messages_are_actionable() {
        let err = MappingError::LengthMismatch { cipher_len: 5, plain_len: 3 };
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('3'));

        let err = MappingError::NonLetterCipher { invalid_char: '7' };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_load_error_wraps_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = LoadError::from(io_err);

        assert_eq!(err.code(), "D001");
        assert!(err.to_string().contains("no such file"));
        assert!(err.display_detailed().contains("D001"));
    }
}
