//! Integration tests for the quipcrack cryptogram solver.
//!
//! These tests verify the complete pipeline from word-list loading through
//! the backtracking search to result ordering, using a realistic fixture
//! corpus as well as small inline corpora for precise assertions.

use quipcrack::solver::Decrypter;
use quipcrack::translator::Translator;
use quipcrack::word_list::WordList;

const FIXTURE_PATH: &str = "tests/fixtures/word_list.txt";

/// Decrypter over a small inline corpus.
fn decrypter_with(corpus: &str) -> Decrypter {
    let mut d = Decrypter::new();
    d.load_from_str(corpus);
    d
}

mod loading {
    use super::*;

    #[test]
    fn test_fixture_loads_and_answers_membership() {
        let mut wl = WordList::new();
        wl.load_from_path(FIXTURE_PATH).unwrap();

        assert!(wl.contains("the"));
        assert!(wl.contains("GOOD"));
        assert!(wl.contains("don't"));
        // Lines with spaces, digits, or hyphens are skipped at load time.
        assert!(!wl.contains("bad word"));
        assert!(!wl.contains("num3er"));
        assert!(!wl.contains("hyphen"));
    }

    #[test]
    fn test_failed_load_leaves_empty_dictionary_and_crack_finds_nothing() {
        let mut decrypter = Decrypter::new();
        decrypter.load_from_str("dog\n");

        let result = decrypter.load_from_path("tests/fixtures/no-such-file.txt");
        assert!(result.is_err());

        // The earlier corpus is gone, not partially retained.
        assert!(decrypter.crack("XYZ").is_empty());
    }
}

mod cracking {
    use super::*;

    #[test]
    fn test_linked_words_pin_down_a_unique_decryption() {
        let mut decrypter = Decrypter::new();
        decrypter.load_from_path(FIXTURE_PATH).unwrap();

        // "XYYZ ZYX" is "GOOD DOG" under G→X, O→Y, D→Z; the shared
        // letters leave no alternative assignment.
        assert_eq!(decrypter.crack("XYYZ ZYX"), vec!["GOOD DOG"]);
    }

    #[test]
    fn test_the_dog_cryptogram_end_to_end() {
        let decrypter = decrypter_with("dog\ncat\nthe\n");

        // "UIF EPH" is "THE DOG" shifted by one. The two cipher words
        // share no letters, so every pairing of distinct corpus words is
        // consistent; the true plaintext must be among them.
        let solutions = decrypter.crack("UIF EPH");
        assert!(solutions.contains(&"THE DOG".to_string()));
        assert_eq!(
            solutions,
            vec!["CAT DOG", "CAT THE", "DOG CAT", "DOG THE", "THE CAT", "THE DOG"]
        );
    }

    #[test]
    fn test_ambiguous_cryptogram_enumerates_every_alternative() {
        // Candidate "ON" for the first word dead-ends only after a
        // recursive step; "AT" afterwards must still see a clean mapping.
        // Losing it would mean the search leaks state between siblings.
        let decrypter = decrypter_with("to\non\nat\n");
        assert_eq!(decrypter.crack("AB BC"), vec!["AT TO", "TO ON"]);
    }

    #[test]
    fn test_crack_preserves_case_and_punctuation() {
        let decrypter = decrypter_with("good\ndog\n");
        assert_eq!(decrypter.crack("Xyyz, zyx!"), vec!["Good, dog!"]);
    }

    #[test]
    fn test_contractions_crack_with_apostrophes_intact() {
        let decrypter = decrypter_with("don't\nstop\n");
        assert_eq!(decrypter.crack("ABC'D EDBF"), vec!["DON'T STOP"]);
    }

    #[test]
    fn test_word_absent_from_corpus_yields_no_solutions() {
        let mut decrypter = Decrypter::new();
        decrypter.load_from_path(FIXTURE_PATH).unwrap();

        // No four-distinct-letter corpus word reads the same reversed, so
        // the joint constraint is unsatisfiable.
        assert!(decrypter.crack("WXYZ ZYXW").is_empty());
    }

    #[test]
    fn test_crack_is_idempotent() {
        let mut decrypter = Decrypter::new();
        decrypter.load_from_path(FIXTURE_PATH).unwrap();

        let first = decrypter.crack("UIF EPH");
        let second = decrypter.crack("UIF EPH");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

mod round_trip {
    use super::*;

    /// Encrypt with a translator run in the encryption direction (plain
    /// alphabet on the cipher side), then crack the result: the original
    /// plaintext must be among the decryptions.
    #[test]
    fn test_encrypt_then_crack_recovers_plaintext() {
        let plain_alphabet: String = ('a'..='z').collect();
        // A fixed rotation keeps the test deterministic.
        let cipher_alphabet = "nopqrstuvwxyzabcdefghijklm";

        let mut encryptor = Translator::new();
        encryptor.push_mapping(&plain_alphabet, cipher_alphabet).unwrap();
        let ciphertext = encryptor.get_translation("the good dog");
        assert_eq!(ciphertext, "gur tbbq qbt");

        let mut decrypter = Decrypter::new();
        decrypter.load_from_path(FIXTURE_PATH).unwrap();
        let solutions = decrypter.crack(&ciphertext);
        assert!(solutions.contains(&"the good dog".to_string()));
    }
}
