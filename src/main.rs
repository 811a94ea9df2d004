use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;

use quipcrack::solver::Decrypter;
use quipcrack::translator::Translator;

/// Cryptogram solver: crack (or produce) monoalphabetic substitution
/// ciphers against a word list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the word-list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt")
    )]
    word_list: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message with a freshly shuffled substitution alphabet
    Encrypt {
        /// The plaintext message, e.g. "Your message here."
        message: String,
    },
    /// Find every dictionary-consistent decryption of a cryptogram
    Decrypt {
        /// The ciphertext, e.g. "Uwey tirrboi miyi."
        message: String,
    },
}

/// Entry point of the quipcrack CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("QUIPCRACK_DEBUG").is_ok();
    quipcrack::log::init_logger(debug_enabled);

    log::info!("Starting quipcrack");

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps (decrypt):
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Crack the given ciphertext against it.
/// 4. Print each decryption on stdout, diagnostics on stderr.
///
/// The encrypt subcommand needs no word list: it shuffles an alphabet and
/// runs the translator in the encryption direction.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encrypt { message } => {
            println!("{}", encrypt(&message)?);
        }
        Command::Decrypt { message } => {
            let mut decrypter = Decrypter::new();

            let t_load = Instant::now();
            decrypter
                .load_from_path(&cli.word_list)
                .map_err(|e| e.display_detailed())?;
            let load_secs = t_load.elapsed().as_secs_f64();

            let t_crack = Instant::now();
            let solutions = decrypter.crack(&message);
            let crack_secs = t_crack.elapsed().as_secs_f64();

            for solution in &solutions {
                println!("{solution}");
            }

            if solutions.is_empty() {
                eprintln!("No dictionary-consistent decryption found.");
            }
            eprintln!(
                "Loaded word list in {load_secs:.3}s; cracked in {crack_secs:.3}s ({} decryptions).",
                solutions.len()
            );
        }
    }

    Ok(())
}

/// Encrypt `plaintext` under a random substitution alphabet by running a
/// translator in the opposite of its usual direction: the plain alphabet
/// is the "cipher" side, the shuffled alphabet the "plain" side.
fn encrypt(plaintext: &str) -> Result<String, Box<dyn std::error::Error>> {
    let plain_alphabet: String = ('a'..='z').collect();
    let mut cipher_alphabet: Vec<char> = plain_alphabet.chars().collect();
    cipher_alphabet.shuffle(&mut rand::thread_rng());
    let cipher_alphabet: String = cipher_alphabet.into_iter().collect();

    let mut translator = Translator::new();
    translator
        .push_mapping(&plain_alphabet, &cipher_alphabet)
        .map_err(|e| e.display_detailed())?;

    Ok(translator.get_translation(plaintext))
}
