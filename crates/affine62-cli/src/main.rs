//! Command-line interface for `affine62`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use affine62_core::{char_of, encode, residue_of, validate, validate_multiplier, MODULUS};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Alphanumeric affine cipher CLI.
#[derive(Parser)]
#[command(
    name = "affine62",
    version,
    author,
    about = "Affine cipher over the 62-symbol alphanumeric alphabet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with a (multiplier, adder) key.
    Enc {
        /// Plaintext to encode (or use --input).
        text: Option<String>,
        /// Read the plaintext from a file instead.
        #[arg(long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,
        /// Multiplicative key component, 1..=61 and coprime with 62.
        #[arg(long, short = 'a')]
        multiplier: i64,
        /// Additive key component, 1..=61.
        #[arg(long, short = 'b')]
        adder: i64,
        /// Write the ciphertext to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Verify the cipher against its modular inverse for random samples.
    Check {
        /// Number of random (plaintext, key) samples to test.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: pick a random valid key, encode a phrase, invert it.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            text,
            input,
            multiplier,
            adder,
            output,
        } => cmd_enc(text, input.as_deref(), multiplier, adder, output.as_deref()),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(
    text: Option<String>,
    input: Option<&Path>,
    multiplier: i64,
    adder: i64,
    output: Option<&Path>,
) -> Result<()> {
    let plaintext = match (text, input) {
        (Some(text), None) => text,
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        (None, None) => bail!("provide plaintext as an argument or via --input"),
        (Some(_), Some(_)) => unreachable!("clap rejects text together with --input"),
    };

    // Report every failing field, not just the first.
    let violations = validate(&plaintext, multiplier, adder);
    if !violations.is_empty() {
        let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        bail!("invalid request: {}", messages.join("; "));
    }

    let ciphertext = encode(&plaintext, multiplier, adder)?;
    match output {
        Some(path) => fs::write(path, ciphertext)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{ciphertext}"),
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let valid_multipliers: Vec<i64> = (1..MODULUS)
        .filter(|a| validate_multiplier(*a).is_ok())
        .collect();
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let multiplier = *valid_multipliers
            .choose(&mut rng)
            .context("non-empty multiplier set")?;
        let adder = rng.gen_range(1..MODULUS);
        let len = rng.gen_range(1..=256usize);
        let plaintext: String = (0..len)
            .map(|_| rng.gen_range(b' '..=b'~') as char)
            .collect();

        let ciphertext = encode(&plaintext, multiplier, adder)?;
        if ciphertext.chars().count() != plaintext.chars().count() {
            bail!("ciphertext length diverged from plaintext length");
        }
        let recovered = invert(&ciphertext, multiplier, adder)?;
        if recovered != plaintext {
            bail!("modular inverse failed to recover the plaintext");
        }
    }
    println!("{samples} samples verified");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let valid_multipliers: Vec<i64> = (1..MODULUS)
        .filter(|a| validate_multiplier(*a).is_ok())
        .collect();
    let multiplier = *valid_multipliers
        .choose(&mut rng)
        .context("non-empty multiplier set")?;
    let adder = rng.gen_range(1..MODULUS);

    let plaintext = "The quick brown Fox jumps over 13 lazy Dogs!";
    let ciphertext = encode(plaintext, multiplier, adder)?;
    let recovered = invert(&ciphertext, multiplier, adder)?;

    println!("demo key: ({multiplier}, {adder})");
    println!("plaintext:  {plaintext}");
    println!("ciphertext: {ciphertext}");
    println!("recovered:  {recovered}");
    if recovered != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

/// Undoes the affine map with the multiplier's inverse mod 62.
///
/// The engine deliberately exposes no decode operation; the CLI derives one
/// here only to verify the forward transformation.
fn invert(ciphertext: &str, multiplier: i64, adder: i64) -> Result<String> {
    let inverse = (1..MODULUS)
        .find(|candidate| (multiplier * candidate) % MODULUS == 1)
        .context("multiplier has no inverse mod 62")?;
    ciphertext
        .chars()
        .map(|c| match residue_of(c) {
            Ok(y) => {
                let x = (inverse * (i64::from(y) - adder)).rem_euclid(MODULUS);
                char_of(x as u8).map_err(Into::into)
            }
            Err(_) => Ok(c),
        })
        .collect()
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
