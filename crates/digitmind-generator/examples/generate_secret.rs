//! Example printing generated secrets together with the seed that produced them.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_secret
//! ```
//!
//! Choose the length and duplicate policy:
//!
//! ```sh
//! cargo run --example generate_secret -- --digits 6 --allow-duplicates
//! ```
//!
//! Replay a secret from a seed, or derive the seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_secret -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! cargo run --example generate_secret -- --seed-phrase "tuesday puzzle"
//! ```

use std::process;

use clap::Parser;
use digitmind_generator::{SecretGenerator, SecretSeed, SeededSource};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of digits in the secret.
    #[arg(short, long, value_name = "COUNT", default_value_t = 4)]
    digits: usize,

    /// Allow a digit to appear more than once.
    #[arg(long)]
    allow_duplicates: bool,

    /// Seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<SecretSeed>,

    /// Passphrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// How many secrets to draw from the seeded stream.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();

    let generator = match SecretGenerator::new(args.digits, args.allow_duplicates) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid parameters: {e}");
            process::exit(2);
        }
    };

    let seed = match (args.seed, args.seed_phrase.as_deref()) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => SecretSeed::from_phrase(phrase),
        (None, None) => SecretSeed::random(),
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Secrets:");
    let mut source = SeededSource::new(seed);
    for i in 1..=args.count {
        println!("  {i}: {}", generator.generate_from(&mut source));
    }
}
