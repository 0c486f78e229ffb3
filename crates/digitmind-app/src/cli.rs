//! Command-line flags of the `digitmind` binary.

use clap::Parser;
use digitmind_game::{AttemptLimit, ConfigError, GameConfig};
use digitmind_generator::SecretSeed;

/// Guess the secret number, Mastermind style.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of digits in the secret (1-10).
    #[arg(short, long, value_name = "COUNT", default_value_t = 4)]
    pub digits: usize,

    /// Allow a digit to appear more than once.
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Guesses per game, or `unbounded`.
    #[arg(short, long, value_name = "N|unbounded", default_value_t = AttemptLimit::limited(10))]
    pub max_attempts: AttemptLimit,

    /// Seed as 64 hex characters, for reproducible secrets.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<SecretSeed>,

    /// Passphrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,
}

impl Cli {
    /// Builds the initial game configuration from the flags.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.digits, self.allow_duplicates, self.max_attempts)
    }

    /// Returns the requested seed, or `None` if secrets should be random.
    #[must_use]
    pub fn seed(&self) -> Option<SecretSeed> {
        match (self.seed, self.seed_phrase.as_deref()) {
            (Some(seed), _) => Some(seed),
            (None, Some(phrase)) => Some(SecretSeed::from_phrase(phrase)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_defaults() {
        let cli = Cli::try_parse_from(["digitmind"]).unwrap();
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.seed(), None);
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::try_parse_from([
            "digitmind",
            "--digits",
            "6",
            "--allow-duplicates",
            "--max-attempts",
            "unbounded",
            "--seed-phrase",
            "tuesday",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.digit_count(), 6);
        assert!(config.allow_duplicates());
        assert_eq!(config.attempt_limit(), AttemptLimit::Unbounded);
        assert_eq!(cli.seed(), Some(SecretSeed::from_phrase("tuesday")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["digitmind", "--max-attempts", "0"]).is_err());
        assert!(Cli::try_parse_from(["digitmind", "--seed", "abc"]).is_err());
        let zeros = "0".repeat(64);
        assert!(Cli::try_parse_from(["digitmind", "--seed", zeros.as_str()]).is_ok());
        assert!(
            Cli::try_parse_from(["digitmind", "--seed", zeros.as_str(), "--seed-phrase", "x"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["digitmind", "--digits", "11"]).unwrap();
        assert_eq!(
            cli.game_config(),
            Err(ConfigError::DigitCountOutOfRange { digit_count: 11 })
        );
    }
}
