//! Game configuration.

use std::{fmt, num::NonZero, str::FromStr};

use digitmind_generator::SecretGenerator;

use crate::ConfigError;

/// How many guesses a player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum AttemptLimit {
    /// The game only ends when the secret is guessed.
    Unbounded,
    /// The game is lost after this many incorrect guesses.
    Limited(NonZero<u32>),
}

impl AttemptLimit {
    /// Creates a finite limit.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is zero.
    #[must_use]
    pub const fn limited(attempts: u32) -> Self {
        match NonZero::new(attempts) {
            Some(attempts) => Self::Limited(attempts),
            None => panic!("attempt limit must be positive"),
        }
    }

    /// Returns the finite limit, or `None` when unbounded.
    #[must_use]
    pub fn get(self) -> Option<u32> {
        match self {
            Self::Unbounded => None,
            Self::Limited(n) => Some(n.get()),
        }
    }

    /// Returns whether `attempts` guesses exhaust this limit.
    #[must_use]
    pub fn is_exhausted_by(self, attempts: usize) -> bool {
        self.get()
            .is_some_and(|limit| attempts >= usize::try_from(limit).unwrap_or(usize::MAX))
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Limited(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl FromStr for AttemptLimit {
    type Err = ConfigError;

    /// Parses a positive integer, or one of `unbounded`, `infinite`, `inf`, `∞`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if ["unbounded", "infinite", "inf", "∞"]
            .iter()
            .any(|word| trimmed.eq_ignore_ascii_case(word))
        {
            return Ok(Self::Unbounded);
        }
        trimmed
            .parse::<NonZero<u32>>()
            .map(Self::Limited)
            .map_err(|_| ConfigError::InvalidAttemptLimit {
                input: s.to_owned(),
            })
    }
}

/// Settings for a game.
///
/// Only [`GameConfig::new`] creates a configuration, so a value of this type
/// is always playable.
///
/// # Examples
///
/// ```
/// use digitmind_game::{AttemptLimit, ConfigError, GameConfig};
///
/// let config = GameConfig::default();
/// assert_eq!(config.digit_count(), 4);
/// assert!(!config.allow_duplicates());
/// assert_eq!(config.attempt_limit(), AttemptLimit::limited(10));
///
/// assert!(matches!(
///     GameConfig::new(11, true, AttemptLimit::Unbounded),
///     Err(ConfigError::DigitCountOutOfRange { digit_count: 11 }),
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    generator: SecretGenerator,
    attempt_limit: AttemptLimit,
}

impl GameConfig {
    /// Smallest supported secret length.
    pub const MIN_DIGIT_COUNT: usize = 1;
    /// Largest supported secret length.
    pub const MAX_DIGIT_COUNT: usize = 10;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DigitCountOutOfRange`] if `digit_count` is not in
    /// `MIN_DIGIT_COUNT..=MAX_DIGIT_COUNT`, and [`ConfigError::Infeasible`] if
    /// no secret can satisfy the duplicate policy.
    pub fn new(
        digit_count: usize,
        allow_duplicates: bool,
        attempt_limit: AttemptLimit,
    ) -> Result<Self, ConfigError> {
        if !(Self::MIN_DIGIT_COUNT..=Self::MAX_DIGIT_COUNT).contains(&digit_count) {
            return Err(ConfigError::DigitCountOutOfRange { digit_count });
        }
        let generator = SecretGenerator::new(digit_count, allow_duplicates)?;
        Ok(Self {
            generator,
            attempt_limit,
        })
    }

    /// Number of digits in the secret and in each guess.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.generator.digit_count()
    }

    /// Whether the secret and guesses may repeat digits.
    #[must_use]
    pub fn allow_duplicates(&self) -> bool {
        self.generator.allow_duplicates()
    }

    /// The generator producing secrets for these settings.
    #[must_use]
    pub fn secret_generator(&self) -> &SecretGenerator {
        &self.generator
    }

    /// The attempt budget.
    #[must_use]
    pub fn attempt_limit(&self) -> AttemptLimit {
        self.attempt_limit
    }

    /// Returns the sentence introducing a game with these settings.
    ///
    /// ```
    /// use digitmind_game::GameConfig;
    ///
    /// assert_eq!(
    ///     GameConfig::default().describe(),
    ///     "I'm thinking of a 4-digit number (no duplicates). Can you guess it?",
    /// );
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let duplicates = if self.allow_duplicates() {
            "duplicates allowed"
        } else {
            "no duplicates"
        };
        format!(
            "I'm thinking of a {}-digit number ({duplicates}). Can you guess it?",
            self.digit_count()
        )
    }

    /// Returns placeholder text for a guess input box.
    ///
    /// ```
    /// use digitmind_game::{AttemptLimit, GameConfig};
    ///
    /// let config = GameConfig::new(1, true, AttemptLimit::Unbounded).unwrap();
    /// assert_eq!(config.input_hint(), "Enter 1 digit (duplicates allowed)");
    /// ```
    #[must_use]
    pub fn input_hint(&self) -> String {
        let digit_count = self.digit_count();
        let plural = if digit_count > 1 { "s" } else { "" };
        let duplicates = if self.allow_duplicates() {
            " (duplicates allowed)"
        } else {
            ""
        };
        format!("Enter {digit_count} digit{plural}{duplicates}")
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, false, AttemptLimit::limited(10)).expect("default configuration is valid")
    }
}
