use digitmind_core::Digit;
use digitmind_generator::GeneratorError;

/// Errors in game configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The digit count is outside the supported range.
    #[display("digit count must be between 1 and 10, got {digit_count}")]
    #[from(ignore)]
    DigitCountOutOfRange {
        /// The rejected digit count.
        digit_count: usize,
    },
    /// No secret satisfies the digit count and duplicate policy.
    #[display("{_0}")]
    Infeasible(GeneratorError),
    /// The text does not describe an attempt limit.
    #[display("invalid attempt limit {input:?}: expected a positive number or \"unbounded\"")]
    #[from(ignore)]
    InvalidAttemptLimit {
        /// The rejected input.
        input: String,
    },
}

/// Reasons a guess is rejected before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    /// The guess has the wrong number of characters.
    #[display("please enter exactly {expected} digit{}", if *expected == 1 { "" } else { "s" })]
    LengthMismatch {
        /// The configured digit count.
        expected: usize,
        /// Number of characters in the guess.
        actual: usize,
    },
    /// The guess contains something other than `0`-`9`.
    #[display("only digits 0-9 are allowed, found {character:?}")]
    NonDigitCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the guess.
        position: usize,
    },
    /// The guess repeats a digit while duplicates are disallowed.
    #[display("all digits must be different, {digit} appears more than once")]
    DuplicateDigits {
        /// The first digit found twice.
        digit: Digit,
    },
}

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The requested configuration is invalid.
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
    /// The guess failed validation; no attempt was consumed.
    #[display("invalid guess: {_0}")]
    InvalidGuess(GuessError),
    /// The game has already been won or lost.
    #[display("the game is already over")]
    #[from(ignore)]
    GameAlreadyOver,
    /// No game has been started yet.
    #[display("no game has been started")]
    #[from(ignore)]
    GameNotStarted,
}
