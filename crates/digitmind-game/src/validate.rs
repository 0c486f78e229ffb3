//! Guess validation.

use digitmind_core::{Digit, DigitSequence};

use crate::{GameConfig, GuessError};

/// Checks a raw guess against `config` and parses it.
///
/// Checks run in a fixed order, and the first failure is reported:
///
/// 1. The number of characters must equal the configured digit count.
/// 2. Every character must be an ASCII digit.
/// 3. When duplicates are disallowed, no digit may repeat.
///
/// The input is used as given; callers that want to ignore surrounding
/// whitespace trim it first.
///
/// # Errors
///
/// Returns the [`GuessError`] describing the first rule the guess breaks.
///
/// # Examples
///
/// ```
/// use digitmind_game::{GameConfig, GuessError, validate_guess};
///
/// let config = GameConfig::default();
/// assert!(validate_guess("1234", &config).is_ok());
/// assert_eq!(
///     validate_guess("123", &config),
///     Err(GuessError::LengthMismatch { expected: 4, actual: 3 }),
/// );
/// assert!(matches!(
///     validate_guess("1224", &config),
///     Err(GuessError::DuplicateDigits { .. }),
/// ));
/// ```
pub fn validate_guess(raw: &str, config: &GameConfig) -> Result<DigitSequence, GuessError> {
    let actual = raw.chars().count();
    if actual != config.digit_count() {
        return Err(GuessError::LengthMismatch {
            expected: config.digit_count(),
            actual,
        });
    }

    let guess = raw
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Digit::from_char(character).ok_or(GuessError::NonDigitCharacter {
                character,
                position,
            })
        })
        .collect::<Result<DigitSequence, _>>()?;

    if !config.allow_duplicates()
        && let Some(digit) = guess.first_duplicate()
    {
        return Err(GuessError::DuplicateDigits { digit });
    }

    Ok(guess)
}
