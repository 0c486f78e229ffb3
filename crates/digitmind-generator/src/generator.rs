use digitmind_core::{Digit, DigitSequence};

use crate::{DigitSource, SecretSeed, SeededSource};

/// Errors reported when a generator cannot satisfy its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// A secret must contain at least one digit.
    #[display("secret must contain at least one digit")]
    EmptySecret,
    /// Distinct digits were requested but there are only ten of them.
    #[display("cannot pick {digit_count} distinct digits, only 10 exist")]
    NotEnoughDistinctDigits {
        /// The requested secret length.
        digit_count: usize,
    },
}

/// Draws secrets of a fixed length and duplicate policy.
///
/// With duplicates allowed, each position is an independent uniform digit.
/// Without, digits are drawn from a shrinking pool so that every ordered
/// selection of distinct digits is equally likely.
///
/// # Examples
///
/// ```
/// use digitmind_generator::{GeneratorError, SecretGenerator};
///
/// let secret = SecretGenerator::new(6, true).unwrap().generate();
/// assert_eq!(secret.len(), 6);
///
/// assert_eq!(
///     SecretGenerator::new(11, false).unwrap_err(),
///     GeneratorError::NotEnoughDistinctDigits { digit_count: 11 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretGenerator {
    digit_count: usize,
    allow_duplicates: bool,
}

impl SecretGenerator {
    /// Creates a generator for secrets of `digit_count` digits.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptySecret`] if `digit_count` is zero, and
    /// [`GeneratorError::NotEnoughDistinctDigits`] if duplicates are
    /// disallowed and `digit_count` exceeds 10.
    pub fn new(digit_count: usize, allow_duplicates: bool) -> Result<Self, GeneratorError> {
        if digit_count == 0 {
            return Err(GeneratorError::EmptySecret);
        }
        if !allow_duplicates && digit_count > Digit::COUNT {
            return Err(GeneratorError::NotEnoughDistinctDigits { digit_count });
        }
        Ok(Self {
            digit_count,
            allow_duplicates,
        })
    }

    /// Length of the secrets this generator produces.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Whether secrets may repeat a digit.
    #[must_use]
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Generates a secret from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> DigitSequence {
        self.generate_from(&mut SeededSource::from_random_seed())
    }

    /// Generates the secret determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: SecretSeed) -> DigitSequence {
        self.generate_from(&mut SeededSource::new(seed))
    }

    /// Generates a secret using draws from `source`.
    ///
    /// Exactly `digit_count` draws are taken: bound 10 for every draw when
    /// duplicates are allowed, otherwise bounds 10, 9, 8, ... over the
    /// remaining pool (kept in ascending order).
    pub fn generate_from<S>(&self, source: &mut S) -> DigitSequence
    where
        S: DigitSource + ?Sized,
    {
        if self.allow_duplicates {
            return (0..self.digit_count)
                .map(|_| Digit::ALL[source.next_below(Digit::COUNT)])
                .collect();
        }

        let mut pool = Digit::ALL.to_vec();
        (0..self.digit_count)
            .map(|_| pool.remove(source.next_below(pool.len())))
            .collect()
    }
}
