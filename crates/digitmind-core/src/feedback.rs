//! Guess feedback and the scoring rule.

use std::fmt;

use crate::DigitSequence;

/// Feedback for one guess against the secret.
///
/// The three counts always add up to the number of digits in the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    correct_position: usize,
    wrong_position: usize,
    wrong_number: usize,
}

impl Feedback {
    /// Scores `guess` against `secret`.
    ///
    /// - `correct_position`: positions where guess and secret agree.
    /// - `wrong_position`: guess positions whose digit occurs somewhere in the
    ///   secret, minus the exact matches.
    /// - `wrong_number`: guess positions whose digit does not occur in the
    ///   secret at all.
    ///
    /// Presence is checked per guess position, not by multiset intersection.
    /// With duplicates, secret `1123` and guess `1111` give `(2, 2, 0)`: every
    /// guessed `1` counts as present even though the secret holds only two.
    ///
    /// # Panics
    ///
    /// Panics if `secret` and `guess` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitmind_core::{DigitSequence, Feedback};
    ///
    /// let secret: DigitSequence = "1234".parse().unwrap();
    /// let guess: DigitSequence = "5678".parse().unwrap();
    /// assert_eq!(Feedback::score(&secret, &guess).as_tuple(), (0, 0, 4));
    /// ```
    #[must_use]
    pub fn score(secret: &DigitSequence, guess: &DigitSequence) -> Self {
        assert_eq!(
            secret.len(),
            guess.len(),
            "secret and guess must have the same length"
        );

        let correct_position = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count();

        let secret_digits = secret.digit_set();
        let correct_number = guess
            .digits()
            .iter()
            .filter(|&&g| secret_digits.contains(g))
            .count();

        Self {
            correct_position,
            wrong_position: correct_number - correct_position,
            wrong_number: guess.len() - correct_number,
        }
    }

    /// Number of digits correct in value and position.
    #[must_use]
    pub const fn correct_position(&self) -> usize {
        self.correct_position
    }

    /// Number of digits present in the secret but placed elsewhere.
    #[must_use]
    pub const fn wrong_position(&self) -> usize {
        self.wrong_position
    }

    /// Number of digits absent from the secret.
    #[must_use]
    pub const fn wrong_number(&self) -> usize {
        self.wrong_number
    }

    /// Total number of digits the feedback covers.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.correct_position + self.wrong_position + self.wrong_number
    }

    /// Returns whether every digit was in its correct position.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.correct_position == self.digit_count()
    }

    /// Returns `(correct_position, wrong_position, wrong_number)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (
            self.correct_position,
            self.wrong_position,
            self.wrong_number,
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correct, {} misplaced, {} absent",
            self.correct_position, self.wrong_position, self.wrong_number
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Digit;

    fn seq(s: &str) -> DigitSequence {
        s.parse().expect("valid digit sequence")
    }

    #[test]
    fn test_swapped_pair() {
        let feedback = Feedback::score(&seq("1234"), &seq("1243"));
        assert_eq!(feedback.as_tuple(), (2, 2, 0));
        assert!(!feedback.is_solved());
    }

    #[test]
    fn test_disjoint_digits() {
        let feedback = Feedback::score(&seq("1234"), &seq("5678"));
        assert_eq!(feedback.as_tuple(), (0, 0, 4));
    }

    #[test]
    fn test_exact_match() {
        let feedback = Feedback::score(&seq("0987"), &seq("0987"));
        assert_eq!(feedback.as_tuple(), (4, 0, 0));
        assert!(feedback.is_solved());
    }

    #[test]
    fn test_repeated_guess_digits_each_count_as_present() {
        assert_eq!(
            Feedback::score(&seq("1123"), &seq("1111")).as_tuple(),
            (2, 2, 0)
        );
        // Only one 5 in the secret, yet all three guessed 5s are "present".
        assert_eq!(
            Feedback::score(&seq("5012"), &seq("5559")).as_tuple(),
            (1, 2, 1)
        );
    }

    #[test]
    fn test_repeated_secret_digits() {
        assert_eq!(
            Feedback::score(&seq("7777"), &seq("7123")).as_tuple(),
            (1, 0, 3)
        );
    }

    #[test]
    fn test_display() {
        let feedback = Feedback::score(&seq("123"), &seq("321"));
        assert_eq!(feedback.to_string(), "1 correct, 2 misplaced, 0 absent");
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let _ = Feedback::score(&seq("123"), &seq("1234"));
    }

    fn digit_strategy() -> impl Strategy<Value = Digit> {
        (0u8..10).prop_map(Digit::from_value)
    }

    fn pair_strategy() -> impl Strategy<Value = (DigitSequence, DigitSequence)> {
        (1usize..=10).prop_flat_map(|len| {
            (
                prop::collection::vec(digit_strategy(), len),
                prop::collection::vec(digit_strategy(), len),
            )
                .prop_map(|(s, g)| (DigitSequence::new(s), DigitSequence::new(g)))
        })
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_length((secret, guess) in pair_strategy()) {
            let feedback = Feedback::score(&secret, &guess);
            prop_assert_eq!(feedback.digit_count(), guess.len());
        }

        #[test]
        fn prop_solved_iff_equal((secret, guess) in pair_strategy()) {
            let feedback = Feedback::score(&secret, &guess);
            prop_assert_eq!(feedback.is_solved(), secret == guess);
        }

        #[test]
        fn prop_self_score_is_perfect(
            digits in prop::collection::vec(digit_strategy(), 1..=10)
        ) {
            let secret = DigitSequence::new(digits);
            let feedback = Feedback::score(&secret, &secret);
            prop_assert_eq!(feedback.as_tuple(), (secret.len(), 0, 0));
        }
    }
}
