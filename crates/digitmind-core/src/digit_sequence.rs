//! Ordered digit sequences: secrets and guesses.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet};

/// An ordered sequence of digits.
///
/// Both the hidden secret and every player guess are represented by this
/// type. Leading zeros are significant: `"0123"` has four digits.
///
/// # Examples
///
/// ```
/// use digitmind_core::{Digit, DigitSequence};
///
/// let seq: DigitSequence = "0427".parse().unwrap();
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq[0], Digit::D0);
/// assert_eq!(seq.to_string(), "0427");
/// assert!(!seq.has_duplicates());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitSequence {
    digits: Vec<Digit>,
}

impl DigitSequence {
    /// Creates a sequence from digits in order.
    #[must_use]
    pub fn new(digits: Vec<Digit>) -> Self {
        Self { digits }
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns whether the sequence has no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digits as a slice.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the set of distinct digits present in the sequence.
    #[must_use]
    pub fn digit_set(&self) -> DigitSet {
        self.digits.iter().copied().collect()
    }

    /// Returns the first digit that appears a second time, scanning left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitmind_core::{Digit, DigitSequence};
    ///
    /// let seq: DigitSequence = "12323".parse().unwrap();
    /// assert_eq!(seq.first_duplicate(), Some(Digit::D2));
    /// ```
    #[must_use]
    pub fn first_duplicate(&self) -> Option<Digit> {
        let mut seen = DigitSet::new();
        self.digits.iter().copied().find(|&d| !seen.insert(d))
    }

    /// Returns whether any digit occurs more than once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.first_duplicate().is_some()
    }
}

impl From<Vec<Digit>> for DigitSequence {
    fn from(digits: Vec<Digit>) -> Self {
        Self::new(digits)
    }
}

impl FromIterator<Digit> for DigitSequence {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for DigitSequence {
    type Output = Digit;

    fn index(&self, index: usize) -> &Digit {
        &self.digits[index]
    }
}

impl<'a> IntoIterator for &'a DigitSequence {
    type Item = &'a Digit;
    type IntoIter = std::slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

/// Error returned when text contains something other than ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("non-digit character {character:?} at position {position}")]
pub struct ParseDigitSequenceError {
    /// The offending character.
    pub character: char,
    /// Zero-based character position within the input.
    pub position: usize,
}

impl FromStr for DigitSequence {
    type Err = ParseDigitSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                Digit::from_char(character).ok_or(ParseDigitSequenceError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}
