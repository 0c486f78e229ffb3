//! A set of decimal digits, stored as a bitset.
//!
//! # Examples
//!
//! ```
//! use digitmind_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(Digit::D5));
//! assert!(!set.contains(Digit::D0));
//! ```

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of digits 0-9.
///
/// Bit `n` of the inner `u16` is set when digit `n` is a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn mask(digit: Digit) -> u16 {
        1 << digit.value()
    }

    /// Returns whether `digit` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::mask(digit) != 0
    }

    /// Adds `digit`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, digit: Digit) -> bool {
        let absent = !self.contains(digit);
        self.bits |= Self::mask(digit);
        absent
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the members in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|d| d.value())).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
