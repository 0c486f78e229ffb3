//! Test utilities for code that consumes a [`DigitSource`].
//!
//! [`ScriptedSource`] replays a fixed list of indices, which makes the secret
//! chosen by [`SecretGenerator`](crate::SecretGenerator) fully predictable.
//!
//! # Example
//!
//! ```
//! use digitmind_generator::{SecretGenerator, testing::ScriptedSource};
//!
//! let generator = SecretGenerator::new(3, false).unwrap();
//! let mut source = ScriptedSource::new([1, 1, 1]);
//!
//! // Pool 0..=9, take index 1 three times: 1, then 2, then 3.
//! assert_eq!(generator.generate_from(&mut source).to_string(), "123");
//! ```

use std::collections::VecDeque;

use digitmind_core::{Digit, DigitSequence};

use crate::DigitSource;

/// A [`DigitSource`] that returns pre-recorded values.
///
/// # Panics
///
/// [`DigitSource::next_below`] panics when the script is exhausted or when a
/// scripted value is not below the requested bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            values: values.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Creates a source whose draws make a duplicate-free generator produce `secret`.
    ///
    /// Each digit is mapped to its index in the shrinking ascending pool.
    ///
    /// # Panics
    ///
    /// Panics if `secret` repeats a digit.
    #[must_use]
    pub fn for_distinct_secret(secret: &DigitSequence) -> Self {
        let mut pool = Digit::ALL.to_vec();
        let values = secret
            .digits()
            .iter()
            .map(|digit| {
                let index = pool
                    .iter()
                    .position(|d| d == digit)
                    .unwrap_or_else(|| panic!("digit {digit} repeats in {secret}"));
                pool.remove(index);
                index
            })
            .collect::<Vec<_>>();
        Self::new(values)
    }

    /// Creates a source whose draws make a duplicate-allowing generator produce `secret`.
    #[must_use]
    pub fn for_secret_with_duplicates(secret: &DigitSequence) -> Self {
        Self::new(secret.digits().iter().map(|d| usize::from(d.value())))
    }

    /// Appends more values to the end of the script.
    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.values.extend(values);
    }

    /// Consumes the source, returning the values it has not yet yielded.
    pub fn into_values(self) -> impl Iterator<Item = usize> {
        self.values.into_iter()
    }

    /// Returns the bounds passed to every draw so far.
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Returns how many scripted values have not been consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DigitSource for ScriptedSource {
    #[track_caller]
    fn next_below(&mut self, bound: usize) -> usize {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source exhausted (bound {bound})"));
        assert!(
            value < bound,
            "scripted value {value} is not below bound {bound}"
        );
        self.bounds.push(bound);
        value
    }
}
