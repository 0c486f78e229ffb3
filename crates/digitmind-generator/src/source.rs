use std::fmt::Debug;

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::SecretSeed;

/// A source of uniformly distributed indices.
///
/// This is the only randomness the generator consumes, which keeps secret
/// generation deterministic under test.
pub trait DigitSource: Debug {
    /// Returns an integer drawn uniformly from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<S> DigitSource for Box<S>
where
    S: DigitSource + ?Sized,
{
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// A PCG64 stream seeded from a [`SecretSeed`].
///
/// Two sources created from the same seed yield identical draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: SecretSeed,
    rng: Pcg64,
}

impl SeededSource {
    /// Creates a source from `seed`.
    #[must_use]
    pub fn new(seed: SecretSeed) -> Self {
        Self {
            seed,
            rng: Pcg64::from_seed(seed.into_bytes()),
        }
    }

    /// Creates a source from a freshly drawn random seed.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(SecretSeed::random())
    }

    /// Returns the seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> SecretSeed {
        self.seed
    }
}

impl DigitSource for SeededSource {
    fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        self.rng.random_range(0..bound)
    }
}
