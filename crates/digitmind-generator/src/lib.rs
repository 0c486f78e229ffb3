//! Secret generation for the Digitmind guessing game.
//!
//! [`SecretGenerator`] draws a secret of the configured length from a
//! [`DigitSource`], the randomness collaborator. [`SeededSource`] is the
//! production source: a PCG64 stream fully determined by a [`SecretSeed`], so
//! any game can be replayed from its seed. Tests can substitute
//! [`testing::ScriptedSource`] to pin exact draws.
//!
//! # Examples
//!
//! ```
//! use digitmind_generator::{SecretGenerator, SecretSeed};
//!
//! let generator = SecretGenerator::new(4, false).unwrap();
//! let seed = SecretSeed::from_phrase("example");
//!
//! let a = generator.generate_with_seed(seed);
//! let b = generator.generate_with_seed(seed);
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 4);
//! assert!(!a.has_duplicates());
//! ```

pub use self::{generator::*, seed::*, source::*};

mod generator;
mod seed;
mod source;
pub mod testing;
