//! Core data structures for the Digitmind guessing game.
//!
//! This crate provides the value types shared by secret generation, guess
//! validation, and the game engine:
//!
//! - [`digit`]: Type-safe representation of the decimal digits 0-9
//! - [`digit_set`]: A compact set of digits, used for membership checks
//! - [`digit_sequence`]: An ordered run of digits (a secret or a guess)
//! - [`feedback`]: The per-guess feedback triple and the scoring rule
//!
//! # Examples
//!
//! ```
//! use digitmind_core::{DigitSequence, Feedback};
//!
//! let secret: DigitSequence = "1234".parse().unwrap();
//! let guess: DigitSequence = "1243".parse().unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.correct_position(), 2);
//! assert_eq!(feedback.wrong_position(), 2);
//! assert_eq!(feedback.wrong_number(), 0);
//! ```

pub mod digit;
pub mod digit_sequence;
pub mod digit_set;
pub mod feedback;

pub use self::{
    digit::Digit,
    digit_sequence::{DigitSequence, ParseDigitSequenceError},
    digit_set::DigitSet,
    feedback::Feedback,
};
