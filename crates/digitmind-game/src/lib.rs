//! Rules engine for the Digitmind guessing game.
//!
//! The engine is a plain owned value: construct a [`Game`], call
//! [`Game::start_new_game`], then feed raw player input to
//! [`Game::submit_guess`]. Every call is synchronous and returns a `Result`;
//! bad input never panics.
//!
//! - [`config`]: digit count, duplicate policy, and attempt limit
//! - [`validate`]: guess validation against a configuration
//! - [`game`]: the game state machine
//!
//! # Example
//!
//! ```
//! use digitmind_core::DigitSequence;
//! use digitmind_game::{AttemptLimit, Game, GameConfig, GameState};
//! use digitmind_generator::testing::ScriptedSource;
//!
//! let config = GameConfig::new(4, false, AttemptLimit::limited(10)).unwrap();
//! let secret: DigitSequence = "1234".parse().unwrap();
//! let source = ScriptedSource::for_distinct_secret(&secret);
//!
//! let mut game = Game::with_source(config, Box::new(source));
//! game.start_new_game();
//!
//! let attempt = game.submit_guess("1243").unwrap();
//! assert_eq!(attempt.feedback().as_tuple(), (2, 2, 0));
//!
//! game.submit_guess("1234").unwrap();
//! assert_eq!(game.state(), GameState::Won);
//! ```

pub use self::{config::*, error::*, game::*, validate::*};

pub mod config;
mod error;
pub mod game;
pub mod validate;
