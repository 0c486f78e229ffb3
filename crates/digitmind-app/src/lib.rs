//! Desktop front end for the Digitmind guessing game.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// How long an invalid-guess message stays on the status line, in seconds.
pub const TRANSIENT_MESSAGE_SECS: f64 = 3.0;
/// How long the window tints after a win, loss, or rejected guess, in seconds.
pub const FLASH_SECS: f64 = 0.6;

pub mod action;
pub mod app;
pub mod cli;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
