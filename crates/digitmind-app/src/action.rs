use std::mem;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    StartNewGame,
    UpdateGuessInput(String),
    SubmitGuess,
    /// Submits while a game is running, starts one if none has begun.
    SubmitOrStart,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
