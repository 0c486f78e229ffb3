use std::mem;

use digitmind_game::{GameError, GameState};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, FlashKind, Settings, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::StartNewGame => start_new_game(app_state, ui_state),
        Action::UpdateGuessInput(text) => {
            let digit_count = app_state.game.config().digit_count();
            ui_state.guess_input = sanitize_guess_input(&text, digit_count);
        }
        Action::SubmitGuess => submit_guess(app_state, ui_state),
        Action::SubmitOrStart => match app_state.game.state() {
            GameState::NotStarted => start_new_game(app_state, ui_state),
            GameState::InProgress => submit_guess(app_state, ui_state),
            GameState::Won | GameState::Lost => {}
        },
        Action::UpdateSettings(settings) => update_settings(app_state, ui_state, settings),
    }
}

/// Keeps only ASCII digits, at most `digit_count` of them.
fn sanitize_guess_input(text: &str, digit_count: usize) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(digit_count)
        .collect()
}

fn start_new_game(app_state: &mut AppState, ui_state: &mut UiState) {
    app_state.game.start_new_game();
    ui_state.reset_round();
}

fn submit_guess(app_state: &mut AppState, ui_state: &mut UiState) {
    let raw = mem::take(&mut ui_state.guess_input);
    match app_state.game.submit_guess(&raw) {
        Ok(_) => {
            ui_state.transient_message = None;
            match app_state.game.state() {
                GameState::Won => ui_state.start_flash(FlashKind::Success),
                GameState::Lost => ui_state.start_flash(FlashKind::Error),
                GameState::NotStarted | GameState::InProgress => {}
            }
        }
        Err(GameError::InvalidGuess(reason)) => {
            ui_state.guess_input = raw;
            ui_state.show_transient(reason.to_string());
        }
        Err(e) => log::warn!("guess ignored: {e}"),
    }
}

fn update_settings(app_state: &mut AppState, ui_state: &mut UiState, settings: Settings) {
    let Settings {
        digit_count,
        allow_duplicates,
        attempt_limit,
    } = settings;
    match app_state
        .game
        .set_configuration(digit_count, allow_duplicates, attempt_limit)
    {
        Ok(true) => ui_state.reset_round(),
        Ok(false) => {
            ui_state.guess_input = sanitize_guess_input(&ui_state.guess_input, digit_count);
        }
        Err(e) => {
            log::warn!("settings rejected: {e}");
            ui_state.show_transient(e.to_string());
        }
    }
}
