use digitmind_game::{Game, GameOutcome, GameState};

use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        guess_input::{GuessInputViewModel, InputPhase},
        history::{HistoryRow, HistoryViewModel},
        settings_panel::SettingsViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
    version,
};

const UNSTARTED_HEADER: &str = "Configure your game settings and start playing!";

#[must_use]
fn build_status(game: &Game, ui_state: &UiState) -> GameStatus {
    match game.outcome() {
        Some(GameOutcome::Won { attempts }) => GameStatus::Won { attempts },
        Some(GameOutcome::Lost { secret }) => GameStatus::Lost {
            secret: secret.to_string(),
        },
        None => {
            if let Some(message) = &ui_state.transient_message {
                GameStatus::Message(message.text.clone())
            } else if game.state().is_not_started() {
                GameStatus::NotStarted
            } else {
                GameStatus::InProgress {
                    remaining: game.remaining_attempts(),
                }
            }
        }
    }
}

#[must_use]
fn build_history_vm(game: &Game) -> HistoryViewModel {
    let rows = game
        .attempts()
        .iter()
        .map(|attempt| HistoryRow {
            index: attempt.index(),
            guess: attempt.guess().to_string(),
            feedback: attempt.feedback(),
        })
        .collect();
    let solved_secret = if game.state().is_won() {
        game.revealed_secret().map(ToString::to_string)
    } else {
        None
    };
    HistoryViewModel::new(rows, solved_secret)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let game = &app_state.game;
    let config = game.config();

    let header = if game.state().is_not_started() {
        UNSTARTED_HEADER.to_owned()
    } else {
        config.describe()
    };

    let status_line_vm = StatusLineViewModel::new(
        build_status(game, ui_state),
        game.attempt_count(),
        config.attempt_limit(),
    );

    let phase = match game.state() {
        GameState::NotStarted => InputPhase::NotStarted,
        GameState::InProgress => InputPhase::Playing,
        GameState::Won | GameState::Lost => InputPhase::Over,
    };
    let guess_input_vm = GuessInputViewModel::new(
        ui_state.guess_input.clone(),
        config.input_hint(),
        config.digit_count(),
        phase,
    );

    let settings_vm = SettingsViewModel::new(app_state.settings(), version::build_version());

    GameScreenViewModel {
        header,
        status_line_vm,
        guess_input_vm,
        history_vm: build_history_vm(game),
        settings_vm,
        flash: ui_state.active_flash(),
    }
}

#[cfg(test)]
mod tests {
    use digitmind_game::{AttemptLimit, Game, GameConfig, RemainingAttempts};
    use digitmind_generator::testing::ScriptedSource;

    use super::build_game_screen_view_model;
    use crate::{
        state::{AppState, UiState},
        ui::{guess_input::InputPhase, status_line::GameStatus},
    };

    fn started(config: GameConfig, secret: &str) -> AppState {
        let source = ScriptedSource::for_distinct_secret(&secret.parse().unwrap());
        let mut game = Game::with_source(config, Box::new(source));
        game.start_new_game();
        AppState::new(game)
    }

    #[test]
    fn unstarted_game_prompts_for_settings() {
        let app_state = AppState::new(Game::new(GameConfig::default()));
        let vm = build_game_screen_view_model(&app_state, &UiState::new());

        assert_eq!(vm.header, "Configure your game settings and start playing!");
        assert_eq!(vm.status_line_vm.status(), &GameStatus::NotStarted);
        assert_eq!(vm.guess_input_vm.phase(), InputPhase::NotStarted);
        assert!(vm.history_vm.rows().is_empty());
        assert_eq!(vm.status_line_vm.counter_text(), "0/10");
    }

    #[test]
    fn in_progress_game_shows_remaining_attempts() {
        let mut app_state = started(GameConfig::default(), "1234");
        app_state.game.submit_guess("1243").unwrap();
        let vm = build_game_screen_view_model(&app_state, &UiState::new());

        assert_eq!(
            vm.header,
            "I'm thinking of a 4-digit number (no duplicates). Can you guess it?"
        );
        assert_eq!(
            vm.status_line_vm.status(),
            &GameStatus::InProgress {
                remaining: RemainingAttempts::Remaining(9)
            }
        );
        assert_eq!(vm.guess_input_vm.phase(), InputPhase::Playing);
        let row = &vm.history_vm.rows()[0];
        assert_eq!(row.guess, "1243");
        assert_eq!(row.feedback.as_tuple(), (2, 2, 0));
        assert_eq!(vm.history_vm.solved_secret(), None);
    }

    #[test]
    fn transient_message_overrides_progress_but_not_outcome() {
        let config = GameConfig::new(4, false, AttemptLimit::limited(1)).unwrap();
        let mut app_state = started(config, "1234");
        let mut ui_state = UiState::new();
        ui_state.show_transient("please enter exactly 4 digits".to_owned());

        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert_eq!(
            vm.status_line_vm.status(),
            &GameStatus::Message("please enter exactly 4 digits".to_owned())
        );

        app_state.game.submit_guess("9876").unwrap();
        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert_eq!(
            vm.status_line_vm.status(),
            &GameStatus::Lost {
                secret: "1234".to_owned()
            }
        );
        assert_eq!(vm.guess_input_vm.phase(), InputPhase::Over);
        assert_eq!(vm.history_vm.solved_secret(), None);
    }

    #[test]
    fn win_adds_success_divider() {
        let mut app_state = started(GameConfig::default(), "0528");
        app_state.game.submit_guess("0528").unwrap();
        let vm = build_game_screen_view_model(&app_state, &UiState::new());

        assert_eq!(vm.status_line_vm.status(), &GameStatus::Won { attempts: 1 });
        assert_eq!(vm.history_vm.solved_secret(), Some("0528"));
    }
}
