use digitmind_game::Game;

use crate::state::Settings;

#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: Game) -> Self {
        Self { game }
    }

    /// Settings form values mirroring the game's current configuration.
    #[must_use]
    pub(crate) fn settings(&self) -> Settings {
        Settings::from_config(self.game.config())
    }
}
