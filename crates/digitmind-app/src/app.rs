//! Digitmind desktop application.
//!
//! Each frame advances the UI clock, handles keyboard shortcuts, builds view
//! models from the game, draws them, and applies the actions they queued.

use std::time::Duration;

use digitmind_game::Game;
use eframe::{App, Frame, egui::Context};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct DigitmindApp {
    app_state: AppState,
    ui_state: UiState,
}

impl DigitmindApp {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            app_state: AppState::new(game),
            ui_state: UiState::new(),
        }
    }
}

impl App for DigitmindApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let now = ctx.input(|i| i.time);
        self.ui_state.tick(now, self.app_state.game.is_over());

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);
        ui::game_screen::show(ctx, &game_screen_vm, &mut action_queue);

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if let Some(deadline) = self.ui_state.next_deadline() {
            ctx.request_repaint_after(Duration::from_secs_f64((deadline - now).max(0.0)));
        }
    }
}
