use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if i.modifiers.command && i.key_pressed(Key::N) {
        action_queue.request(Action::StartNewGame);
    } else if i.key_pressed(Key::Enter) {
        action_queue.request(Action::SubmitOrStart);
    }
}
