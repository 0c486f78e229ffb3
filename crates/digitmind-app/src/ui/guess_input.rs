use eframe::egui::{RichText, TextEdit, TextStyle, Ui};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum InputPhase {
    NotStarted,
    Playing,
    Over,
}

#[derive(Debug, Clone)]
pub(crate) struct GuessInputViewModel {
    text: String,
    hint: String,
    max_len: usize,
    phase: InputPhase,
}

impl GuessInputViewModel {
    #[must_use]
    pub(crate) fn new(text: String, hint: String, max_len: usize, phase: InputPhase) -> Self {
        Self {
            text,
            hint,
            max_len,
            phase,
        }
    }

    #[must_use]
    pub(crate) fn phase(&self) -> InputPhase {
        self.phase
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GuessInputViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let mut text = vm.text.clone();
        let response = ui.add_enabled(
            vm.phase().is_playing(),
            TextEdit::singleline(&mut text)
                .hint_text(vm.hint.as_str())
                .char_limit(vm.max_len)
                .font(TextStyle::Monospace)
                .desired_width(240.0),
        );
        if response.changed() {
            action_queue.request(Action::UpdateGuessInput(text));
        }
        if vm.phase().is_playing() && ui.memory(|m| m.focused().is_none()) {
            response.request_focus();
        }

        match vm.phase() {
            InputPhase::NotStarted => {
                if ui.button(RichText::new("Start Game").strong()).clicked() {
                    action_queue.request(Action::StartNewGame);
                }
            }
            InputPhase::Playing => {
                if ui.button("Submit").clicked() {
                    action_queue.request(Action::SubmitGuess);
                }
            }
            InputPhase::Over => {
                if ui.button(RichText::new("New Game").strong()).clicked() {
                    action_queue.request(Action::StartNewGame);
                }
            }
        }
    });
}
