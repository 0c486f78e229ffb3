use digitmind_core::Feedback;
use eframe::egui::{RichText, ScrollArea, Ui};

use crate::ui::{SUCCESS_COLOR, icon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryRow {
    pub(crate) index: usize,
    pub(crate) guess: String,
    pub(crate) feedback: Feedback,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct HistoryViewModel {
    rows: Vec<HistoryRow>,
    solved_secret: Option<String>,
}

impl HistoryViewModel {
    #[must_use]
    pub(crate) fn new(rows: Vec<HistoryRow>, solved_secret: Option<String>) -> Self {
        Self {
            rows,
            solved_secret,
        }
    }

    #[must_use]
    pub(crate) fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    #[must_use]
    pub(crate) fn solved_secret(&self) -> Option<&str> {
        self.solved_secret.as_deref()
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &HistoryViewModel) {
    ui.heading("Guesses");
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if vm.rows().is_empty() {
                ui.label(RichText::new("No guesses yet.").weak());
            }
            for row in vm.rows() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("#{:<3}", row.index)).monospace().weak());
                    ui.label(RichText::new(&row.guess).monospace().size(20.0).strong());
                    ui.add_space(12.0);
                    let (correct, misplaced, absent) = row.feedback.as_tuple();
                    ui.label(format!("{} {correct}", icon::CORRECT_POSITION))
                        .on_hover_text("Right digit, right position");
                    ui.label(format!("{} {misplaced}", icon::WRONG_POSITION))
                        .on_hover_text("Right digit, wrong position");
                    ui.label(format!("{} {absent}", icon::WRONG_NUMBER))
                        .on_hover_text("Digit not in the number");
                });
            }
            if let Some(secret) = vm.solved_secret() {
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} CORRECT GUESS!", icon::CHECK))
                            .strong()
                            .color(SUCCESS_COLOR),
                    );
                    ui.label(RichText::new(secret).monospace().size(20.0).color(SUCCESS_COLOR));
                });
            }
        });
}
