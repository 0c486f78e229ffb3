use eframe::egui::{CentralPanel, Color32, Context, RichText, SidePanel};

use crate::{
    action::ActionRequestQueue,
    state::FlashKind,
    ui::{
        SUCCESS_COLOR,
        guess_input::{self, GuessInputViewModel},
        history::{self, HistoryViewModel},
        settings_panel::{self, SettingsViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) header: String,
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) guess_input_vm: GuessInputViewModel,
    pub(crate) history_vm: HistoryViewModel,
    pub(crate) settings_vm: SettingsViewModel,
    pub(crate) flash: Option<FlashKind>,
}

fn flash_color(kind: FlashKind) -> Color32 {
    match kind {
        FlashKind::Success => SUCCESS_COLOR,
        FlashKind::Error => Color32::from_rgb(0xd9, 0x3f, 0x3f),
    }
    .gamma_multiply(0.2)
}

pub(crate) fn show(ctx: &Context, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    SidePanel::left("settings_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            settings_panel::show(ui, &vm.settings_vm, action_queue);
        });

    CentralPanel::default().show(ctx, |ui| {
        if let Some(kind) = vm.flash {
            ui.painter().rect_filled(ui.max_rect(), 0.0, flash_color(kind));
        }

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Digitmind").size(28.0).strong());
            ui.label(vm.header.as_str());
        });
        ui.add_space(12.0);

        status_line::show(ui, &vm.status_line_vm);
        ui.add_space(8.0);
        guess_input::show(ui, &vm.guess_input_vm, action_queue);
        ui.add_space(12.0);
        ui.separator();
        history::show(ui, &vm.history_vm);
    });
}
