use digitmind_game::{AttemptLimit, GameConfig};
use eframe::egui::{ComboBox, RichText, Ui, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{ATTEMPT_LIMIT_CHOICES, Settings},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel {
    settings: Settings,
    version: String,
}

impl SettingsViewModel {
    #[must_use]
    pub(crate) fn new(settings: Settings, version: String) -> Self {
        Self { settings, version }
    }
}

fn attempt_limit_label(limit: AttemptLimit) -> String {
    match limit {
        AttemptLimit::Unbounded => format!("{} Infinite", icon::INFINITY),
        AttemptLimit::Limited(n) => n.to_string(),
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings;
    let Settings {
        digit_count,
        allow_duplicates,
        attempt_limit,
    } = &mut settings;

    ui.heading(format!("{} Settings", icon::GEAR));
    ui.add_space(8.0);

    ComboBox::from_label("Digits")
        .selected_text(digit_count.to_string())
        .show_ui(ui, |ui| {
            for n in GameConfig::MIN_DIGIT_COUNT..=GameConfig::MAX_DIGIT_COUNT {
                ui.selectable_value(digit_count, n, n.to_string());
            }
        });

    ui.checkbox(allow_duplicates, "Allow duplicate digits");

    ComboBox::from_label("Max attempts")
        .selected_text(attempt_limit_label(*attempt_limit))
        .show_ui(ui, |ui| {
            let current = *attempt_limit;
            let custom = (!ATTEMPT_LIMIT_CHOICES.contains(&current)).then_some(current);
            for choice in custom.into_iter().chain(ATTEMPT_LIMIT_CHOICES) {
                ui.selectable_value(attempt_limit, choice, attempt_limit_label(choice));
            }
        });

    ui.add_space(8.0);
    ui.label(RichText::new("Changing settings during a game starts a new one.").weak());

    ui.separator();
    ui.label("Appearance");
    widgets::global_theme_preference_buttons(ui);

    ui.separator();
    ui.label(RichText::new(format!("Digitmind {}", vm.version)).small().weak());

    if settings != vm.settings {
        action_queue.request(Action::UpdateSettings(settings));
    }
}
