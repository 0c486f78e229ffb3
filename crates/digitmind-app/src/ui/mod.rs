pub(crate) mod game_screen;
pub(crate) mod guess_input;
pub(crate) mod history;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod settings_panel;
pub(crate) mod status_line;

use eframe::egui::Color32;

/// Green used for wins.
pub(crate) const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2e, 0x9e, 0x4f);
