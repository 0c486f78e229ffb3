//! Digitmind desktop application using egui/eframe.

use clap::{CommandFactory as _, Parser as _, error::ErrorKind};
use digitmind_app::{app::DigitmindApp, cli::Cli, version};
use digitmind_game::Game;
use digitmind_generator::SeededSource;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.digitmind";

    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.game_config() {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };
    let game = match cli.seed() {
        Some(seed) => {
            log::info!("Using seed {seed}");
            Game::with_source(config, Box::new(SeededSource::new(seed)))
        }
        None => Game::new(config),
    };

    log::info!("Starting Digitmind, version={}", version::build_version());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((760.0, 560.0))
            .with_min_inner_size((520.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Digitmind",
        options,
        Box::new(|_cc| Ok(Box::new(DigitmindApp::new(game)))),
    )
}
