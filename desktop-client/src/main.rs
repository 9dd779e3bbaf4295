mod app;
mod config;
mod game_ui;
mod logger;

use app::GameApp;
use config::{get_config_path, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = get_config_path();
    let config = load_config(&config_path)?;
    crate::log!("Starting with config from {}", config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(&config)))),
    )?;

    Ok(())
}
