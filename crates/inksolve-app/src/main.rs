//! Main application entry point.

mod app;
mod canvas_view;
mod shortcuts;
mod ui;

use inksolve_infer::{GeminiClient, InferenceSettings};

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting InkSolve");

    // A missing credential is fatal before any UI is shown.
    let settings = match InferenceSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            eprintln!("inksolve: {err}");
            std::process::exit(2);
        }
    };
    let client = match GeminiClient::new(settings) {
        Ok(client) => client,
        Err(err) => {
            log::error!("failed to build inference client: {err}");
            eprintln!("inksolve: {err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("InkSolve")
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "inksolve",
        options,
        Box::new(|cc| Ok(Box::new(app::InkSolveApp::new(cc, client)))),
    )
}
