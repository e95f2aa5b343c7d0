mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchBoardApp;
use eframe::egui;
use state::AppState;

/// Fixed dataset location. The dashboard takes no CLI flags; regenerate the
/// file with the `generate_sample` binary if needed.
const DATA_PATH: &str = "data/spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = match data::loader::load_file(Path::new(DATA_PATH)) {
        Ok(dataset) => dataset,
        Err(err) => {
            log::error!("failed to load {DATA_PATH}: {err:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} launches from {} sites, payloads {:.0} to {:.0} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_min,
        dataset.payload_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(AppState::new(dataset))))),
    )
}
