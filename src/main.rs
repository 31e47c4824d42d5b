mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    let dataset = match data::loader::load_file(&config.dataset_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load launch records: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launches from {} across sites {:?}",
        dataset.len(),
        config.dataset_path.display(),
        dataset.sites
    );
    if let Some((lo, hi)) = dataset.payload_bounds {
        log::info!("Payload mass spans {lo} – {hi} kg");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let state = AppState::new(config, dataset);
    eframe::run_native(
        "Launch Dash – Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
}
