use bakery_client::app::BakeryApp;
use bakery_client::core::{logging, ClientConfig};
use bakery_client::ui;
use bakery_client::utils::runtime::TOKIO_RT;

fn main() -> Result<(), eframe::Error> {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let _log_guard = logging::init(&config);
    tracing::info!(api_url = %config.api_url, "Starting bakery client");

    // reqwest and the facades spawn onto the shared runtime
    let _rt = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bakery")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bakery",
        options,
        Box::new(move |cc| {
            ui::setup(&cc.egui_ctx);
            let app = BakeryApp::connect(config, cc.egui_ctx.clone())?;
            Ok(Box::new(app))
        }),
    )
}
