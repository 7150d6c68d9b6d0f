use start_page::app::StartPage;
use start_page::gui::StartPageApp;
use start_page::logging;
use start_page::settings::{Settings, SETTINGS_FILE};
use start_page::storage::JsonFileStore;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file());

    let storage_path = settings.storage_path();
    tracing::info!(path = %storage_path.display(), "using storage file");
    let page = StartPage::new(JsonFileStore::new(storage_path));

    let (w, h) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w as f32, h as f32])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    let app = StartPageApp::new(page, &settings);
    eframe::run_native(
        "Start Page",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run start page: {e}"))
}
