mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::BookDashApp;
use data::loader;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The session's table: fetched once, fatal if the source is unreachable
    // or malformed.
    let table = loader::fetch_books(loader::DATA_URL)
        .context("loading the top-books dataset")?;
    log::info!(
        "Loaded {} books ({} ebooks, {} audiobooks)",
        table.len(),
        table.ebooks.len(),
        table.audiobooks.len()
    );
    if table.is_empty() {
        log::warn!("Data source returned an empty table; every view will be blank");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Arizona's Top Books",
        options,
        Box::new(move |_cc| Ok(Box::new(BookDashApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
