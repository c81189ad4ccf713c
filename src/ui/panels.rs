use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – sort order and dataset summary
// ---------------------------------------------------------------------------

/// Render the left panel: the global sort toggle shared by every view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Arizona's Top Books");
    ui.separator();

    ui.label("Input the sort order for the output data:");
    ui.checkbox(&mut state.ascending, "Ascending");
    ui.separator();

    ui.strong("Dataset");
    ui.label(format!("{} books", state.table.len()));
    ui.label(format!("{} ebooks", state.table.ebooks.len()));
    ui.label(format!("{} audiobooks", state.table.audiobooks.len()));
    let (lo, hi) = state.table.rating_range;
    ui.label(format!("Ratings {lo:.1}–{hi:.1}"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open local CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} books loaded ({} ebooks, {} audiobooks)",
            state.table.len(),
            state.table.ebooks.len(),
            state.table.audiobooks.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open a local CSV with the same layout as the remote dataset. A parse
/// failure leaves the current table in place and shows a status message.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open a top-books CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv_path(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} books ({} ebooks, {} audiobooks) from {}",
                    table.len(),
                    table.ebooks.len(),
                    table.audiobooks.len(),
                    path.display()
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
