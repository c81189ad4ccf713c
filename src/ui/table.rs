use eframe::egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Book;
use crate::data::query::AuthorCount;

// ---------------------------------------------------------------------------
// Table renderers
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

/// Render book rows as a striped table. `scrollable` tables take the
/// remaining panel height; the small result tables size to their rows.
pub fn book_table(ui: &mut Ui, id: &str, books: &[Book], scrollable: bool) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(scrollable)
            .column(TableColumn::auto()) // Rank
            .column(TableColumn::remainder().at_least(160.0)) // Title
            .column(TableColumn::remainder().at_least(120.0)) // Author
            .column(TableColumn::auto()) // Rating
            .column(TableColumn::auto()) // Format
            .column(TableColumn::auto()) // Copies
            .column(TableColumn::auto().at_least(90.0)) // Availability
            .column(TableColumn::auto()) // Wait Weeks
            .header(HEADER_HEIGHT, |mut header| {
                for title in [
                    "Rank",
                    "Title",
                    "Author",
                    "Rating",
                    "Format",
                    "Copies",
                    "Availability",
                    "Wait Weeks",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, books.len(), |mut row| {
                    let book = &books[row.index()];
                    row.col(|ui| {
                        ui.label(book.rank.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&book.title);
                    });
                    row.col(|ui| {
                        ui.label(&book.author);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", book.rating));
                    });
                    row.col(|ui| {
                        ui.label(book.format.label());
                    });
                    row.col(|ui| {
                        ui.label(book.copies.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&book.availability);
                    });
                    row.col(|ui| {
                        ui.label(book.wait_weeks.to_string());
                    });
                });
            });
    });
}

/// Render the author/count pairs from the Top Authors query.
pub fn author_table(ui: &mut Ui, id: &str, entries: &[AuthorCount]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(TableColumn::remainder().at_least(160.0)) // Author
            .column(TableColumn::auto()) // Books
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Author");
                });
                header.col(|ui| {
                    ui.strong("Books");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, entries.len(), |mut row| {
                    let entry = &entries[row.index()];
                    row.col(|ui| {
                        ui.label(&entry.author);
                    });
                    row.col(|ui| {
                        ui.label(entry.books.to_string());
                    });
                });
            });
    });
}
