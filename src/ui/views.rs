use eframe::egui::{self, Ui};

use crate::color;
use crate::data::model::{Book, Column, Format};
use crate::data::query;
use crate::state::AppState;

use super::{plot, table};

// ---------------------------------------------------------------------------
// Tab views: widgets → query function → table/chart
// ---------------------------------------------------------------------------

/// Alphabet tab: top 5 titles per format starting with the entered letter.
pub fn alphabet_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter a letter:");
        ui.add(
            egui::TextEdit::singleline(&mut state.letter)
                .char_limit(1)
                .desired_width(40.0),
        );
    });
    ui.add_space(4.0);

    let Some(letter) = state.letter_char() else {
        ui.label("Type a letter to filter titles.");
        return;
    };

    let ebooks = query::alphabet_filter(state.table.subtable(Format::Ebook), letter, state.ascending);
    ui.strong(format!(
        "Top 5 ebooks that start with the letter {letter} (sorted by rating)"
    ));
    show_books(ui, "alphabet_ebooks", &ebooks);
    ui.add_space(8.0);

    let audiobooks =
        query::alphabet_filter(state.table.subtable(Format::Audiobook), letter, state.ascending);
    ui.strong(format!(
        "Top 5 audiobooks that start with the letter {letter} (sorted by rating)"
    ));
    show_books(ui, "alphabet_audiobooks", &audiobooks);
}

/// Rank tab: the ebook and audiobook at one rank of their independent lists.
pub fn rank_tab(ui: &mut Ui, state: &mut AppState) {
    let max_rank = state.table.max_rank;
    ui.add(egui::Slider::new(&mut state.rank, 1..=max_rank).text("rank"));
    ui.add_space(4.0);

    ui.strong(format!("Book info at rank {}", state.rank));
    ui.label("Ebook:");
    match query::rank_lookup(state.table.subtable(Format::Ebook), state.rank) {
        Some(book) => table::book_table(ui, "rank_ebook", std::slice::from_ref(&book), false),
        None => {
            ui.label("No ebook at this rank.");
        }
    }
    ui.add_space(8.0);
    ui.label("Audiobook:");
    match query::rank_lookup(state.table.subtable(Format::Audiobook), state.rank) {
        Some(book) => table::book_table(ui, "rank_audiobook", std::slice::from_ref(&book), false),
        None => {
            ui.label("No audiobook at this rank.");
        }
    }
}

/// Wait Times/Copies tab: copies histogram over books with an exact wait.
pub fn wait_times_tab(ui: &mut Ui, state: &mut AppState) {
    ui.add(egui::Slider::new(&mut state.wait_weeks, 0..=27).text("wait weeks"));
    ui.add_space(4.0);

    let books = query::wait_time_filter(&state.table.books, state.wait_weeks);
    ui.strong(format!(
        "Number of copies available when the wait time is {} weeks ({} books)",
        state.wait_weeks,
        books.len()
    ));
    if books.is_empty() {
        ui.label("No books with this wait time.");
    } else {
        let copies: Vec<f64> = books.iter().map(|b| b.copies as f64).collect();
        plot::histogram(ui, "wait_copies", "Copies", &copies, 1.0, color::neutral_color());
    }

    egui::CollapsingHeader::new("Here's how the chart works")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "Hover over any bar. Its position on the Copies axis is the number of \
                 copies the library owns; its height is how many books with the selected \
                 wait time have that many copies. For example, a bar of height 4 at \
                 Copies = 1 means there are 4 books with this wait time that have a \
                 single copy available.",
            );
        });
}

/// Format tab: ratings and copies histograms for one format.
pub fn format_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Choose a format:");
        for format in Format::ALL {
            ui.radio_value(&mut state.format_choice, format, format.label());
        }
    });
    ui.add_space(4.0);

    let choice = state.format_choice;
    let (rating_rows, copies_rows) = query::format_filter(&state.table.books, choice);
    if rating_rows.is_empty() {
        ui.label(format!("No {}s in the dataset.", choice.label()));
        return;
    }

    ui.strong(format!("Ratings of {}s", choice.label()));
    let ratings: Vec<f64> = rating_rows.iter().map(|b| b.rating).collect();
    plot::histogram(ui, "format_ratings", "Rating", &ratings, 0.1, color::format_color(choice));

    ui.add_space(8.0);
    ui.strong(format!("Copies of {}s", choice.label()));
    let copies: Vec<f64> = copies_rows.iter().map(|b| b.copies as f64).collect();
    plot::histogram(ui, "format_copies", "Copies", &copies, 1.0, color::format_color(choice));
}

/// Rank/Rating tab: rank histogram and table of books at one rating.
pub fn rank_rating_tab(ui: &mut Ui, state: &mut AppState) {
    let (lo, hi) = state.table.rating_range;
    ui.add(
        egui::Slider::new(&mut state.rating, lo..=hi)
            .step_by(0.1)
            .fixed_decimals(1)
            .text("rating"),
    );
    ui.add_space(4.0);

    let books = query::rating_filter(&state.table.books, state.rating, state.ascending);
    if books.is_empty() {
        ui.label(format!("No books with a rating of {:.1}.", state.rating));
        return;
    }

    ui.strong(format!("Ranks of books with a {:.1} rating", state.rating));
    let ranks: Vec<f64> = books.iter().map(|b| b.rank as f64).collect();
    plot::histogram(ui, "rating_ranks", "Rank", &ranks, 20.0, color::neutral_color());

    ui.add_space(8.0);
    ui.strong(format!("All books with a rating of {:.1}", state.rating));
    table::book_table(ui, "rating_books", &books, true);
}

/// Top Authors tab: bar chart and table of authors by book count.
pub fn top_authors_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Number of authors:");
        ui.add(egui::DragValue::new(&mut state.num_authors).range(1..=100));
    });
    ui.add_space(4.0);

    let entries = query::top_authors(&state.table.books, state.num_authors, state.ascending);
    ui.strong(format!("Top {} authors", state.num_authors));
    if entries.is_empty() {
        ui.label("No authors to show.");
        return;
    }

    plot::author_bar_chart(ui, "top_authors_chart", &entries);
    ui.add_space(8.0);
    table::author_table(ui, "top_authors_table", &entries);
}

/// About tab: the whole dataset, resorted by a chosen column.
pub fn about_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Sort by:");
        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(state.sort_column.label())
            .show_ui(ui, |ui: &mut Ui| {
                for column in Column::ALL {
                    ui.selectable_value(&mut state.sort_column, column, column.label());
                }
            });
    });
    ui.label(
        "The entire top-books dataset, sorted by the column you selected. \
         The Ascending toggle in the sidebar flips the order.",
    );
    ui.add_space(4.0);

    let sorted = query::sort_by_column(&state.table.books, state.sort_column, state.ascending);
    table::book_table(ui, "about_table", &sorted, true);
}

fn show_books(ui: &mut Ui, id: &str, books: &[Book]) {
    if books.is_empty() {
        ui.label("No matching books.");
    } else {
        table::book_table(ui, id, books, false);
    }
}
