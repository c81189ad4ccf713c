use crate::data::model::{BookTable, Column, Format};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's tabs, mirroring the seven view groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Alphabet,
    Rank,
    WaitTimes,
    Format,
    RankRating,
    TopAuthors,
    About,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Alphabet,
        Tab::Rank,
        Tab::WaitTimes,
        Tab::Format,
        Tab::RankRating,
        Tab::TopAuthors,
        Tab::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Alphabet => "Alphabet",
            Tab::Rank => "Rank",
            Tab::WaitTimes => "Wait Times/Copies",
            Tab::Format => "Format",
            Tab::RankRating => "Rank/Rating",
            Tab::TopAuthors => "Top Authors",
            Tab::About => "About",
        }
    }
}

/// The full UI state: the immutable table plus the current widget values.
/// Queries read from here each frame; nothing here is hidden global state.
pub struct AppState {
    /// Loaded dataset, fetched once at startup and never mutated. Replaced
    /// wholesale if the user opens a local CSV.
    pub table: BookTable,

    /// Which tab is showing.
    pub active_tab: Tab,

    /// Global sort direction, shared by every view that sorts.
    pub ascending: bool,

    /// Alphabet tab: the letter prefix (kept as a string for the text box;
    /// only the first character is used).
    pub letter: String,

    /// Rank tab: the rank to look up in both subtables.
    pub rank: u32,

    /// Wait Times tab: exact hold wait to match, in weeks.
    pub wait_weeks: u32,

    /// Format tab: which format's histograms to show.
    pub format_choice: Format,

    /// Rank/Rating tab: the rating slider value (0.1 steps).
    pub rating: f64,

    /// Top Authors tab: how many authors to chart.
    pub num_authors: usize,

    /// About tab: which column the full table is sorted by.
    pub sort_column: Column,

    /// Status / error message shown in the top bar (local-open failures).
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state around a freshly loaded table.
    pub fn new(table: BookTable) -> Self {
        Self {
            table,
            active_tab: Tab::Alphabet,
            ascending: true,
            letter: "A".to_string(),
            rank: 1,
            wait_weeks: 0,
            format_choice: Format::Ebook,
            rating: 4.0,
            num_authors: 5,
            sort_column: Column::Rank,
            status_message: None,
        }
    }

    /// Swap in a newly loaded table and clamp parameters to its bounds.
    pub fn set_table(&mut self, table: BookTable) {
        self.rank = self.rank.clamp(1, table.max_rank);
        let (lo, hi) = table.rating_range;
        self.rating = self.rating.clamp(lo, hi);
        self.table = table;
        self.status_message = None;
    }

    /// The letter the Alphabet tab filters on, if the text box holds one.
    pub fn letter_char(&self) -> Option<char> {
        self.letter.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Book;

    fn small_table() -> BookTable {
        BookTable::from_books(vec![Book {
            rank: 1,
            title: "Only".to_string(),
            author: "One".to_string(),
            rating: 3.0,
            format: Format::Ebook,
            copies: 1,
            availability: "Available".to_string(),
            wait_weeks: 0,
        }])
    }

    #[test]
    fn set_table_clamps_parameters() {
        let mut state = AppState::new(small_table());
        state.rank = 200;
        state.rating = 4.6;
        state.set_table(small_table());
        assert_eq!(state.rank, 1);
        let (lo, hi) = state.table.rating_range;
        assert!(state.rating >= lo && state.rating <= hi);
    }

    #[test]
    fn letter_char_takes_first_character() {
        let mut state = AppState::new(small_table());
        state.letter = "Ab".to_string();
        assert_eq!(state.letter_char(), Some('A'));
        state.letter.clear();
        assert_eq!(state.letter_char(), None);
    }
}
