use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Format – which of the two independently-ranked lists a book belongs to
// ---------------------------------------------------------------------------

/// Book format, spelled exactly as the source CSV spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    Ebook,
    Audiobook,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Ebook, Format::Audiobook];

    /// The label used in the CSV and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Ebook => "EBOOK",
            Format::Audiobook => "AUDIOBOOK",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Book – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single book record. Field names map to the CSV headers; the data is
/// external and untrusted, so duplicate titles or odd availability strings
/// are tolerated as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Format")]
    pub format: Format,
    #[serde(rename = "Copies")]
    pub copies: u32,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Wait Weeks")]
    pub wait_weeks: u32,
}

// ---------------------------------------------------------------------------
// Column – the sortable columns of the table
// ---------------------------------------------------------------------------

/// One of the eight columns, as offered by the sort-by dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rank,
    Title,
    Author,
    Rating,
    Format,
    Copies,
    Availability,
    WaitWeeks,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Rank,
        Column::Title,
        Column::Author,
        Column::Rating,
        Column::Format,
        Column::Copies,
        Column::Availability,
        Column::WaitWeeks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Rank => "Rank",
            Column::Title => "Title",
            Column::Author => "Author",
            Column::Rating => "Rating",
            Column::Format => "Format",
            Column::Copies => "Copies",
            Column::Availability => "Availability",
            Column::WaitWeeks => "Wait Weeks",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// BookTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset plus the per-format subtables and a few cached
/// aggregates the widgets need. Built once at load and never mutated.
#[derive(Debug, Clone)]
pub struct BookTable {
    /// All records, in source order.
    pub books: Vec<Book>,
    /// Ebook records, independently rank-ordered 1..count.
    pub ebooks: Vec<Book>,
    /// Audiobook records, independently rank-ordered 1..count.
    pub audiobooks: Vec<Book>,
    /// Largest rank across the two subtables (at least 1, for slider bounds).
    pub max_rank: u32,
    /// Observed rating range, snapped outward to the 0.1 slider grid.
    pub rating_range: (f64, f64),
}

impl BookTable {
    /// Partition the rows by format and precompute the widget aggregates.
    pub fn from_books(books: Vec<Book>) -> Self {
        let ebooks: Vec<Book> = books
            .iter()
            .filter(|b| b.format == Format::Ebook)
            .cloned()
            .collect();
        let audiobooks: Vec<Book> = books
            .iter()
            .filter(|b| b.format == Format::Audiobook)
            .cloned()
            .collect();

        let max_rank = books.iter().map(|b| b.rank).max().unwrap_or(1).max(1);

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for b in &books {
            lo = lo.min(b.rating);
            hi = hi.max(b.rating);
        }
        let rating_range = if lo.is_finite() {
            ((lo * 10.0).floor() / 10.0, (hi * 10.0).ceil() / 10.0)
        } else {
            // Empty table: fall back to the historically observed bounds.
            (2.4, 4.7)
        };

        BookTable {
            books,
            ebooks,
            audiobooks,
            max_rank,
            rating_range,
        }
    }

    /// The subtable for the given format.
    pub fn subtable(&self, format: Format) -> &[Book] {
        match format {
            Format::Ebook => &self.ebooks,
            Format::Audiobook => &self.audiobooks,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(rank: u32, format: Format, rating: f64) -> Book {
        Book {
            rank,
            title: format!("Book {rank}"),
            author: "Someone".to_string(),
            rating,
            format,
            copies: 1,
            availability: "Available".to_string(),
            wait_weeks: 0,
        }
    }

    #[test]
    fn partitions_by_format_without_loss() {
        let table = BookTable::from_books(vec![
            book(1, Format::Ebook, 4.0),
            book(1, Format::Audiobook, 3.5),
            book(2, Format::Ebook, 4.2),
        ]);
        assert_eq!(table.ebooks.len(), 2);
        assert_eq!(table.audiobooks.len(), 1);
        assert_eq!(table.ebooks.len() + table.audiobooks.len(), table.len());
    }

    #[test]
    fn rating_range_snaps_to_slider_grid() {
        let table = BookTable::from_books(vec![
            book(1, Format::Ebook, 3.47),
            book(2, Format::Ebook, 4.61),
        ]);
        let (lo, hi) = table.rating_range;
        assert!((lo - 3.4).abs() < 1e-9);
        assert!((hi - 4.7).abs() < 1e-9);
    }

    #[test]
    fn empty_table_has_fallback_bounds() {
        let table = BookTable::from_books(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.max_rank, 1);
        assert_eq!(table.rating_range, (2.4, 4.7));
    }

    #[test]
    fn max_rank_spans_both_subtables() {
        let table = BookTable::from_books(vec![
            book(3, Format::Ebook, 4.0),
            book(7, Format::Audiobook, 3.5),
        ]);
        assert_eq!(table.max_rank, 7);
    }
}
