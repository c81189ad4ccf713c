use std::collections::BTreeMap;

use super::model::{Book, Column, Format};

// ---------------------------------------------------------------------------
// Query functions: pure (rows, parameters) → rows, never mutating input
// ---------------------------------------------------------------------------

/// Top 5 books whose title starts with `letter`, sorted by rating.
///
/// Matching is case-sensitive against the source data: 'a' does not match
/// "Apple". Fewer than 5 rows (or none) is a valid result.
pub fn alphabet_filter(books: &[Book], letter: char, ascending: bool) -> Vec<Book> {
    let mut matches: Vec<Book> = books
        .iter()
        .filter(|b| b.title.starts_with(letter))
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        let ord = a.rating.total_cmp(&b.rating);
        if ascending { ord } else { ord.reverse() }
    });
    matches.truncate(5);
    matches
}

/// The book at the given rank within one subtable's independent 1..count
/// ranking. `None` past the end of the subtable.
pub fn rank_lookup(books: &[Book], rank: u32) -> Option<Book> {
    books.iter().find(|b| b.rank == rank).cloned()
}

/// All books (any format) with exactly this hold wait, in source order.
/// Feeds the copies histogram; the aggregation itself lives downstream.
pub fn wait_time_filter(books: &[Book], wait_weeks: u32) -> Vec<Book> {
    books
        .iter()
        .filter(|b| b.wait_weeks == wait_weeks)
        .cloned()
        .collect()
}

/// The books of one format, exposed twice: once for the ratings histogram
/// and once for the copies histogram.
pub fn format_filter(books: &[Book], format: Format) -> (Vec<Book>, Vec<Book>) {
    let selected: Vec<Book> = books
        .iter()
        .filter(|b| b.format == format)
        .cloned()
        .collect();
    (selected.clone(), selected)
}

/// Books whose rating matches the slider value, sorted by rank.
///
/// Both sides are rounded to one decimal before comparing, so ratings stored
/// with more precision than the slider's 0.1 step still match.
pub fn rating_filter(books: &[Book], rating: f64, ascending: bool) -> Vec<Book> {
    let wanted = round1(rating);
    let mut matches: Vec<Book> = books
        .iter()
        .filter(|b| round1(b.rating) == wanted)
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        let ord = a.rank.cmp(&b.rank);
        if ascending { ord } else { ord.reverse() }
    });
    matches
}

fn round1(v: f64) -> i64 {
    (v * 10.0).round() as i64
}

/// An author together with how many books of theirs are in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub author: String,
    pub books: usize,
}

/// The `n` authors with the most (or fewest, per `ascending`) books.
///
/// Ties in the count break by author name ascending, whichever direction the
/// count sort runs, so the output is deterministic.
pub fn top_authors(books: &[Book], n: usize, ascending: bool) -> Vec<AuthorCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for b in books {
        *counts.entry(b.author.as_str()).or_default() += 1;
    }

    let mut entries: Vec<AuthorCount> = counts
        .into_iter()
        .map(|(author, books)| AuthorCount {
            author: author.to_string(),
            books,
        })
        .collect();
    entries.sort_by(|a, b| {
        let ord = a.books.cmp(&b.books);
        let ord = if ascending { ord } else { ord.reverse() };
        ord.then_with(|| a.author.cmp(&b.author))
    });
    entries.truncate(n);
    entries
}

/// The whole table resorted by one column. Stable, so tie groups keep their
/// source order.
pub fn sort_by_column(books: &[Book], column: Column, ascending: bool) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match column {
            Column::Rank => a.rank.cmp(&b.rank),
            Column::Title => a.title.cmp(&b.title),
            Column::Author => a.author.cmp(&b.author),
            Column::Rating => a.rating.total_cmp(&b.rating),
            // Sorts as the source spells it: AUDIOBOOK before EBOOK.
            Column::Format => a.format.label().cmp(b.format.label()),
            Column::Copies => a.copies.cmp(&b.copies),
            Column::Availability => a.availability.cmp(&b.availability),
            Column::WaitWeeks => a.wait_weeks.cmp(&b.wait_weeks),
        };
        if ascending { ord } else { ord.reverse() }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, rating: f64) -> Book {
        Book {
            rank: 1,
            title: title.to_string(),
            author: author.to_string(),
            rating,
            format: Format::Ebook,
            copies: 1,
            availability: "Available".to_string(),
            wait_weeks: 0,
        }
    }

    fn ranked(rank: u32, format: Format) -> Book {
        Book {
            rank,
            title: format!("Title {rank}"),
            author: "Author".to_string(),
            rating: 4.0,
            format,
            copies: rank,
            availability: "Available".to_string(),
            wait_weeks: rank % 3,
        }
    }

    #[test]
    fn alphabet_filter_scenario() {
        let books = vec![
            book("Atlas", "A", 4.0),
            book("Apple", "B", 4.5),
            book("Banana", "C", 3.0),
        ];
        let result = alphabet_filter(&books, 'A', false);
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "Atlas"]);
    }

    #[test]
    fn alphabet_filter_caps_at_five_and_sorts_ascending() {
        let books: Vec<Book> = (0..8)
            .map(|i| book(&format!("A{i}"), "X", 3.0 + i as f64 * 0.1))
            .collect();
        let result = alphabet_filter(&books, 'A', true);
        assert_eq!(result.len(), 5);
        for pair in result.windows(2) {
            assert!(pair[0].rating <= pair[1].rating);
        }
        assert!(result.iter().all(|b| b.title.starts_with('A')));
    }

    #[test]
    fn alphabet_filter_is_case_sensitive() {
        let books = vec![book("Apple", "B", 4.5)];
        assert!(alphabet_filter(&books, 'a', true).is_empty());
        assert_eq!(alphabet_filter(&books, 'A', true).len(), 1);
    }

    #[test]
    fn alphabet_filter_no_match_is_empty() {
        let books = vec![book("Apple", "B", 4.5)];
        assert!(alphabet_filter(&books, 'Z', true).is_empty());
    }

    #[test]
    fn rank_lookup_hit_and_miss() {
        let books: Vec<Book> = (1..=5).map(|r| ranked(r, Format::Ebook)).collect();
        let found = rank_lookup(&books, 3).unwrap();
        assert_eq!(found.rank, 3);
        assert!(rank_lookup(&books, 6).is_none());
    }

    #[test]
    fn wait_time_filter_is_exact_and_partitions() {
        let books: Vec<Book> = (1..=9).map(|r| ranked(r, Format::Ebook)).collect();
        let mut total = 0;
        for wait in 0..=27 {
            let matched = wait_time_filter(&books, wait);
            assert!(matched.iter().all(|b| b.wait_weeks == wait));
            total += matched.len();
        }
        assert_eq!(total, books.len());
    }

    #[test]
    fn format_filter_partitions_exhaustively() {
        let books: Vec<Book> = (1..=4)
            .map(|r| ranked(r, Format::Ebook))
            .chain((1..=3).map(|r| ranked(r, Format::Audiobook)))
            .collect();
        let (e_ratings, e_copies) = format_filter(&books, Format::Ebook);
        let (a_ratings, _) = format_filter(&books, Format::Audiobook);
        assert_eq!(e_ratings, e_copies);
        assert_eq!(e_ratings.len() + a_ratings.len(), books.len());
        assert!(e_ratings.iter().all(|b| b.format == Format::Ebook));
        assert!(a_ratings.iter().all(|b| b.format == Format::Audiobook));
    }

    #[test]
    fn rating_filter_rounds_to_one_decimal() {
        let books = vec![
            book("Close", "A", 3.96),
            book("Exact", "B", 4.0),
            book("Far", "C", 4.2),
        ];
        let result = rating_filter(&books, 4.0, true);
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Close", "Exact"]);
    }

    #[test]
    fn rating_filter_sorts_by_rank() {
        let mut books: Vec<Book> = (1..=5).map(|r| ranked(r, Format::Ebook)).collect();
        books.reverse();
        let result = rating_filter(&books, 4.0, false);
        let ranks: Vec<u32> = result.iter().map(|b| b.rank).collect();
        assert_eq!(ranks, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn top_authors_counts_and_truncates() {
        let books = vec![
            book("1", "King", 4.0),
            book("2", "King", 4.1),
            book("3", "King", 4.2),
            book("4", "Austen", 4.3),
            book("5", "Austen", 4.4),
            book("6", "Brown", 3.9),
        ];
        let top = top_authors(&books, 2, false);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], AuthorCount { author: "King".to_string(), books: 3 });
        assert_eq!(top[1], AuthorCount { author: "Austen".to_string(), books: 2 });
    }

    #[test]
    fn top_authors_ties_break_by_name() {
        let books = vec![
            book("1", "Zola", 4.0),
            book("2", "Adams", 4.1),
            book("3", "Moore", 4.2),
        ];
        let descending = top_authors(&books, 3, false);
        let names: Vec<&str> = descending.iter().map(|a| a.author.as_str()).collect();
        assert_eq!(names, ["Adams", "Moore", "Zola"]);
        let ascending = top_authors(&books, 3, true);
        let names: Vec<&str> = ascending.iter().map(|a| a.author.as_str()).collect();
        assert_eq!(names, ["Adams", "Moore", "Zola"]);
    }

    #[test]
    fn top_authors_direction_orders_counts() {
        let books = vec![
            book("1", "King", 4.0),
            book("2", "King", 4.1),
            book("3", "Brown", 3.9),
        ];
        let desc = top_authors(&books, 2, false);
        assert!(desc[0].books >= desc[1].books);
        let asc = top_authors(&books, 2, true);
        assert!(asc[0].books <= asc[1].books);
    }

    #[test]
    fn sort_by_column_is_idempotent() {
        let books = vec![
            book("Cherry", "C", 3.0),
            book("Apple", "A", 4.5),
            book("Banana", "B", 4.0),
        ];
        let once = sort_by_column(&books, Column::Title, true);
        let twice = sort_by_column(&once, Column::Title, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_by_column_flipped_direction_reverses() {
        let books = vec![
            book("Cherry", "C", 3.0),
            book("Apple", "A", 4.5),
            book("Banana", "B", 4.0),
        ];
        let up = sort_by_column(&books, Column::Rating, true);
        let mut down = sort_by_column(&books, Column::Rating, false);
        down.reverse();
        assert_eq!(up, down);
    }

    #[test]
    fn sort_by_format_puts_audiobooks_first_ascending() {
        let books = vec![ranked(1, Format::Ebook), ranked(1, Format::Audiobook)];
        let sorted = sort_by_column(&books, Column::Format, true);
        assert_eq!(sorted[0].format, Format::Audiobook);
        assert_eq!(sorted[1].format, Format::Ebook);
    }

    #[test]
    fn queries_do_not_mutate_input() {
        let books = vec![book("Beta", "B", 4.0), book("Alpha", "A", 3.5)];
        let snapshot = books.clone();
        let _ = alphabet_filter(&books, 'A', true);
        let _ = sort_by_column(&books, Column::Title, true);
        let _ = top_authors(&books, 1, false);
        assert_eq!(books, snapshot);
    }
}
