use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{Book, BookTable};

/// The fixed data source: Arizona's top-books CSV, assumed static for the
/// process lifetime.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/brinleyostler/AZ-top-books/main/AZ_top_books.csv";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a load attempt failed, split by which collaborator misbehaved.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("data source returned HTTP {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the dataset from the fixed URL and parse it. Called once at
/// startup; any failure here is fatal (no partial load).
pub fn fetch_books(url: &str) -> Result<BookTable> {
    let response = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("building HTTP client")?
        .get(url)
        .send()
        .map_err(|source| LoadError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        bail!(LoadError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    parse_csv(response).with_context(|| format!("parsing CSV from {url}"))
}

/// Load a dataset from a local CSV with the same header layout. Used by the
/// File→Open fallback; a failure here is non-fatal for the session.
pub fn load_csv_path(path: &Path) -> Result<BookTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file).with_context(|| format!("parsing CSV from {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the CSV body into a [`BookTable`]. Expects a header row matching
/// the Book field renames exactly; any malformed row aborts the whole parse.
fn parse_csv<R: Read>(reader: R) -> Result<BookTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut books = Vec::new();
    for (row, result) in csv_reader.deserialize::<Book>().enumerate() {
        let book = result.map_err(|source| LoadError::Csv { row, source })?;
        books.push(book);
    }

    Ok(BookTable::from_books(books))
}
