/// Data layer: core types, loading, and the query functions.
///
/// Architecture:
/// ```text
///  remote CSV / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → BookTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ BookTable │  Vec<Book> + ebook/audiobook subtables
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  pure (rows, parameters) → rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
