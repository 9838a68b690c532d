//! Filter engine.
//!
//! Pure functions over the immutable [`Catalog`](crate::domain::Catalog):
//!
//! - [`filter_catalog`]: sheets matching a query, grouped by type
//! - [`filter_catalog_by_name`]: the same grouping over sheet names only
//! - [`filter_sheet`]: categories of one sheet with only matching snippets
//!
//! Matching is a single case-insensitive substring test, implemented once in
//! [`QueryMatcher`] and reused by the UI for highlighting. Every call re-scans
//! the catalog; nothing is cached between keystrokes.

mod engine;
mod matcher;

pub use engine::{filter_catalog, filter_catalog_by_name, filter_sheet, FilteredCategory, SheetGroup};
pub use matcher::QueryMatcher;
