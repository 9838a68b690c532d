//! Domain layer for the DevCheat plugin.
//!
//! Holds the catalog entities, the persisted theme preference and the crate
//! error type. Nothing here depends on Zellij APIs or on the filesystem.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`sheet`]: Catalog, sheets, categories and snippets
//! - [`preferences`]: Persisted light/dark theme mode

pub mod error;
pub mod preferences;
pub mod sheet;

pub use error::{DevCheatError, Result};
pub use preferences::ThemeMode;
pub use sheet::{Catalog, Category, Difficulty, Sheet, SheetType, Snippet};
