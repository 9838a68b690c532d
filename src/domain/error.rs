//! Error types for the DevCheat plugin.
//!
//! This module defines the centralized error type [`DevCheatError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. The filter engine
//! and navigation state never fail; these errors come from the collaborators around
//! them (catalog loading, themes, storage, export and worker I/O).

use thiserror::Error;

/// The main error type for DevCheat plugin operations.
///
/// Most variants carry a human-readable description. I/O failures wrap the
/// underlying `std::io::Error` through `#[from]` so `?` converts them.
///
/// # Examples
///
/// ```
/// use devcheat::DevCheatError;
///
/// fn load_sheet(source: &str) -> Result<(), DevCheatError> {
///     if source.is_empty() {
///         return Err(DevCheatError::Catalog("empty sheet document".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(load_sheet("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DevCheatError {
    /// Preference storage failed to read, parse or write its file.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A catalog document could not be parsed or violates an id uniqueness rule.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A Markdown export could not be produced or written.
    #[error("Export error: {0}")]
    Export(String),
}

/// A specialized `Result` type for DevCheat operations.
pub type Result<T> = std::result::Result<T, DevCheatError>;
