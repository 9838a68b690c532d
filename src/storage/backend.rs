//! Storage backend abstraction.
//!
//! The [`Storage`] trait covers exactly what the worker needs: reading and
//! writing the theme preference. Only the worker thread holds a backend.

use crate::domain::error::Result;
use crate::domain::ThemeMode;
use crate::storage::models::PreferencesRecord;

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use devcheat::domain::ThemeMode;
/// use devcheat::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/preferences.json"))?;
/// storage.set_theme_mode(ThemeMode::Light, 1_700_000_000)?;
/// assert_eq!(storage.theme_mode()?, Some(ThemeMode::Light));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Full preferences record.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn preferences(&self) -> Result<PreferencesRecord>;

    /// Stored theme mode, `Ok(None)` if never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn theme_mode(&self) -> Result<Option<ThemeMode>> {
        Ok(self.preferences()?.theme_mode)
    }

    /// Records a theme mode change made at `timestamp` (Unix seconds).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_theme_mode(&mut self, mode: ThemeMode, timestamp: i64) -> Result<()>;
}
