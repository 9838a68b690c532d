//! JSON file-based storage backend.
//!
//! Keeps the whole document in memory and rewrites it on every change using
//! an atomic write (write-to-temp + rename), so a crash never leaves a
//! half-written file behind.

use crate::domain::error::{DevCheatError, Result};
use crate::domain::ThemeMode;
use crate::storage::backend::Storage;
use crate::storage::models::PreferencesRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    preferences: PreferencesRecord,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            preferences: PreferencesRecord::default(),
        }
    }
}

/// JSON file storage backend.
///
/// `Send` but not `Sync`: it lives on the single worker thread.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "theme_mode": "light",
///     "updated_at": 1700000000
///   }
/// }
/// ```
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
    /// Set when `data` differs from the file on disk.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or if the
    /// file exists but cannot be read or does not contain valid JSON.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(
            version = data.version,
            theme_mode = ?data.preferences.theme_mode,
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| DevCheatError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > STORAGE_VERSION {
            tracing::warn!(
                found = data.version,
                supported = STORAGE_VERSION,
                "preferences file is newer than this plugin"
            );
        }

        Ok(data)
    }

    /// Persists `data` if dirty, through a temporary sibling file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temp write or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DevCheatError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn preferences(&self) -> Result<PreferencesRecord> {
        Ok(self.data.preferences.clone())
    }

    fn set_theme_mode(&mut self, mode: ThemeMode, timestamp: i64) -> Result<()> {
        let _span = tracing::debug_span!("json_set_theme_mode", mode = %mode, timestamp).entered();

        if self.data.preferences.theme_mode == Some(mode) {
            tracing::debug!("theme mode unchanged");
            return Ok(());
        }

        self.data.preferences.theme_mode = Some(mode);
        self.data.preferences.updated_at = Some(timestamp);
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_file_has_no_theme_mode() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("preferences.json")).unwrap();
        assert_eq!(storage.theme_mode().unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn theme_mode_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.set_theme_mode(ThemeMode::Light, 42).unwrap();
        }

        let storage = JsonStorage::new(path.clone()).unwrap();
        let prefs = storage.preferences().unwrap();
        assert_eq!(prefs.theme_mode, Some(ThemeMode::Light));
        assert_eq!(prefs.updated_at, Some(42));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn unchanged_mode_keeps_original_timestamp() {
        let dir = tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("preferences.json")).unwrap();
        storage.set_theme_mode(ThemeMode::Dark, 1).unwrap();
        storage.set_theme_mode(ThemeMode::Dark, 2).unwrap();
        assert_eq!(storage.preferences().unwrap().updated_at, Some(1));
    }

    #[test]
    fn file_uses_lowercase_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.set_theme_mode(ThemeMode::Light, 7).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["preferences"]["theme_mode"], "light");
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(path).err().unwrap();
        assert!(matches!(err, DevCheatError::Storage(_)));
    }
}
