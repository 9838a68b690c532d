//! Storage record models for the persistence layer.

use crate::domain::ThemeMode;
use serde::{Deserialize, Serialize};

/// Persisted user preferences.
///
/// Kept separate from the domain [`ThemeMode`] so the file format can carry
/// bookkeeping (timestamps) the UI never needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRecord {
    /// Last chosen theme mode, `None` until the user toggles once.
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,

    /// Unix timestamp of the last change.
    #[serde(default)]
    pub updated_at: Option<i64>,
}
