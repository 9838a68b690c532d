//! Catalog provider.
//!
//! Builds the immutable [`Catalog`] once at plugin start: the built-in sheets
//! embedded in the binary, optionally followed by sheets from a user TOML file
//! (`catalog_file` in the plugin configuration).
//!
//! # User catalog format
//!
//! ```toml
//! [[sheets]]
//! id = "rust"
//! name = "Rust"
//! slug = "rust"
//! icon = "Cog"
//! type = "Language"
//! description = "Systems language."
//!
//! [[sheets.categories]]
//! id = "rust-basics"
//! title = "Basics"
//!
//! [[sheets.categories.snippets]]
//! id = "rust-let"
//! title = "Bindings"
//! description = "Immutable by default."
//! code = "let x = 5;"
//! language = "rust"
//! tags = ["Basics"]
//! ```
//!
//! A user file that cannot be read, parsed, or that collides with a built-in
//! id is logged and skipped; the built-ins are always served.

mod builtin;

pub use builtin::builtin_catalog;

use crate::domain::{Catalog, DevCheatError, Result, Sheet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

/// Reads the sheets declared in a user catalog file.
///
/// # Errors
///
/// Returns [`DevCheatError::Io`] if the file cannot be read and
/// [`DevCheatError::Catalog`] if it is not a valid catalog document.
pub fn sheets_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Sheet>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let file: CatalogFile = toml::from_str(&contents).map_err(|e| {
        DevCheatError::Catalog(format!(
            "failed to parse catalog file {}: {e}",
            path.as_ref().display()
        ))
    })?;
    Ok(file.sheets)
}

/// Builds the runtime catalog.
///
/// Never fails: every error degrades to a smaller catalog and is logged.
#[must_use]
pub fn load(user_file: Option<&Path>) -> Catalog {
    let _span = tracing::debug_span!("load_catalog", has_user_file = user_file.is_some()).entered();

    let builtins = builtin_catalog().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in catalog is invalid");
        Catalog::default()
    });

    let Some(path) = user_file else {
        return builtins;
    };

    match sheets_from_file(path) {
        Ok(extra) => {
            let count = extra.len();
            let combined = builtins.clone().extended(extra);
            match combined.validate() {
                Ok(()) => {
                    tracing::info!(path = %path.display(), sheets = count, "loaded user catalog");
                    combined
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "user catalog rejected");
                    builtins
                }
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "user catalog unreadable");
            builtins
        }
    }
}
