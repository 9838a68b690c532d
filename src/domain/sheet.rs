//! Cheat sheet domain model.
//!
//! A [`Catalog`] is an ordered list of [`Sheet`]s, each sheet owns ordered
//! [`Category`]s and each category owns ordered [`Snippet`]s. Everything in
//! this module is immutable once the catalog has been built; the only mutable
//! state in the plugin lives in [`crate::app::NavigationState`].

use crate::domain::error::{DevCheatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Skill level a snippet is aimed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of technology a sheet documents.
///
/// The declaration order is the canonical grouping order used by the home
/// dashboard and the sidebar: Language, Framework, Database, Tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SheetType {
    Language,
    Framework,
    Database,
    Tool,
}

impl SheetType {
    /// All sheet types in canonical display order.
    pub const ALL: [Self; 4] = [Self::Language, Self::Framework, Self::Database, Self::Tool];

    /// Label matched by catalog search and shown in badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::Framework => "Framework",
            Self::Database => "Database",
            Self::Tool => "Tool",
        }
    }

    /// Plural heading used for group titles ("Languages", "Tools", ...).
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Language => "Languages",
            Self::Framework => "Frameworks",
            Self::Database => "Databases",
            Self::Tool => "Tools",
        }
    }
}

impl fmt::Display for SheetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One titled, tagged code example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    /// Syntax family of `code`, used as the fence tag on export.
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// A named group of snippets inside a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

/// One technology's cheat sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: String,
    pub name: String,
    /// File-name friendly identifier, used for export file names.
    pub slug: String,
    pub description: String,
    #[serde(rename = "type")]
    pub sheet_type: SheetType,
    /// Icon name resolved to a glyph by [`crate::ui::icons::resolve_icon`].
    #[serde(rename = "icon", default)]
    pub icon_ref: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Sheet {
    /// Total number of snippets across all categories.
    #[must_use]
    pub fn snippet_count(&self) -> usize {
        self.categories.iter().map(|c| c.snippets.len()).sum()
    }
}

/// The complete, read-only collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    sheets: Vec<Sheet>,
}

impl Catalog {
    /// Wraps an ordered list of sheets. Order is preserved everywhere the
    /// catalog is displayed.
    #[must_use]
    pub const fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Sheets in catalog order.
    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Resolves a sheet id. Returns `None` for ids not present in the catalog.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Appends sheets after the existing ones.
    #[must_use]
    pub fn extended(mut self, more: Vec<Sheet>) -> Self {
        self.sheets.extend(more);
        self
    }

    /// Checks that sheet, category and snippet ids are each unique across
    /// the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DevCheatError::Catalog`] naming the first duplicate found,
    /// scanning in catalog order.
    pub fn validate(&self) -> Result<()> {
        let mut sheet_ids = HashSet::new();
        let mut category_ids = HashSet::new();
        let mut snippet_ids = HashSet::new();

        for sheet in &self.sheets {
            if !sheet_ids.insert(sheet.id.as_str()) {
                return Err(DevCheatError::Catalog(format!("duplicate sheet id `{}`", sheet.id)));
            }
            for category in &sheet.categories {
                if !category_ids.insert(category.id.as_str()) {
                    return Err(DevCheatError::Catalog(format!(
                        "duplicate category id `{}` in sheet `{}`",
                        category.id, sheet.id
                    )));
                }
                for snippet in &category.snippets {
                    if !snippet_ids.insert(snippet.id.as_str()) {
                        return Err(DevCheatError::Catalog(format!(
                            "duplicate snippet id `{}` in sheet `{}`",
                            snippet.id, sheet.id
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
