//! DevCheat: a Zellij plugin for browsing developer cheat sheets.
//!
//! DevCheat renders a catalog of cheat sheets (languages, frameworks,
//! databases, tools) in a floating terminal pane:
//! - A Home dashboard grouping sheets by type, searchable by name,
//!   description and type
//! - A sheet view listing categories and snippets, searchable by title,
//!   description, code and tags
//! - A sidebar to jump between sheets
//! - Markdown export of the open sheet and a persisted dark/light mode,
//!   both handled by a background worker

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Navigation state machine                         │
//! │  - View composition                                 │
//! │  - Event handling, action dispatching               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Filter Engine │   │ Worker Layer  │
//! │ (ui/)         │   │ (filter/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - Substring   │   │ - Preferences │
//! │ - Theming     │   │   matching    │   │ - Export I/O  │
//! │ - Icons       │   │ - Grouping    │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Export, Storage, Infrastructure, Domain   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/devcheat.wasm" {
//!         theme "catppuccin-frappe"
//!         light_theme "catppuccin-latte"
//!         mode "dark"
//!         catalog_file "~/.config/devcheat/sheets.toml"
//!         export_dir "~/Downloads"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use devcheat::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::SearchMode, Event::Char('g'), Event::Char('i'), Event::Char('t')] {
//!     handle_event(&mut state, &event)?;
//! }
//! handle_event(&mut state, &Event::Select)?;
//! assert_eq!(state.nav.active_sheet_id(), Some("git"));
//! # Ok::<(), devcheat::DevCheatError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod export;
pub mod filter;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, NavigationState, SearchFocus};
pub use domain::{Catalog, DevCheatError, Result, ThemeMode};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";
const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme used in dark mode. Ignored if `theme_file` is set.
    pub theme: String,

    /// Built-in theme used in light mode.
    pub light_theme: String,

    /// Custom TOML theme replacing the dark theme. See [`ui::theme`].
    pub theme_file: Option<String>,

    /// Mode used until the worker reports the persisted one.
    pub mode: ThemeMode,

    /// Extra `[[sheets]]` appended to the built-in catalog.
    pub catalog_file: Option<String>,

    /// Directory Markdown exports are written to. Default: `"~"`
    pub export_dir: String,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_DARK_THEME.to_string(),
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            theme_file: None,
            mode: ThemeMode::Dark,
            catalog_file: None,
            export_dir: "~".to_string(),
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank or unparsable values fall back to their defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use devcheat::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "light".to_string());
    /// map.insert("export_dir".to_string(), "~/Downloads".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.mode, ThemeMode::Light);
    /// assert_eq!(config.export_dir, "~/Downloads");
    /// assert_eq!(config.theme, "catppuccin-mocha");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            theme: get("theme").unwrap_or(defaults.theme),
            light_theme: get("light_theme").unwrap_or(defaults.light_theme),
            theme_file: get("theme_file"),
            mode: get("mode")
                .and_then(|value| ThemeMode::parse(&value))
                .unwrap_or(defaults.mode),
            catalog_file: get("catalog_file"),
            export_dir: get("export_dir").unwrap_or(defaults.export_dir),
            trace_level: get("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Builds the initial application state: Home, empty query, sidebar closed.
///
/// Themes and the catalog are loaded here. Any failure falls back to a
/// default (built-in theme, built-in catalog) and is logged; initialization
/// itself never fails.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let dark_theme = config.theme_file.as_ref().map_or_else(
        || named_theme(&config.theme, ThemeMode::Dark),
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                named_theme(&config.theme, ThemeMode::Dark)
            })
        },
    );
    let light_theme = named_theme(&config.light_theme, ThemeMode::Light);

    let catalog_path = config.catalog_file.as_deref().map(expand_tilde);
    let catalog = catalog::load(catalog_path.as_deref().map(Path::new));

    tracing::info!(
        sheets = catalog.len(),
        dark_theme = %dark_theme.name,
        light_theme = %light_theme.name,
        "devcheat initialized"
    );

    let mut state = AppState::new(catalog, dark_theme, light_theme);
    state.theme_mode = config.mode;
    state.export_dir = expand_tilde(&config.export_dir);
    state
}

fn named_theme(name: &str, mode: ThemeMode) -> Theme {
    Theme::from_name(name).unwrap_or_else(|| {
        tracing::debug!(theme_name = %name, "unknown theme, using default");
        Theme::default_for(mode)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("mode", "sepia"), ("trace_level", "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn all_keys_are_read() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-frappe"),
            ("light_theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("mode", "light"),
            ("catalog_file", "~/sheets.toml"),
            ("export_dir", "/tmp"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(
            config,
            Config {
                theme: "catppuccin-frappe".to_string(),
                light_theme: "catppuccin-latte".to_string(),
                theme_file: Some("~/theme.toml".to_string()),
                mode: ThemeMode::Light,
                catalog_file: Some("~/sheets.toml".to_string()),
                export_dir: "/tmp".to_string(),
                trace_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn initialize_starts_home_with_configured_mode() {
        let config = Config {
            theme: "catppuccin-frappe".to_string(),
            mode: ThemeMode::Light,
            export_dir: "~/Downloads".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);

        assert!(state.nav.is_home());
        assert_eq!(state.nav.query(), "");
        assert!(!state.nav.is_sidebar_open());
        assert_eq!(state.theme().name, "catppuccin-latte");
        assert_eq!(state.export_dir, "/host/Downloads");
        assert_eq!(state.catalog().len(), 18);
    }

    #[test]
    fn unknown_theme_and_missing_files_fall_back() {
        let config = Config {
            theme: "no-such-theme".to_string(),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            catalog_file: Some("/nonexistent/sheets.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme().name, "catppuccin-mocha");
        assert_eq!(state.catalog().len(), 18);
    }

    #[test]
    fn theme_file_replaces_dark_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme().name, "custom");
    }
}
