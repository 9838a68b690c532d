//! Theme management and ANSI escape sequence generation.
//!
//! DevCheat carries two themes at once: one for dark mode and one for light
//! mode. The active one is picked from the persisted [`ThemeMode`]. Both can be
//! built-in Catppuccin palettes or custom TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark)
//! - `catppuccin-latte`: Light theme with soft pastels (default light)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! active_sheet_fg = "#f9e2af"
//! code_fg = "#94e2d5"
//! group_heading_fg = "#cba6f7"
//! beginner_fg = "#a6e3a1"
//! intermediate_fg = "#fab387"
//! advanced_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```
//! use devcheat::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::{DevCheatError, Difficulty, Result, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (descriptions, footer hints, counts).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Sidebar marker for the sheet currently open.
    pub active_sheet_fg: String,
    /// Snippet code lines.
    pub code_fg: String,
    /// Type group and category headings.
    pub group_heading_fg: String,

    pub beginner_fg: String,
    pub intermediate_fg: String,
    pub advanced_fg: String,
}

impl ThemeColors {
    /// Badge color for a snippet difficulty.
    #[must_use]
    pub fn difficulty_fg(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Beginner => &self.beginner_fg,
            Difficulty::Intermediate => &self.intermediate_fg,
            Difficulty::Advanced => &self.advanced_fg,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use devcheat::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DevCheatError::Theme`] if the file cannot be read or the TOML
    /// content does not describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DevCheatError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DevCheatError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Built-in default for the given mode: Mocha for dark, Latte for light.
    #[must_use]
    pub fn default_for(mode: ThemeMode) -> Self {
        let name = match mode {
            ThemeMode::Dark => "catppuccin-mocha",
            ThemeMode::Light => "catppuccin-latte",
        };
        Self::from_name(name).unwrap_or_else(Self::monochrome)
    }

    /// Palette of last resort when no theme TOML can be parsed.
    fn monochrome() -> Self {
        let white = || "#ffffff".to_string();
        let grey = || "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                selection_fg: "#000000".to_string(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                search_bar_border: white(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: grey(),
                empty_state_fg: white(),
                active_sheet_fg: white(),
                code_fg: white(),
                group_heading_fg: white(),
                beginner_fg: white(),
                intermediate_fg: white(),
                advanced_fg: white(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple. Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence
    /// (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence
    /// (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default dark theme (Catppuccin Mocha).
    fn default() -> Self {
        Self::default_for(ThemeMode::Dark)
    }
}
