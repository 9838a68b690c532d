//! Icon reference to glyph lookup.
//!
//! Sheets name their icon with a Lucide-style identifier (`"GitBranch"`,
//! `"Database"`, ...). The terminal has no icon font it can rely on, so each
//! known name maps to a two-column ASCII badge. Unknown names fall back to
//! [`DEFAULT_GLYPH`].

/// Glyph used for any icon reference without a mapping.
pub const DEFAULT_GLYPH: &str = "</";

/// Every glyph is exactly this many columns wide.
pub const GLYPH_WIDTH: usize = 2;

/// Resolves an icon reference to its glyph.
///
/// # Example
///
/// ```
/// use devcheat::ui::icons::{resolve_icon, DEFAULT_GLYPH};
///
/// assert_eq!(resolve_icon("GitBranch"), "-<");
/// assert_eq!(resolve_icon("NoSuchIcon"), DEFAULT_GLYPH);
/// ```
#[must_use]
pub fn resolve_icon(icon_ref: &str) -> &'static str {
    match icon_ref {
        "FileCode" => "<>",
        "Palette" => "##",
        "Braces" => "{}",
        "FileType2" => "Ts",
        "Atom" => "()",
        "Smartphone" => "[o",
        "Layers" => "==",
        "Hexagon" => "/\\",
        "Wind" => "~~",
        "Terminal" => ">_",
        "Coffee" => "c]",
        "Code2" => "++",
        "Hash" => "#]",
        "Server" => "$_",
        "GitBranch" => "-<",
        "Database" => "db",
        "Container" => "[]",
        "Gamepad2" => "oo",
        _ => DEFAULT_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn every_builtin_icon_has_a_glyph() {
        let catalog = builtin_catalog().unwrap();
        for sheet in catalog.sheets() {
            assert_ne!(resolve_icon(&sheet.icon_ref), DEFAULT_GLYPH, "{}", sheet.id);
        }
    }

    #[test]
    fn glyphs_have_uniform_width() {
        for name in ["FileCode", "Hexagon", "Gamepad2", "", "Unknown"] {
            assert_eq!(resolve_icon(name).chars().count(), GLYPH_WIDTH);
        }
    }
}
