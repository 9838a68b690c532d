//! Input mode state types.
//!
//! The plugin operates in one of two input modes:
//! - **Normal**: navigation and commands
//! - **Search**: keystrokes edit the query, or move through results
//!
//! Whether the sidebar is open and which sheet is active live in
//! [`NavigationState`](super::NavigationState), not here: modes only decide
//! how a key is interpreted.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters and backspace edit the query; Enter switches to Navigating.
    Typing,

    /// j/k move through results; `/` returns to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Determines the active keybindings and the footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,

    /// Search bar visible with the given focus.
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
