//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from a
//! [`View`](crate::app::view::View) plus cursor positions, and consumed by the
//! renderer. They hold display-ready data only: strings, selection flags and
//! precomputed highlight ranges. Windowing has already been applied, so every
//! row in [`UIViewModel::rows`] is meant to be drawn.

use crate::domain::Difficulty;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Visible content rows, top to bottom.
    pub rows: Vec<ContentRow>,

    /// Replaces `rows` when the query filtered everything out.
    pub empty_state: Option<EmptyState>,

    /// Present while the sidebar is open.
    pub sidebar: Option<SidebarInfo>,

    /// Last export or worker message, shown above the footer.
    pub status: Option<String>,

    pub footer: FooterInfo,
}

/// Title bar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Second, dimmed line (sheet description or catalog summary).
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g. `"/: search  t: theme  q: quit"`).
    pub keybindings: String,
}

/// Shown when no sheet or snippet survives the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
    /// `"Search cheat sheets"` on Home, `"Search in <sheet>"` on a sheet.
    pub placeholder: String,
}

/// One line of the content pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRow {
    /// Type group on Home (`Languages (5)`).
    GroupHeading { title: String, count: usize },
    SheetEntry(SheetRow),
    /// Category of the open sheet with its surviving snippet count.
    CategoryHeading { title: String, count: usize },
    SnippetEntry(SnippetRow),
    /// Description of the selected, expanded snippet.
    Description { text: String },
    /// One line of the selected snippet's code.
    CodeLine { text: String },
    Blank,
}

/// A sheet on the Home dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub glyph: &'static str,
    pub name: String,
    pub description: String,
    pub is_selected: bool,
    /// Character ranges of `name` matching the query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A snippet of the open sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRow {
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub is_selected: bool,
    /// Character ranges of `title` matching the query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Sidebar contents, already windowed to the pane height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    /// Text typed into the sidebar's name filter.
    pub filter: String,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    /// `Home Dashboard`, active when no sheet is open.
    Home { is_selected: bool, is_active: bool },
    /// Type group label; not selectable.
    Heading { title: String },
    Sheet {
        glyph: &'static str,
        name: String,
        is_selected: bool,
        is_active: bool,
        /// Character ranges of `name` matched by the sidebar filter.
        highlight_ranges: Vec<(usize, usize)>,
    },
}
