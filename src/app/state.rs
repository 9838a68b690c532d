//! Application state and view model computation.
//!
//! [`AppState`] pairs the immutable [`Catalog`] with everything that changes
//! during a session: the [`NavigationState`], the input mode, two cursors
//! (content list and sidebar), the theme mode and the last status message.
//!
//! Nothing derived from the catalog is stored. Every read goes through
//! [`compute_view`], so the content pane, the selection bounds and the
//! rendered frame can never disagree with the navigation state.
//!
//! # Example
//!
//! ```
//! use devcheat::app::AppState;
//! use devcheat::catalog::builtin_catalog;
//! use devcheat::ui::Theme;
//!
//! let state = AppState::new(builtin_catalog().unwrap(), Theme::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "DevCheat");
//! ```

use super::modes::{InputMode, SearchFocus};
use super::navigation::NavigationState;
use super::view::{compute_view, View};
use crate::domain::{Catalog, Sheet, ThemeMode};
use crate::export;
use crate::filter::{filter_catalog_by_name, QueryMatcher};
use crate::ui::components::{content_height, SIDEBAR_FILTER_ROWS};
use crate::ui::icons::resolve_icon;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ContentRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, SheetRow, SidebarEntry, SidebarInfo,
    SnippetRow, UIViewModel,
};
use crate::worker::WorkerMessage;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,

    /// Active sheet, query and sidebar visibility.
    pub nav: NavigationState,

    pub input_mode: InputMode,

    /// Cursor over the selectable items of the current view: sheets on Home,
    /// snippets on a sheet. Wraps around during navigation.
    pub selected_index: usize,

    /// Cursor over sidebar targets; 0 is Home Dashboard.
    pub sidebar_index: usize,

    /// Name filter typed into the open sidebar. Independent of the
    /// navigation query and kept while the sidebar is closed.
    pub sidebar_filter: String,

    dark_theme: Theme,
    light_theme: Theme,
    pub theme_mode: ThemeMode,

    /// Sandbox directory exports are written to.
    pub export_dir: String,

    /// Shown above the footer until the next navigation.
    pub status: Option<String>,
}

impl AppState {
    /// Home view, empty query, Normal mode, dark theme.
    #[must_use]
    pub fn new(catalog: Catalog, dark_theme: Theme, light_theme: Theme) -> Self {
        Self {
            catalog,
            nav: NavigationState::new(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            sidebar_index: 0,
            sidebar_filter: String::new(),
            dark_theme,
            light_theme,
            theme_mode: ThemeMode::default(),
            export_dir: String::new(),
            status: None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Palette for the current theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        match self.theme_mode {
            ThemeMode::Dark => &self.dark_theme,
            ThemeMode::Light => &self.light_theme,
        }
    }

    /// What the content pane shows right now.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        compute_view(&self.catalog, &self.nav)
    }

    /// The sheet being shown, `None` on Home or for a dangling id.
    #[must_use]
    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.view().sheet()
    }

    /// Number of items the content cursor can land on.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        match self.view() {
            View::Home { groups } => groups.iter().map(|g| g.sheets.len()).sum(),
            View::Sheet { categories, .. } => categories.iter().map(|c| c.snippets.len()).sum(),
        }
    }

    /// Id of the sheet under the cursor on Home.
    #[must_use]
    pub fn selected_sheet_id(&self) -> Option<String> {
        let View::Home { groups } = self.view() else {
            return None;
        };
        groups
            .iter()
            .flat_map(|g| g.sheets.iter())
            .nth(self.selected_index)
            .map(|sheet| sheet.id.clone())
    }

    /// Sidebar targets in display order: `None` for Home, then the id of
    /// every sheet whose name passes the sidebar filter, grouped by type.
    /// Home is always listed. The navigation query plays no part.
    #[must_use]
    pub fn sidebar_targets(&self) -> Vec<Option<String>> {
        std::iter::once(None)
            .chain(
                filter_catalog_by_name(&self.catalog, &self.sidebar_filter)
                    .iter()
                    .flat_map(|g| g.sheets.iter().map(|sheet| Some(sheet.id.clone())))
                    .collect::<Vec<_>>(),
            )
            .collect()
    }

    /// Replaces the sidebar filter and keeps the sidebar cursor in range.
    pub fn set_sidebar_filter(&mut self, text: impl Into<String>) {
        self.sidebar_filter = text.into();
        let last = self.sidebar_targets().len().saturating_sub(1);
        self.sidebar_index = self.sidebar_index.min(last);
    }

    /// Moves the active cursor down by one, wrapping to the top.
    ///
    /// The sidebar cursor moves while the sidebar is open, the content cursor
    /// otherwise. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let (index, len) = self.active_cursor();
        if len == 0 {
            return;
        }
        *index = (*index + 1) % len;
    }

    /// Moves the active cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let (index, len) = self.active_cursor();
        if len == 0 {
            return;
        }
        *index = if *index == 0 { len - 1 } else { *index - 1 };
    }

    fn active_cursor(&mut self) -> (&mut usize, usize) {
        if self.nav.is_sidebar_open() {
            let len = self.sidebar_targets().len();
            (&mut self.sidebar_index, len)
        } else {
            let len = self.selectable_count();
            (&mut self.selected_index, len)
        }
    }

    /// Keeps the content cursor inside the current list.
    pub fn clamp_selection(&mut self) {
        let count = self.selectable_count();
        self.selected_index = if count == 0 { 0 } else { self.selected_index.min(count - 1) };
    }

    /// Replaces the query and re-clamps the cursor.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.nav.set_query(text);
        self.clamp_selection();
    }

    /// Opens `id`, resetting the cursor and leaving search mode.
    pub fn open_sheet(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(sheet_id = %id, "opening sheet");
        self.nav.select_sheet(id);
        self.after_view_change();
    }

    /// Returns to the dashboard, resetting the cursor and leaving search mode.
    pub fn go_home(&mut self) {
        tracing::debug!("returning home");
        self.nav.go_home();
        self.after_view_change();
    }

    fn after_view_change(&mut self) {
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    /// Opens the sidebar with its cursor on the active entry, or closes it.
    pub fn toggle_sidebar(&mut self) {
        if self.nav.is_sidebar_open() {
            self.nav.close_sidebar();
            return;
        }
        let active = self.nav.active_sheet_id().map(str::to_string);
        self.sidebar_index = self
            .sidebar_targets()
            .iter()
            .position(|target| *target == active)
            .unwrap_or(0);
        self.nav.open_sidebar();
    }

    /// Navigates to the sidebar entry under its cursor, then closes it.
    pub fn activate_sidebar_entry(&mut self) {
        match self.sidebar_targets().into_iter().nth(self.sidebar_index) {
            Some(Some(id)) => self.open_sheet(id),
            Some(None) => self.go_home(),
            None => {}
        }
        self.nav.close_sidebar();
    }

    /// Flips dark/light and returns the new mode.
    pub fn toggle_theme_mode(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.theme_mode
    }

    /// Worker request exporting the whole active sheet, ignoring the query.
    #[must_use]
    pub fn export_request(&self) -> Option<WorkerMessage> {
        let sheet = self.active_sheet()?;
        Some(WorkerMessage::export_sheet(
            self.export_dir.clone(),
            export::file_name(sheet),
            export::render_markdown(sheet),
        ))
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// Content rows are built for the whole view and then windowed around
    /// the selected item: centered when possible, pinned to the end when the
    /// selection is near the bottom. The sidebar is windowed the same way
    /// around its own cursor.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let view = self.view();
        let matcher = QueryMatcher::new(self.nav.query());
        let available_rows = content_height(rows, self.input_mode.is_search());

        let (all_rows, anchor) = self.compute_content_rows(&view, &matcher);
        let (start, end) = window(all_rows.len(), anchor, available_rows);

        let empty_state = (self.selectable_count() == 0).then(|| self.compute_empty_state(&view));

        UIViewModel {
            header: self.compute_header(&view),
            search_bar: self.compute_search_bar(&view),
            rows: all_rows[start..end].to_vec(),
            empty_state,
            sidebar: self.compute_sidebar(available_rows),
            status: self.status.clone(),
            footer: self.compute_footer(),
        }
    }

    /// All content rows plus the position of the selected one.
    fn compute_content_rows(&self, view: &View<'_>, matcher: &QueryMatcher) -> (Vec<ContentRow>, usize) {
        let mut rows = Vec::new();
        let mut anchor = 0;
        let mut item = 0;

        match view {
            View::Home { groups } => {
                for group in groups {
                    if !rows.is_empty() {
                        rows.push(ContentRow::Blank);
                    }
                    rows.push(ContentRow::GroupHeading {
                        title: group.sheet_type.plural().to_string(),
                        count: group.sheets.len(),
                    });
                    for sheet in &group.sheets {
                        let is_selected = item == self.selected_index;
                        if is_selected {
                            anchor = rows.len();
                        }
                        rows.push(ContentRow::SheetEntry(SheetRow {
                            glyph: resolve_icon(&sheet.icon_ref),
                            name: sheet.name.clone(),
                            description: sheet.description.clone(),
                            is_selected,
                            highlight_ranges: matcher.match_ranges(&sheet.name),
                        }));
                        item += 1;
                    }
                }
            }
            View::Sheet { categories, .. } => {
                for category in categories {
                    if !rows.is_empty() {
                        rows.push(ContentRow::Blank);
                    }
                    rows.push(ContentRow::CategoryHeading {
                        title: category.title.to_string(),
                        count: category.snippets.len(),
                    });
                    for snippet in &category.snippets {
                        let is_selected = item == self.selected_index;
                        if is_selected {
                            anchor = rows.len();
                        }
                        rows.push(ContentRow::SnippetEntry(SnippetRow {
                            title: snippet.title.clone(),
                            difficulty: snippet.difficulty,
                            tags: snippet.tags.clone(),
                            is_selected,
                            highlight_ranges: matcher.match_ranges(&snippet.title),
                        }));
                        if is_selected {
                            rows.push(ContentRow::Description {
                                text: snippet.description.clone(),
                            });
                            rows.extend(snippet.code.lines().map(|line| ContentRow::CodeLine {
                                text: line.to_string(),
                            }));
                        }
                        item += 1;
                    }
                }
            }
        }

        (rows, anchor)
    }

    fn compute_header(&self, view: &View<'_>) -> HeaderInfo {
        match view.sheet() {
            Some(sheet) => HeaderInfo {
                title: format!("{}  {}", resolve_icon(&sheet.icon_ref), sheet.name),
                subtitle: sheet.description.clone(),
            },
            None => {
                let snippets: usize = self.catalog.sheets().iter().map(Sheet::snippet_count).sum();
                HeaderInfo {
                    title: "DevCheat".to_string(),
                    subtitle: format!("{} cheat sheets · {snippets} snippets", self.catalog.len()),
                }
            }
        }
    }

    fn compute_empty_state(&self, view: &View<'_>) -> EmptyState {
        let query = self.nav.query();
        match (view, query.is_empty()) {
            (View::Home { .. }, false) => EmptyState {
                message: format!("No cheat sheets found for \"{query}\"."),
                subtitle: "Try a different search term".to_string(),
            },
            (View::Home { .. }, true) => EmptyState {
                message: "No cheat sheets available".to_string(),
                subtitle: "Add sheets with the catalog_file option".to_string(),
            },
            (View::Sheet { .. }, false) => EmptyState {
                message: format!("No snippets found matching \"{query}\""),
                subtitle: "Esc: clear search".to_string(),
            },
            (View::Sheet { .. }, true) => EmptyState {
                message: "This sheet has no snippets yet".to_string(),
                subtitle: "h: back to dashboard".to_string(),
            },
        }
    }

    fn compute_search_bar(&self, view: &View<'_>) -> Option<SearchBarInfo> {
        if !self.input_mode.is_search() {
            return None;
        }
        let placeholder = view.sheet().map_or_else(
            || "Search cheat sheets".to_string(),
            |sheet| format!("Search in {}", sheet.name),
        );
        Some(SearchBarInfo {
            query: self.nav.query().to_string(),
            is_typing: self.input_mode.is_typing(),
            placeholder,
        })
    }

    fn compute_sidebar(&self, available_rows: usize) -> Option<SidebarInfo> {
        if !self.nav.is_sidebar_open() {
            return None;
        }

        let active = self.nav.active_sheet_id();
        let matcher = QueryMatcher::new(&self.sidebar_filter);
        let mut entries = vec![SidebarEntry::Home {
            is_selected: self.sidebar_index == 0,
            is_active: active.is_none(),
        }];
        let mut anchor = 0;
        let mut target = 1;

        for group in filter_catalog_by_name(&self.catalog, &self.sidebar_filter) {
            entries.push(SidebarEntry::Heading {
                title: group.sheet_type.plural().to_string(),
            });
            for sheet in group.sheets {
                let is_selected = target == self.sidebar_index;
                if is_selected {
                    anchor = entries.len();
                }
                entries.push(SidebarEntry::Sheet {
                    glyph: resolve_icon(&sheet.icon_ref),
                    name: sheet.name.clone(),
                    is_selected,
                    is_active: active == Some(sheet.id.as_str()),
                    highlight_ranges: matcher.match_ranges(&sheet.name),
                });
                target += 1;
            }
        }

        let list_rows = available_rows.saturating_sub(SIDEBAR_FILTER_ROWS);
        let (start, end) = window(entries.len(), anchor, list_rows);
        Some(SidebarInfo {
            filter: self.sidebar_filter.clone(),
            entries: entries[start..end].to_vec(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.nav.is_sidebar_open()) {
            (_, true) => "↑/↓: navigate  Enter: open  Type to filter  Tab/Esc: close sidebar",
            (InputMode::Search(SearchFocus::Typing), false) => {
                "ESC: clear search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), false) => {
                "ESC: clear search  /: edit query  j/k: navigate  Enter: open"
            }
            (InputMode::Normal, false) if self.nav.is_home() => {
                "j/k: navigate  Enter: open  /: search  Tab: sidebar  t: theme  q: quit"
            }
            (InputMode::Normal, false) => {
                "j/k: navigate  /: search  h: home  Tab: sidebar  e: export  t: theme  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Visible `start..end` of a `len`-row list so that `anchor` is shown,
/// centered when there is room on both sides.
fn window(len: usize, anchor: usize, available: usize) -> (usize, usize) {
    let mut start = anchor.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start.min(end) < available && len >= available {
        start = end.saturating_sub(available);
    }

    (start.min(end), end)
}
