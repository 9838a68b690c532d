//! Navigation state machine.
//!
//! [`NavigationState`] is the only mutable session state besides cursor
//! positions. It has two states, Home (no active sheet) and SheetDetail (an
//! active sheet id). A single query field serves as catalog search on Home and
//! as in-sheet search on a sheet, and it is reset whenever the view changes.
//!
//! Fields are private so the five transitions below stay the only way to
//! change them.

/// Which view is active, the current query, and whether the sidebar is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active_sheet_id: Option<String>,
    query: String,
    sidebar_open: bool,
}

impl NavigationState {
    /// Home view, empty query, sidebar closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_sheet_id(&self) -> Option<&str> {
        self.active_sheet_id.as_deref()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub const fn is_home(&self) -> bool {
        self.active_sheet_id.is_none()
    }

    /// Opens a sheet. Clears the query and closes the sidebar.
    ///
    /// The id is not checked against the catalog; a dangling id is handled by
    /// [`compute_view`](super::compute_view).
    pub fn select_sheet(&mut self, id: impl Into<String>) {
        self.active_sheet_id = Some(id.into());
        self.query.clear();
        self.sidebar_open = false;
    }

    /// Returns to the dashboard and clears the query. Leaves the sidebar as is.
    pub fn go_home(&mut self) {
        self.active_sheet_id = None;
        self.query.clear();
    }

    /// Replaces the query. Nothing else changes.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home_with_empty_query_and_closed_sidebar() {
        let nav = NavigationState::new();
        assert!(nav.is_home());
        assert_eq!(nav.active_sheet_id(), None);
        assert_eq!(nav.query(), "");
        assert!(!nav.is_sidebar_open());
    }

    #[test]
    fn select_sheet_resets_query_and_closes_sidebar() {
        let mut nav = NavigationState::new();
        nav.set_query("flex");
        nav.open_sidebar();

        nav.select_sheet("css");

        assert_eq!(nav.active_sheet_id(), Some("css"));
        assert_eq!(nav.query(), "");
        assert!(!nav.is_sidebar_open());
    }

    #[test]
    fn go_home_resets_query_and_keeps_sidebar() {
        let mut nav = NavigationState::new();
        nav.select_sheet("css");
        nav.set_query("flex");
        nav.open_sidebar();

        nav.go_home();

        assert!(nav.is_home());
        assert_eq!(nav.query(), "");
        assert!(nav.is_sidebar_open());
    }

    #[test]
    fn query_is_empty_after_any_navigation() {
        for prior in ["", "x", "   ", "a much longer query with \"quotes\""] {
            let mut nav = NavigationState::new();
            nav.set_query(prior);
            nav.select_sheet("git");
            assert_eq!(nav.query(), "");

            nav.set_query(prior);
            nav.go_home();
            assert_eq!(nav.query(), "");
        }
    }

    #[test]
    fn set_query_touches_only_the_query() {
        let mut nav = NavigationState::new();
        nav.select_sheet("git");
        nav.open_sidebar();

        nav.set_query("rebase");

        assert_eq!(nav.active_sheet_id(), Some("git"));
        assert!(nav.is_sidebar_open());
        assert_eq!(nav.query(), "rebase");
    }

    #[test]
    fn sidebar_transitions_are_orthogonal() {
        let mut nav = NavigationState::new();
        nav.select_sheet("sql");
        nav.set_query("join");

        nav.open_sidebar();
        assert!(nav.is_sidebar_open());
        nav.close_sidebar();
        assert!(!nav.is_sidebar_open());

        assert_eq!(nav.active_sheet_id(), Some("sql"));
        assert_eq!(nav.query(), "join");
    }
}
