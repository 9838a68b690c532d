//! View composition: the single seam between [`NavigationState`] and the
//! filter engine.

use super::navigation::NavigationState;
use crate::domain::{Catalog, Sheet};
use crate::filter::{filter_catalog, filter_sheet, FilteredCategory, SheetGroup};

/// What the presentation layer should show, derived fresh on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Dashboard: sheets matching the query, grouped by type.
    Home { groups: Vec<SheetGroup<'a>> },
    /// One sheet with its categories filtered by the query.
    Sheet {
        sheet: &'a Sheet,
        categories: Vec<FilteredCategory<'a>>,
    },
}

impl<'a> View<'a> {
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home { .. })
    }

    /// The resolved sheet when showing one.
    #[must_use]
    pub const fn sheet(&self) -> Option<&'a Sheet> {
        match self {
            Self::Home { .. } => None,
            Self::Sheet { sheet, .. } => Some(*sheet),
        }
    }
}

/// Projects the navigation state onto the catalog.
///
/// An active sheet id that is not in the catalog is not an error: the result
/// is the unfiltered home view, as if navigation were at Home with an empty
/// query.
#[must_use]
pub fn compute_view<'a>(catalog: &'a Catalog, nav: &NavigationState) -> View<'a> {
    match nav.active_sheet_id() {
        None => View::Home {
            groups: filter_catalog(catalog, nav.query()),
        },
        Some(id) => match catalog.find(id) {
            Some(sheet) => View::Sheet {
                sheet,
                categories: filter_sheet(sheet, nav.query()),
            },
            None => {
                tracing::debug!(sheet_id = id, "active sheet not in catalog, showing home");
                View::Home {
                    groups: filter_catalog(catalog, ""),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn home_view_uses_query() {
        let catalog = builtin_catalog().unwrap();
        let mut nav = NavigationState::new();
        nav.set_query("version control");

        let View::Home { groups } = compute_view(&catalog, &nav) else {
            panic!("expected home view");
        };
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sheets[0].id, "git");
    }

    #[test]
    fn sheet_view_filters_active_sheet() {
        let catalog = builtin_catalog().unwrap();
        let mut nav = NavigationState::new();
        nav.select_sheet("css");
        nav.set_query("clamp");

        let view = compute_view(&catalog, &nav);
        assert_eq!(view.sheet().map(|s| s.id.as_str()), Some("css"));
        let View::Sheet { categories, .. } = view else {
            panic!("expected sheet view");
        };
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].snippets[0].id, "css-clamp");
    }

    #[test]
    fn dangling_id_falls_back_to_unfiltered_home() {
        let catalog = builtin_catalog().unwrap();
        let mut nav = NavigationState::new();
        nav.select_sheet("cobol");
        nav.set_query("git");

        let view = compute_view(&catalog, &nav);
        assert_eq!(view, compute_view(&catalog, &NavigationState::new()));
        assert!(view.is_home());
    }

    #[test]
    fn go_home_from_filtered_sheet_shows_full_dashboard() {
        let catalog = builtin_catalog().unwrap();
        let mut nav = NavigationState::new();
        nav.select_sheet("css");
        nav.set_query("flex");

        nav.go_home();

        assert_eq!(nav.active_sheet_id(), None);
        assert_eq!(nav.query(), "");
        let View::Home { groups } = compute_view(&catalog, &nav) else {
            panic!("expected home view");
        };
        let total: usize = groups.iter().map(|g| g.sheets.len()).sum();
        assert_eq!(total, catalog.len());
    }
}
