//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and subtitle
//! - [`search`]: Search input box
//! - [`sidebar`]: Name filter, Home Dashboard and sheet list
//! - [`content`]: Groups, sheets, categories and snippets
//! - [`empty`]: "Nothing matched" message
//! - [`footer`]: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Subtitle]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Sidebar │ Content rows]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod content;
mod empty;
mod footer;
mod header;
mod search;
mod sidebar;

pub use sidebar::{SIDEBAR_FILTER_ROWS, SIDEBAR_WIDTH};

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use content::render_content_rows;
use empty::render_empty_state;
use footer::{render_footer, render_status};
use header::render_header;
use search::{render_search_bar, SEARCH_BOX_HEIGHT};
use sidebar::render_sidebar;

/// Rows above the content pane: blank, header, subtitle, border.
const TOP_CHROME: usize = 4;

/// Rows below the content pane: status, border, footer, blank.
const BOTTOM_CHROME: usize = 4;

/// Number of content rows that fit in a pane of `rows` lines.
#[must_use]
pub const fn content_height(rows: usize, with_search: bool) -> usize {
    let chrome = TOP_CHROME + BOTTOM_CHROME + if with_search { SEARCH_BOX_HEIGHT } else { 0 };
    rows.saturating_sub(chrome)
}

/// Horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let height = content_height(rows, vm.search_bar.is_some());
    let content_col = vm
        .sidebar
        .as_ref()
        .map_or(1, |sidebar| render_sidebar(current_row, height, sidebar, theme));
    let content_width = cols.saturating_sub(content_col - 1);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, content_col, content_width, empty, theme);
    } else {
        render_content_rows(current_row, content_col, content_width, &vm.rows, theme);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    render_status(status_row, vm.status.as_deref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_height_subtracts_chrome() {
        assert_eq!(content_height(24, false), 16);
        assert_eq!(content_height(24, true), 13);
        assert_eq!(content_height(5, true), 0);
    }
}
