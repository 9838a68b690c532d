//! Sidebar renderer: a name filter line, then Home Dashboard and the sheets
//! grouped by type.

use crate::ui::helpers::{self, display_width, pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SidebarEntry, SidebarInfo};

/// Columns taken by the sidebar, not counting its separator.
pub const SIDEBAR_WIDTH: usize = 28;

/// Rows above the entry list taken by the filter line.
pub const SIDEBAR_FILTER_ROWS: usize = 1;

const FILTER_PLACEHOLDER: &str = "Find technology...";

/// Draws the sidebar in the `height` rows starting at `row`, with a vertical
/// separator in the column right after it.
///
/// # Returns
///
/// The first column available to the content pane.
pub fn render_sidebar(row: usize, height: usize, sidebar: &SidebarInfo, theme: &Theme) -> usize {
    for offset in 0..height {
        position_cursor(row + offset, 1);
        if offset < SIDEBAR_FILTER_ROWS {
            render_filter(&sidebar.filter, theme);
        } else {
            match sidebar.entries.get(offset - SIDEBAR_FILTER_ROWS) {
                Some(entry) => render_entry(entry, theme),
                None => pad_to(0, SIDEBAR_WIDTH),
            }
        }
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.border));
        print!("│");
        print!("{}", Theme::reset());
    }
    SIDEBAR_WIDTH + 3
}

fn render_filter(filter: &str, theme: &Theme) {
    let (text, color) = if filter.is_empty() {
        (FILTER_PLACEHOLDER, &theme.colors.text_dim)
    } else {
        (filter, &theme.colors.text_normal)
    };
    let line = truncate(&format!(" / {text}"), SIDEBAR_WIDTH);
    print!("{}", Theme::fg(color));
    print!("{line}");
    pad_to(display_width(&line), SIDEBAR_WIDTH);
}

fn render_entry(entry: &SidebarEntry, theme: &Theme) {
    match entry {
        SidebarEntry::Heading { title } => {
            let title = truncate(&format!(" {title}"), SIDEBAR_WIDTH);
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.group_heading_fg));
            print!("{title}");
            pad_to(display_width(&title), SIDEBAR_WIDTH);
        }
        SidebarEntry::Home { is_selected, is_active } => {
            render_item("⌂ ", "Home Dashboard", &[], *is_selected, *is_active, theme);
        }
        SidebarEntry::Sheet {
            glyph,
            name,
            is_selected,
            is_active,
            highlight_ranges,
        } => render_item(glyph, name, highlight_ranges, *is_selected, *is_active, theme),
    }
}

/// ` * <glyph> <label>` where `*` marks the active entry.
fn render_item(
    glyph: &str,
    label: &str,
    ranges: &[(usize, usize)],
    is_selected: bool,
    is_active: bool,
    theme: &Theme,
) {
    let base = if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else if is_active {
        Theme::fg(&theme.colors.active_sheet_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    let marker = if is_active { '*' } else { ' ' };
    let prefix = format!(" {marker} {glyph} ");
    let used = display_width(&prefix);
    print!("{prefix}");

    let label = truncate(label, SIDEBAR_WIDTH.saturating_sub(used));
    helpers::render_highlighted_text(&label, ranges, theme, &base);
    pad_to(used + display_width(&label), SIDEBAR_WIDTH);
}
