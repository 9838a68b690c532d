//! Footer and status line renderers.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centered, dimmed keybinding hints at `row`.
///
/// Help text wider than the terminal is truncated so it never wraps.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);

    let text_len = display_width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status message left-aligned at `row`, or a blank line.
pub fn render_status(row: usize, status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    let text = status.map_or_else(String::new, |s| truncate(&format!(" {s}"), cols));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.active_sheet_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&text))));
    print!("{}", Theme::reset());
    row + 1
}
