//! Empty state component renderer.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line "nothing matched" message inside the content pane.
///
/// The message goes one row below `row` in `empty_state_fg` and the subtitle
/// right under it, dimmed. Both are centered within the `width` columns that
/// start at `col`.
pub fn render_empty_state(row: usize, col: usize, width: usize, empty: &EmptyState, theme: &Theme) {
    let message = truncate(&empty.message, width);
    let msg_len = display_width(&message);
    let msg_padding = (width.saturating_sub(msg_len)) / 2;

    position_cursor(row + 1, col);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(width.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, width);
    let sub_len = display_width(&subtitle);
    let sub_padding = (width.saturating_sub(sub_len)) / 2;

    position_cursor(row + 2, col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(width.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
