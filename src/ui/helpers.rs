//! Shared rendering utilities.
//!
//! Highlighting and truncation operate on character indices, never bytes, so
//! ranges produced by [`QueryMatcher::match_ranges`](crate::filter::QueryMatcher::match_ranges)
//! can be applied directly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies, counting one per char.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending with `…` when shortened.
///
/// ```
/// use devcheat::ui::helpers::truncate;
///
/// assert_eq!(truncate("Clamp()", 10), "Clamp()");
/// assert_eq!(truncate("Box Sizing", 5), "Box …");
/// assert_eq!(truncate("anything", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Prints `text` with the given character ranges in match highlight colors.
///
/// `base` is the escape sequence restored after every highlighted section, so
/// the surrounding style (normal text or selection) carries on. Ranges past
/// the end of `text` are ignored, which makes it safe to pass ranges computed
/// on the untruncated string.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start >= chars.len() {
            break;
        }
        let end = end.min(chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{base}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Pads with spaces from `used` columns up to `width`.
pub fn pad_to(used: usize, width: usize) {
    print!("{}", " ".repeat(width.saturating_sub(used)));
}
