//! Content pane renderer.
//!
//! Draws the windowed [`ContentRow`]s: type groups with their sheets on Home,
//! categories with their snippets on a sheet. Every line is padded to the
//! pane width so the selection background spans the whole row.

use crate::ui::helpers::{self, display_width, pad_to, position_cursor, truncate};
use crate::ui::icons::GLYPH_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContentRow, SheetRow, SnippetRow};

/// Width reserved for sheet names before the description column.
const NAME_COLUMN_WIDTH: usize = 16;

/// Indent of snippet descriptions and code below their title.
const DETAIL_INDENT: &str = "    ";

/// Renders `rows` top to bottom starting at (`row`, `col`).
///
/// # Returns
///
/// The row after the last one drawn.
pub fn render_content_rows(row: usize, col: usize, width: usize, rows: &[ContentRow], theme: &Theme) -> usize {
    let mut current_row = row;
    for content in rows {
        position_cursor(current_row, col);
        match content {
            ContentRow::GroupHeading { title, count } | ContentRow::CategoryHeading { title, count } => {
                render_heading(title, *count, theme, width);
            }
            ContentRow::SheetEntry(sheet) => render_sheet_row(sheet, theme, width),
            ContentRow::SnippetEntry(snippet) => render_snippet_row(snippet, theme, width),
            ContentRow::Description { text } => {
                render_detail(text, "", &theme.colors.text_dim, width);
            }
            ContentRow::CodeLine { text } => {
                render_detail(text, "│ ", &theme.colors.code_fg, width);
            }
            ContentRow::Blank => pad_to(0, width),
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

fn render_heading(title: &str, count: usize, theme: &Theme, width: usize) {
    let count_text = format!(" ({count})");
    let title = truncate(title, width.saturating_sub(display_width(&count_text)));

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.group_heading_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let count_text = truncate(&count_text, width.saturating_sub(display_width(&title)));
    print!("{count_text}");
    pad_to(display_width(&title) + display_width(&count_text), width);
}

/// `  <glyph>  <name>            <description>`
fn render_sheet_row(sheet: &SheetRow, theme: &Theme, width: usize) {
    let base = row_base(sheet.is_selected, theme);
    print!("{base}");

    let prefix = format!("  {}  ", sheet.glyph);
    let prefix = truncate(&prefix, width);
    print!("{prefix}");
    let mut used = display_width(&prefix);

    let name = truncate(&sheet.name, NAME_COLUMN_WIDTH.min(width.saturating_sub(used)));
    helpers::render_highlighted_text(&name, &sheet.highlight_ranges, theme, &base);
    used += display_width(&name);

    let name_column_end = (4 + GLYPH_WIDTH + NAME_COLUMN_WIDTH + 2).min(width);
    pad_to(used, name_column_end);
    used = used.max(name_column_end);

    if !sheet.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    let description = truncate(&sheet.description, width.saturating_sub(used));
    print!("{description}");
    used += display_width(&description);

    pad_to(used, width);
}

/// `  <title>  [Difficulty]  #tag #tag`
fn render_snippet_row(snippet: &SnippetRow, theme: &Theme, width: usize) {
    let base = row_base(snippet.is_selected, theme);
    print!("{base}");

    let marker = if snippet.is_selected { "▸ " } else { "  " };
    let marker = truncate(marker, width);
    print!("{marker}");
    let mut used = display_width(&marker);

    let title = truncate(&snippet.title, width.saturating_sub(used));
    helpers::render_highlighted_text(&title, &snippet.highlight_ranges, theme, &base);
    used += display_width(&title);

    let badge = truncate(&format!("  [{}]", snippet.difficulty), width.saturating_sub(used));
    if !snippet.is_selected {
        print!("{}", Theme::fg(theme.colors.difficulty_fg(snippet.difficulty)));
    }
    print!("{badge}");
    used += display_width(&badge);

    if !snippet.tags.is_empty() {
        let tags: Vec<String> = snippet.tags.iter().map(|t| format!("#{t}")).collect();
        let tags = truncate(&format!("  {}", tags.join(" ")), width.saturating_sub(used));
        if !snippet.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{tags}");
        used += display_width(&tags);
    }

    pad_to(used, width);
}

fn render_detail(text: &str, gutter: &str, color: &str, width: usize) {
    let line = truncate(&format!("{DETAIL_INDENT}{gutter}{text}"), width);
    print!("{}", Theme::fg(color));
    print!("{line}");
    pad_to(display_width(&line), width);
}

/// Escape sequence every selectable row starts from and returns to.
fn row_base(is_selected: bool, theme: &Theme) -> String {
    if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}
