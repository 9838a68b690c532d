//! Markdown rendering of a whole sheet.

use crate::domain::{Category, Sheet, Snippet};

/// Renders every category and snippet of `sheet` as Markdown.
///
/// The active query is deliberately not an input: exports always contain the
/// full sheet. Each category becomes a `##` heading and each snippet a `###`
/// heading, its description and a fenced code block tagged with its language.
///
/// # Example
///
/// ```
/// use devcheat::catalog::builtin_catalog;
/// use devcheat::export::render_markdown;
///
/// let catalog = builtin_catalog().unwrap();
/// let markdown = render_markdown(catalog.find("git").unwrap());
/// assert!(markdown.starts_with("## Common Commands\n\n### Workflow\n"));
/// ```
#[must_use]
pub fn render_markdown(sheet: &Sheet) -> String {
    sheet
        .categories
        .iter()
        .map(render_category)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download name for an exported sheet: `<slug>-cheatsheet.md`.
#[must_use]
pub fn file_name(sheet: &Sheet) -> String {
    format!("{}-cheatsheet.md", sheet.slug)
}

fn render_category(category: &Category) -> String {
    let snippets = category
        .snippets
        .iter()
        .map(render_snippet)
        .collect::<Vec<_>>()
        .join("\n");
    format!("## {}\n\n{snippets}", category.title)
}

fn render_snippet(snippet: &Snippet) -> String {
    format!(
        "### {}\n{}\n\n```{}\n{}\n```\n",
        snippet.title, snippet.description, snippet.language, snippet.code
    )
}
