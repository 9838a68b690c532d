//! Catalog-level and sheet-level filtering.
//!
//! Both operations borrow from the catalog and return freshly built
//! structures of references; the catalog itself is never touched.

use super::matcher::QueryMatcher;
use crate::domain::{Catalog, Sheet, SheetType, Snippet};
use std::collections::BTreeMap;

/// Sheets of one type that survived a catalog filter, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGroup<'a> {
    pub sheet_type: SheetType,
    pub sheets: Vec<&'a Sheet>,
}

/// A category of a sheet with only its matching snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredCategory<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub snippets: Vec<&'a Snippet>,
}

/// Filters the catalog by `query` and groups the survivors by type.
///
/// A sheet survives when the query is a case-insensitive substring of its
/// name, its description or its type label. Groups come out in canonical type
/// order (Language, Framework, Database, Tool) and empty groups are omitted.
///
/// # Example
///
/// ```
/// use devcheat::catalog::builtin_catalog;
/// use devcheat::domain::SheetType;
/// use devcheat::filter::filter_catalog;
///
/// let catalog = builtin_catalog().unwrap();
/// let groups = filter_catalog(&catalog, "version control");
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].sheet_type, SheetType::Tool);
/// assert_eq!(groups[0].sheets[0].name, "Git");
/// ```
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a Catalog, query: &str) -> Vec<SheetGroup<'a>> {
    let span = tracing::debug_span!(
        "filter_catalog",
        total_sheets = catalog.len(),
        query_len = query.len(),
        matched = tracing::field::Empty
    );
    let _guard = span.enter();

    let matcher = QueryMatcher::new(query);
    let groups = group_by_type(catalog.sheets().iter().filter(|sheet| {
        matcher.matches_any([
            sheet.name.as_str(),
            sheet.description.as_str(),
            sheet.sheet_type.label(),
        ])
    }));

    span.record("matched", groups.iter().map(|g| g.sheets.len()).sum::<usize>());
    groups
}

/// Sheets whose name contains `query`, grouped like [`filter_catalog`].
///
/// This is the sidebar's own filter. Unlike the dashboard search it looks at
/// names only.
///
/// ```
/// use devcheat::catalog::builtin_catalog;
/// use devcheat::filter::filter_catalog_by_name;
///
/// let catalog = builtin_catalog().unwrap();
/// let names: Vec<&str> = filter_catalog_by_name(&catalog, "JA")
///     .iter()
///     .flat_map(|g| g.sheets.iter().map(|s| s.name.as_str()))
///     .collect();
/// assert_eq!(names, ["JavaScript", "Java"]);
/// ```
#[must_use]
pub fn filter_catalog_by_name<'a>(catalog: &'a Catalog, query: &str) -> Vec<SheetGroup<'a>> {
    let matcher = QueryMatcher::new(query);
    group_by_type(catalog.sheets().iter().filter(|sheet| matcher.matches(&sheet.name)))
}

/// Buckets sheets by type, canonical type order, catalog order within a type.
fn group_by_type<'a>(sheets: impl Iterator<Item = &'a Sheet>) -> Vec<SheetGroup<'a>> {
    let mut grouped: BTreeMap<SheetType, Vec<&'a Sheet>> = BTreeMap::new();
    for sheet in sheets {
        grouped.entry(sheet.sheet_type).or_default().push(sheet);
    }
    grouped
        .into_iter()
        .map(|(sheet_type, sheets)| SheetGroup { sheet_type, sheets })
        .collect()
}

/// Filters one sheet's snippets by `query`.
///
/// A snippet survives when the query is a case-insensitive substring of its
/// title, description, code or any single tag. Categories keep their original
/// order and are dropped when no snippet survives, including categories that
/// were empty to begin with.
#[must_use]
pub fn filter_sheet<'a>(sheet: &'a Sheet, query: &str) -> Vec<FilteredCategory<'a>> {
    let span = tracing::debug_span!(
        "filter_sheet",
        sheet_id = %sheet.id,
        query_len = query.len(),
        matched = tracing::field::Empty
    );
    let _guard = span.enter();

    let matcher = QueryMatcher::new(query);

    let categories: Vec<FilteredCategory<'a>> = sheet
        .categories
        .iter()
        .filter_map(|category| {
            let snippets: Vec<&'a Snippet> = category
                .snippets
                .iter()
                .filter(|snippet| snippet_matches(&matcher, snippet))
                .collect();

            (!snippets.is_empty()).then_some(FilteredCategory {
                id: &category.id,
                title: &category.title,
                snippets,
            })
        })
        .collect();

    span.record("matched", categories.iter().map(|c| c.snippets.len()).sum::<usize>());
    categories
}

fn snippet_matches(matcher: &QueryMatcher, snippet: &Snippet) -> bool {
    matcher.matches_any(
        [snippet.title.as_str(), snippet.description.as_str(), snippet.code.as_str()]
            .into_iter()
            .chain(snippet.tags.iter().map(String::as_str)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty};

    fn sheet(id: &str, name: &str, sheet_type: SheetType, description: &str) -> Sheet {
        Sheet {
            id: id.to_string(),
            name: name.to_string(),
            slug: id.to_string(),
            description: description.to_string(),
            sheet_type,
            icon_ref: String::new(),
            categories: vec![],
        }
    }

    fn snippet(id: &str, title: &str, tags: &[&str], code: &str) -> Snippet {
        Snippet {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} example."),
            code: code.to_string(),
            language: "css".to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            difficulty: Difficulty::Beginner,
        }
    }

    /// Git, React, HTML5 inserted out of canonical order on purpose.
    fn web_catalog() -> Catalog {
        Catalog::new(vec![
            sheet("git", "Git", SheetType::Tool, "Version Control System."),
            sheet("react", "React", SheetType::Framework, "UI Library."),
            sheet(
                "html",
                "HTML5",
                SheetType::Language,
                "The standard markup language for documents.",
            ),
        ])
    }

    fn css_sheet() -> Sheet {
        let mut css = sheet("css", "CSS3", SheetType::Language, "Style sheet language.");
        css.categories = vec![
            Category {
                id: "css-selectors".into(),
                title: "Selectors & Box Model".into(),
                snippets: vec![
                    snippet("css-class", "Class Selector", &["Selectors"], ".btn { color: red; }"),
                    snippet("css-box", "Box Sizing", &["Layout"], "box-sizing: border-box;"),
                ],
            },
            Category { id: "css-empty".into(), title: "Empty".into(), snippets: vec![] },
            Category {
                id: "css-advanced".into(),
                title: "Advanced & Animations".into(),
                snippets: vec![
                    snippet("css-vars", "CSS Variables", &["Variables"], ":root { --main: #333; }"),
                    snippet("css-clamp", "Clamp()", &["Functions"], "font-size: clamp(1rem, 2.5vw, 2rem);"),
                    snippet("css-anim", "Keyframes", &["Animation"], "@keyframes fade {}"),
                ],
            },
        ];
        css
    }

    fn ids<'a>(groups: &[SheetGroup<'a>]) -> Vec<(SheetType, Vec<&'a str>)> {
        groups
            .iter()
            .map(|g| (g.sheet_type, g.sheets.iter().map(|s| s.id.as_str()).collect()))
            .collect()
    }

    #[test]
    fn name_filter_ignores_description_and_type() {
        let catalog = web_catalog();

        assert!(filter_catalog_by_name(&catalog, "markup").is_empty());
        assert!(filter_catalog_by_name(&catalog, "tool").is_empty());
        assert_eq!(ids(&filter_catalog_by_name(&catalog, "GI")), vec![(SheetType::Tool, vec!["git"])]);
        assert_eq!(ids(&filter_catalog_by_name(&catalog, "")), ids(&filter_catalog(&catalog, "")));
    }

    #[test]
    fn empty_query_returns_every_sheet_in_canonical_groups() {
        let catalog = web_catalog();
        let groups = filter_catalog(&catalog, "");

        assert_eq!(
            ids(&groups),
            vec![
                (SheetType::Language, vec!["html"]),
                (SheetType::Framework, vec!["react"]),
                (SheetType::Tool, vec!["git"]),
            ]
        );
        let total: usize = groups.iter().map(|g| g.sheets.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn script_matches_only_javascript_by_name() {
        assert!(filter_catalog(&web_catalog(), "script").is_empty());

        let catalog = web_catalog().extended(vec![sheet(
            "js",
            "JavaScript",
            SheetType::Language,
            "The core language of the web.",
        )]);
        let groups = filter_catalog(&catalog, "script");
        assert_eq!(ids(&groups), vec![(SheetType::Language, vec!["js"])]);
    }

    #[test]
    fn type_label_is_searchable() {
        let catalog = web_catalog();
        let groups = filter_catalog(&catalog, "FRAMEWORK");
        assert_eq!(ids(&groups), vec![(SheetType::Framework, vec!["react"])]);
    }

    #[test]
    fn membership_matches_predicate_for_every_sheet() {
        let catalog = web_catalog();
        for query in ["", "git", "L", "ui lib", "markup", "tool", "zzz", "5"] {
            let groups = filter_catalog(&catalog, query);
            let returned: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.sheets.iter().map(|s| s.id.as_str()))
                .collect();

            let q = query.to_lowercase();
            for sheet in catalog.sheets() {
                let expected = sheet.name.to_lowercase().contains(&q)
                    || sheet.description.to_lowercase().contains(&q)
                    || sheet.sheet_type.label().to_lowercase().contains(&q);
                let count = returned.iter().filter(|id| **id == sheet.id).count();
                assert_eq!(count, usize::from(expected), "sheet {} query {query:?}", sheet.id);
            }
        }
    }

    #[test]
    fn groups_are_canonical_and_never_empty() {
        let catalog = Catalog::new(vec![
            sheet("docker", "Docker", SheetType::Tool, "Containers."),
            sheet("sql", "SQL", SheetType::Database, "Query language."),
            sheet("py", "Python", SheetType::Language, "Scripting."),
            sheet("vue", "Vue.js", SheetType::Framework, "Progressive framework."),
            sheet("git", "Git", SheetType::Tool, "VCS."),
        ]);

        let groups = filter_catalog(&catalog, "");
        let order: Vec<SheetType> = groups.iter().map(|g| g.sheet_type).collect();
        assert_eq!(order, SheetType::ALL.to_vec());
        assert_eq!(groups[3].sheets.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), ["docker", "git"]);

        let groups = filter_catalog(&catalog, "language");
        assert_eq!(
            ids(&groups),
            vec![(SheetType::Language, vec!["py"]), (SheetType::Database, vec!["sql"])]
        );
        assert!(groups.iter().all(|g| !g.sheets.is_empty()));
    }

    #[test]
    fn clamp_query_keeps_single_category_and_snippet() {
        let css = css_sheet();
        let categories = filter_sheet(&css, "clamp");

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Advanced & Animations");
        assert_eq!(categories[0].snippets.len(), 1);
        assert_eq!(categories[0].snippets[0].title, "Clamp()");
    }

    #[test]
    fn no_match_returns_no_categories() {
        assert!(filter_sheet(&css_sheet(), "zzz-nomatch").is_empty());
    }

    #[test]
    fn empty_query_preserves_all_non_empty_categories() {
        let css = css_sheet();
        let categories = filter_sheet(&css, "");

        let expected: Vec<&Category> = css.categories.iter().filter(|c| !c.snippets.is_empty()).collect();
        assert_eq!(categories.len(), expected.len());
        for (filtered, original) in categories.iter().zip(expected) {
            assert_eq!(filtered.id, original.id);
            assert_eq!(filtered.title, original.title);
            let snippets: Vec<&Snippet> = original.snippets.iter().collect();
            assert_eq!(filtered.snippets, snippets);
        }
    }

    #[test]
    fn tags_and_code_are_searchable() {
        let css = css_sheet();

        let by_tag = filter_sheet(&css, "ANIMATION");
        let titles: Vec<&str> = by_tag.iter().flat_map(|c| c.snippets.iter().map(|s| s.title.as_str())).collect();
        assert_eq!(titles, ["Keyframes"]);

        let by_code = filter_sheet(&css, "border-box");
        assert_eq!(by_code[0].snippets[0].id, "css-box");
    }

    #[test]
    fn filtered_categories_are_never_empty() {
        let css = css_sheet();
        for query in ["", "c", "css", "selector", "#333", "zzz", "e"] {
            assert!(filter_sheet(&css, query).iter().all(|c| !c.snippets.is_empty()));
        }
    }
}
