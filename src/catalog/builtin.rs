//! Sheets compiled into the plugin binary.

use crate::domain::{Catalog, DevCheatError, Result, Sheet};

/// Embedded sheet documents in catalog order.
const BUILTIN_SHEETS: [(&str, &str); 18] = [
    ("html", include_str!("../../sheets/html.toml")),
    ("css", include_str!("../../sheets/css.toml")),
    ("js", include_str!("../../sheets/js.toml")),
    ("ts", include_str!("../../sheets/ts.toml")),
    ("react", include_str!("../../sheets/react.toml")),
    ("react-native", include_str!("../../sheets/react-native.toml")),
    ("vue", include_str!("../../sheets/vue.toml")),
    ("angular", include_str!("../../sheets/angular.toml")),
    ("python", include_str!("../../sheets/python.toml")),
    ("java", include_str!("../../sheets/java.toml")),
    ("cpp", include_str!("../../sheets/cpp.toml")),
    ("csharp", include_str!("../../sheets/csharp.toml")),
    ("php", include_str!("../../sheets/php.toml")),
    ("git", include_str!("../../sheets/git.toml")),
    ("sql", include_str!("../../sheets/sql.toml")),
    ("docker", include_str!("../../sheets/docker.toml")),
    ("tailwind", include_str!("../../sheets/tailwind.toml")),
    ("unreal", include_str!("../../sheets/unreal.toml")),
];

/// Parses every embedded sheet into a validated [`Catalog`].
///
/// # Errors
///
/// Returns [`DevCheatError::Catalog`] if an embedded document fails to parse
/// or the combined catalog has duplicate ids.
pub fn builtin_catalog() -> Result<Catalog> {
    let sheets = BUILTIN_SHEETS
        .iter()
        .map(|(name, source)| {
            toml::from_str::<Sheet>(source).map_err(|e| {
                DevCheatError::Catalog(format!("built-in sheet `{name}` failed to parse: {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let catalog = Catalog::new(sheets);
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SheetType;
    use crate::filter::filter_catalog;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), BUILTIN_SHEETS.len());

        for (name, _) in BUILTIN_SHEETS {
            assert!(catalog.find(name).is_some(), "missing built-in sheet {name}");
        }
    }

    #[test]
    fn builtin_catalog_covers_every_sheet_type() {
        let catalog = builtin_catalog().unwrap();
        for sheet_type in SheetType::ALL {
            assert!(
                catalog.sheets().iter().any(|s| s.sheet_type == sheet_type),
                "no built-in {sheet_type} sheet"
            );
        }
    }

    #[test]
    fn every_technology_is_searchable_by_name() {
        let catalog = builtin_catalog().unwrap();
        for (query, expected) in [
            ("react native", "react-native"),
            ("angular", "angular"),
            ("c++", "cpp"),
            ("c#", "csharp"),
            ("php", "php"),
            ("unreal", "unreal"),
        ] {
            let ids: Vec<&str> = filter_catalog(&catalog, query)
                .iter()
                .flat_map(|g| g.sheets.iter().map(|s| s.id.as_str()))
                .collect();
            assert_eq!(ids, [expected], "query {query:?}");
        }
    }

    #[test]
    fn frameworks_keep_catalog_order() {
        let catalog = builtin_catalog().unwrap();
        let groups = filter_catalog(&catalog, "");
        let frameworks: Vec<&str> = groups
            .iter()
            .find(|g| g.sheet_type == SheetType::Framework)
            .map(|g| g.sheets.iter().map(|s| s.id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(frameworks, ["react", "react-native", "vue", "angular", "tailwind", "unreal"]);
    }

    #[test]
    fn multiline_code_has_no_trailing_newline() {
        let catalog = builtin_catalog().unwrap();
        let git = catalog.find("git").unwrap();
        let workflow = &git.categories[0].snippets[0];
        assert_eq!(workflow.code, "git add .\ngit commit -m \"WIP\"\ngit push");
    }
}
