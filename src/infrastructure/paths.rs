//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! points to the cwd of the last focused terminal (usually the user's home).
//! User-facing paths in the configuration (`catalog_file`, `theme_file`,
//! `export_dir`) are written with `~` and translated here.

use std::path::{Path, PathBuf};

/// Sandbox root that stands in for the user's home directory.
pub const HOST_ROOT: &str = "/host";

/// Returns the DevCheat data directory, `/host/.local/share/zellij/devcheat`.
///
/// Holds `preferences.json` and the `devcheat-otlp.json` trace file.
///
/// # Examples
///
/// ```
/// use devcheat::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/devcheat"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    Path::new(HOST_ROOT).join(".local/share/zellij").join("devcheat")
}

/// Maps `~` and `~/...` to the sandbox's `/host` root. Other paths pass through.
///
/// # Examples
///
/// ```
/// use devcheat::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/notes"), "/host/notes");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/out"), "/tmp/out");
/// assert_eq!(expand_tilde("~other/x"), "~other/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Rewrites a sandbox path the way the user sees it on the host, with the
/// `/host` root shown as `~`.
///
/// # Examples
///
/// ```
/// use devcheat::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/css-cheatsheet.md"), "~/css-cheatsheet.md");
/// assert_eq!(strip_host_prefix("/host"), "~");
/// assert_eq!(strip_host_prefix("/hosted/x"), "/hosted/x");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
