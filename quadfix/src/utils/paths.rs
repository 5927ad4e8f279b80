//! Path helpers for display and target resolution.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_TARGET;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use quadfix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\tests\\unit\\a.test.ts")), "tests/unit/a.test.ts");
/// assert_eq!(normalize_display_path(Path::new("./tests/b.test.ts")), "tests/b.test.ts");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Picks the file to rewrite: command line first, then config, then the built-in default.
///
/// A relative config target is joined onto `config_dir`, the directory holding
/// the config file. The other two stay relative to the working directory.
#[must_use]
pub fn resolve_target(
    cli_path: Option<&Path>,
    config_target: Option<&str>,
    config_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    match (config_target, config_dir) {
        (Some(target), Some(dir)) => dir.join(target),
        (Some(target), None) => PathBuf::from(target),
        (None, _) => PathBuf::from(DEFAULT_TARGET),
    }
}
