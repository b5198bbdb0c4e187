// src/watcher/path_utils.rs

//! Utility functions for path handling in the watcher.

use std::path::{Component, Path, PathBuf};

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (e.g. due to symlinks or different absolute prefixes),
///   we canonicalize both paths and try again.
///
/// Returns `None` if the path cannot be related to `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(to_slash(rel));
    }

    // Notably on macOS the same directory can show up as /var/... and
    // /private/var/...
    if let (Ok(root_canon), Ok(path_canon)) = (root.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return Some(to_slash(rel));
        }
    }

    None
}

pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve a watch root as given by the caller against `cwd`.
///
/// The empty string and `.` resolve to `cwd` itself. The result is
/// canonicalized when the path exists so event paths from the OS line up.
pub fn resolve(cwd: &Path, given: &str) -> PathBuf {
    let joined = if given.is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(given)
    };
    let cleaned: PathBuf = joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cleaned.canonicalize().unwrap_or(cleaned)
}

/// Path string reported for an entry at `rel` below a root given as `given`.
///
/// The root's own spelling is preserved, so a root of `src` reports
/// `src/main.rs` and an empty root reports `main.rs`.
pub fn report_path(given: &str, rel: &str) -> String {
    if given.starts_with('/') && given.trim_end_matches('/').is_empty() {
        return format!("/{rel}");
    }
    let base = given.trim_end_matches('/');
    match (base, rel) {
        ("" | ".", "") => ".".to_string(),
        ("" | ".", _) => rel.to_string(),
        (_, "") => given.to_string(),
        _ => format!("{base}/{rel}"),
    }
}

/// Parent of a reported path string; top-level entries belong to `.`.
pub fn report_parent(reported: &str) -> &str {
    match reported.rfind('/') {
        Some(0) => "/",
        Some(idx) => &reported[..idx],
        None => ".",
    }
}

/// Number of path components in a slash-separated relative path.
pub fn depth_of(rel: &str) -> usize {
    rel.split('/').filter(|s| !s.is_empty()).count()
}
