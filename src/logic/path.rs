//! Node path utilities

/// Render a node path as "/a/b" ("/" for the root)
///
/// # Example
/// ```
/// use tiledbrowse::logic::path::display_path;
///
/// assert_eq!(display_path(&[]), "/");
/// assert_eq!(display_path(&["raw".to_string(), "scan_1".to_string()]), "/raw/scan_1");
/// ```
pub fn display_path(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

/// Path of child `key` under `path`
pub fn child_path(path: &[String], key: &str) -> Vec<String> {
    let mut child = path.to_vec();
    child.push(key.to_string());
    child
}

/// Truncate `path` to its first `len` segments, if `len` is within the path
pub fn prefix(path: &[String], len: usize) -> Option<Vec<String>> {
    path.get(..len).map(|p| p.to_vec())
}
