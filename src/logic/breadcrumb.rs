//! Breadcrumb labels
//!
//! Breadcrumbs are addressed by prefix length, never by their label: two
//! segments may truncate to the same text ("structured_data" and
//! "structured_raw" both show as "struc...").

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ROOT_LABEL: &str = "root";
pub const TRUNCATION_MARKER: &str = "...";
/// Default display width of a breadcrumb label
pub const NODE_ID_MAXLEN: usize = 8;

/// One clickable prefix of the current node path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Length of the path prefix this breadcrumb stands for (0 = root)
    pub index: usize,
    pub label: String,
    /// Full path segment (None for the root)
    pub key: Option<String>,
}

/// Shorten `segment` to at most `max_width` display columns
///
/// # Examples
/// ```
/// use tiledbrowse::logic::breadcrumb::truncate_segment;
///
/// assert_eq!(truncate_segment("scan_1", 8), "scan_1");
/// assert_eq!(truncate_segment("abcdefgh", 8), "abcdefgh");
/// assert_eq!(truncate_segment("structured_data", 8), "struc...");
/// ```
pub fn truncate_segment(segment: &str, max_width: usize) -> String {
    if segment.width() <= max_width {
        return segment.to_string();
    }

    let budget = max_width.saturating_sub(TRUNCATION_MARKER.len());
    let mut used = 0;
    let mut label = String::new();
    for c in segment.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        label.push(c);
    }
    label.push_str(TRUNCATION_MARKER);
    label
}

/// Breadcrumbs for every prefix of `path`, root first
pub fn build_breadcrumbs(path: &[String], max_width: usize) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::with_capacity(path.len() + 1);
    crumbs.push(Breadcrumb {
        index: 0,
        label: ROOT_LABEL.to_string(),
        key: None,
    });
    for (i, segment) in path.iter().enumerate() {
        crumbs.push(Breadcrumb {
            index: i + 1,
            label: truncate_segment(segment, max_width),
            key: Some(segment.clone()),
        });
    }
    crumbs
}
