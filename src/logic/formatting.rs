//! Formatting and display logic
//!
//! Pure functions for formatting catalog data for human-readable display.

use serde_json::Value;

use super::navigation::page_bounds;

/// Describe which children are on screen, e.g. "1-5 of 7"
///
/// # Examples
/// ```
/// use tiledbrowse::logic::formatting::location_label;
///
/// assert_eq!(location_label(0, 7, 5), "1-5 of 7");
/// assert_eq!(location_label(1, 7, 5), "6-7 of 7");
/// assert_eq!(location_label(0, 7, 10), "1-7 of 7");
/// assert_eq!(location_label(0, 0, 5), "0-0 of 0");
/// ```
pub fn location_label(page: usize, child_count: usize, rows_per_page: usize) -> String {
    let bounds = page_bounds(page, child_count, rows_per_page);
    if bounds.is_empty() {
        return format!("0-0 of {}", child_count);
    }
    format!("{}-{} of {}", bounds.start + 1, bounds.end, child_count)
}

/// Format an array shape as a tuple
///
/// # Examples
/// ```
/// use tiledbrowse::logic::formatting::format_shape;
///
/// assert_eq!(format_shape(&[10]), "(10,)");
/// assert_eq!(format_shape(&[3, 4]), "(3, 4)");
/// assert_eq!(format_shape(&[]), "()");
/// ```
pub fn format_shape(shape: &[u64]) -> String {
    match shape {
        [single] => format!("({},)", single),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

/// Pretty-print metadata with two-space indentation
pub fn format_metadata(metadata: &Value) -> String {
    serde_json::to_string_pretty(metadata).unwrap_or_else(|_| metadata.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_label_full_pages() {
        assert_eq!(location_label(0, 10, 5), "1-5 of 10");
        assert_eq!(location_label(1, 10, 5), "6-10 of 10");
    }

    #[test]
    fn test_location_label_clamps_stale_page() {
        assert_eq!(location_label(4, 7, 5), "6-7 of 7");
    }

    #[test]
    fn test_format_metadata_pretty() {
        let text = format_metadata(&json!({"animal": "dog"}));
        assert_eq!(text, "{\n  \"animal\": \"dog\"\n}");
    }

    #[test]
    fn test_format_metadata_empty() {
        assert_eq!(format_metadata(&json!({})), "{}");
    }
}
