//! Page navigation logic
//!
//! Pure functions for paging through a container's children. Pages are
//! zero-based; there is always at least one page, even for an empty container.

use std::ops::Range;

/// Number of pages needed to show `child_count` children
///
/// # Examples
/// ```
/// use tiledbrowse::logic::navigation::page_count;
///
/// assert_eq!(page_count(0, 5), 1);
/// assert_eq!(page_count(5, 5), 1);
/// assert_eq!(page_count(7, 5), 2);
/// assert_eq!(page_count(7, 10), 1);
/// ```
pub fn page_count(child_count: usize, rows_per_page: usize) -> usize {
    let rows_per_page = rows_per_page.max(1);
    child_count.div_ceil(rows_per_page).max(1)
}

/// Index of the last page that holds at least one child (0 when empty)
pub fn last_page(child_count: usize, rows_per_page: usize) -> usize {
    page_count(child_count, rows_per_page) - 1
}

/// Clamp `page` into `[0, last_page]`
///
/// # Examples
/// ```
/// use tiledbrowse::logic::navigation::clamp_page;
///
/// assert_eq!(clamp_page(0, 7, 5), 0);
/// assert_eq!(clamp_page(1, 7, 5), 1);
/// assert_eq!(clamp_page(4, 7, 5), 1);  // Past the end
/// assert_eq!(clamp_page(3, 0, 5), 0);  // Empty container
/// ```
pub fn clamp_page(page: usize, child_count: usize, rows_per_page: usize) -> usize {
    page.min(last_page(child_count, rows_per_page))
}

/// Page after `current`, stopping at the last page
///
/// # Examples
/// ```
/// use tiledbrowse::logic::navigation::next_page;
///
/// assert_eq!(next_page(0, 7, 5), 1);
/// assert_eq!(next_page(1, 7, 5), 1);  // Already on the last page
/// assert_eq!(next_page(0, 5, 5), 0);  // Exactly one full page
/// ```
pub fn next_page(current: usize, child_count: usize, rows_per_page: usize) -> usize {
    clamp_page(current.saturating_add(1), child_count, rows_per_page)
}

/// Page before `current`, stopping at the first page
pub fn prev_page(current: usize, child_count: usize, rows_per_page: usize) -> usize {
    clamp_page(current.saturating_sub(1), child_count, rows_per_page)
}

/// Child indices shown on `page`
///
/// # Examples
/// ```
/// use tiledbrowse::logic::navigation::page_bounds;
///
/// assert_eq!(page_bounds(0, 7, 5), 0..5);
/// assert_eq!(page_bounds(1, 7, 5), 5..7);
/// assert_eq!(page_bounds(0, 0, 5), 0..0);
/// ```
pub fn page_bounds(page: usize, child_count: usize, rows_per_page: usize) -> Range<usize> {
    let page = clamp_page(page, child_count, rows_per_page);
    let start = page.saturating_mul(rows_per_page).min(child_count);
    let end = start.saturating_add(rows_per_page).min(child_count);
    start..end
}
