//! Navigation Model
//!
//! This sub-model contains the position inside the catalog tree and the
//! pagination state of the current container.

/// Rows per page used until the user picks another value
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Navigation state (node path, page, page size)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationModel {
    /// Keys from the root to the current container (empty = root)
    pub node_path: Vec<String>,

    /// Zero-based page of the current container's children
    pub current_page: usize,

    /// Children shown per page (always positive)
    pub rows_per_page: usize,
}

impl NavigationModel {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            node_path: Vec::new(),
            current_page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Back to the root, first page
    pub fn reset(&mut self) {
        self.node_path.clear();
        self.current_page = 0;
    }

    pub fn is_root(&self) -> bool {
        self.node_path.is_empty()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}
