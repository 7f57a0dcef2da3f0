//! Pagination orchestration methods
//!
//! Page handlers move `current_page` within the current container and fire
//! table-changed only when the page actually moved. The displayed rows are
//! derived on demand from the client.

use tracing::debug;

use super::CatalogSelector;
use crate::error::{BrowseError, Result};
use crate::logic::formatting::location_label;
use crate::logic::navigation::{last_page, next_page, page_bounds, page_count, prev_page};
use crate::model::Row;

impl CatalogSelector {
    /// Move to the page chosen by `target(current, child_count, rows_per_page)`
    fn change_page<F>(&mut self, target: F) -> Result<bool>
    where
        F: FnOnce(usize, usize, usize) -> usize,
    {
        let result = self.current_node();
        let node = self.reported(result)?;

        let nav = &mut self.model.navigation;
        let page = target(nav.current_page, node.child_count, nav.rows_per_page);
        if page == nav.current_page {
            return Ok(false);
        }
        nav.current_page = page;
        self.emit_table_changed();
        Ok(true)
    }

    pub fn on_next_page_clicked(&mut self) -> Result<bool> {
        debug!("on_next_page_clicked");
        self.change_page(next_page)
    }

    pub fn on_prev_page_clicked(&mut self) -> Result<bool> {
        debug!("on_prev_page_clicked");
        self.change_page(prev_page)
    }

    pub fn on_first_page_clicked(&mut self) -> Result<bool> {
        debug!("on_first_page_clicked");
        self.change_page(|_, _, _| 0)
    }

    pub fn on_last_page_clicked(&mut self) -> Result<bool> {
        debug!("on_last_page_clicked");
        self.change_page(|_, child_count, rows_per_page| last_page(child_count, rows_per_page))
    }

    /// New page size; always back to the first page
    pub fn on_rows_per_page_changed(&mut self, rows_per_page: usize) -> Result<()> {
        debug!("on_rows_per_page_changed: {}", rows_per_page);
        if rows_per_page == 0 {
            return Err(BrowseError::InvalidPageSize);
        }
        self.model.navigation.rows_per_page = rows_per_page;
        self.model.navigation.current_page = 0;
        self.emit_table_changed();
        Ok(())
    }

    pub fn page_count(&self) -> Result<usize> {
        let node = self.current_node()?;
        Ok(page_count(node.child_count, self.model.navigation.rows_per_page))
    }

    /// e.g. "6-7 of 7"
    pub fn location_label(&self) -> Result<String> {
        let node = self.current_node()?;
        let nav = &self.model.navigation;
        Ok(location_label(nav.current_page, node.child_count, nav.rows_per_page))
    }

    /// Rows shown for the current page, the parent row first below the root
    pub fn page_rows(&self) -> Result<Vec<Row>> {
        let client = self.connected_client()?;
        let node = self.current_node()?;
        let nav = &self.model.navigation;

        let bounds = page_bounds(nav.current_page, node.child_count, nav.rows_per_page);

        let mut rows = Vec::with_capacity(bounds.len() + 1);
        if !nav.is_root() {
            rows.push(Row::Parent);
        }
        if bounds.is_empty() {
            return Ok(rows);
        }

        let items = client.items(&node.path, bounds.start, bounds.len())?;
        rows.extend(
            items
                .into_iter()
                .enumerate()
                .map(|(i, (key, item))| Row::Child {
                    key,
                    item,
                    position: bounds.start + i + 1,
                }),
        );
        Ok(rows)
    }

    /// Keys of the children on the current page
    pub fn page_keys(&self) -> Result<Vec<String>> {
        Ok(self
            .page_rows()?
            .into_iter()
            .filter_map(|row| match row {
                Row::Child { key, .. } => Some(key),
                Row::Parent => None,
            })
            .collect())
    }
}
