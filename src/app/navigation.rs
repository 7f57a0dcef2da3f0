//! Navigation orchestration methods
//!
//! Methods for moving through the catalog tree:
//! - Entering a child container and leaving it again
//! - Jumping to a breadcrumb by prefix length
//! - Opening a child (container or array)

use tracing::{debug, info};

use super::CatalogSelector;
use crate::api::{NodeItem, StructureFamily};
use crate::error::{BrowseError, Result};
use crate::logic::breadcrumb::{build_breadcrumbs, Breadcrumb};
use crate::logic::path::{child_path, prefix};
use crate::model::{DataSelection, NodeInfo, OpenOutcome};

impl CatalogSelector {
    /// Step into child container `key`
    pub fn enter_node(&mut self, key: &str) -> Result<()> {
        debug!("enter_node: {}", key);
        let result = self.child_item(key);
        let item = self.reported(result)?;
        self.descend(key, &item)
    }

    fn descend(&mut self, key: &str, item: &NodeItem) -> Result<()> {
        if !item.is_container() {
            return Err(BrowseError::NotContainer(key.to_string()));
        }
        self.model.navigation.node_path.push(key.to_string());
        self.model.navigation.current_page = 0;
        self.emit_table_changed();
        Ok(())
    }

    /// Step up to the parent container; fails with AtRoot at the root
    pub fn exit_node(&mut self) -> Result<()> {
        debug!("exit_node");
        if self.model.navigation.node_path.pop().is_none() {
            return Err(BrowseError::AtRoot);
        }
        self.model.navigation.current_page = 0;
        self.emit_table_changed();
        Ok(())
    }

    /// Truncate the path to its first `index` segments (0 = root)
    pub fn jump_to_node(&mut self, index: usize) -> Result<()> {
        debug!("jump_to_node: {}", index);
        let path = &self.model.navigation.node_path;
        let target = prefix(path, index).ok_or(BrowseError::OutOfBounds {
            index,
            depth: path.len(),
        })?;
        self.model.navigation.node_path = target;
        self.model.navigation.current_page = 0;
        self.emit_table_changed();
        Ok(())
    }

    pub fn on_breadcrumb_clicked(&mut self, index: usize) -> Result<()> {
        self.jump_to_node(index)
    }

    /// Labels for the root and every segment of the current path
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        build_breadcrumbs(
            &self.model.navigation.node_path,
            self.model.breadcrumb_max_width,
        )
    }

    /// Enter container `key`, or select array `key` for display
    pub fn open_node(&mut self, key: &str) -> Result<OpenOutcome> {
        debug!("open_node: {}", key);
        let result = self.child_item(key);
        let item = self.reported(result)?;

        match item.structure_family.clone() {
            StructureFamily::Container => {
                self.descend(key, &item)?;
                Ok(OpenOutcome::Entered)
            }
            StructureFamily::Array => {
                let path = child_path(&self.model.navigation.node_path, key);
                let uri = self.connected_client()?.node_uri(&path);
                info!("Selected array {}", uri);
                Ok(OpenOutcome::DataSelected(DataSelection { path, uri, item }))
            }
            StructureFamily::Unsupported(family) => Err(BrowseError::UnsupportedType {
                key: key.to_string(),
                family,
            }),
        }
    }

    /// Type, shape and metadata of child `key`
    pub fn describe_child(&self, key: &str) -> Result<NodeInfo> {
        let item = self.child_item(key)?;
        Ok(NodeInfo::from_item(key, &item))
    }
}
