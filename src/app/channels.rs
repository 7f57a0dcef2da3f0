//! Channel selection orchestration methods
//!
//! Loads the channels of a container into the channel table and builds the
//! selection handed to a plot window.

use tracing::{debug, info};

use super::CatalogSelector;
use crate::error::{BrowseError, Result};
use crate::logic::path::child_path;
use crate::model::{ChannelRole, ChannelTable, PlotSelection};

impl CatalogSelector {
    /// Fill the channel table with the children of container `key`
    ///
    /// Returns the number of channels loaded.
    pub fn load_channels(&mut self, key: &str) -> Result<usize> {
        debug!("load_channels: {}", key);
        let result = self.channel_source(key);
        let (uri, names) = self.reported(result)?;

        let count = names.len();
        self.model.channels.build(names);
        self.model.data_source = Some(uri);
        Ok(count)
    }

    fn channel_source(&self, key: &str) -> Result<(String, Vec<String>)> {
        let client = self.connected_client()?;
        let item = self.child_item(key)?;
        if !item.is_container() {
            return Err(BrowseError::NotContainer(key.to_string()));
        }

        let path = child_path(&self.model.navigation.node_path, key);
        let count = client.child_count(&path)?;
        let names = client
            .items(&path, 0, count)?
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        Ok((client.node_uri(&path), names))
    }

    pub fn channel_table(&self) -> &ChannelTable {
        &self.model.channels
    }

    pub fn data_source(&self) -> Option<&str> {
        self.model.data_source.as_deref()
    }

    pub fn toggle_channel(&mut self, row: usize, role: ChannelRole, checked: bool) -> Result<()> {
        debug!("toggle_channel: {} {:?} {}", row, role, checked);
        self.model.channels.toggle(row, role, checked)
    }

    /// Selection for a plot window, if a y channel is checked
    pub fn add_selection(&self) -> Option<PlotSelection> {
        let source = self.model.data_source.as_deref()?;
        let selection = PlotSelection::from_channels(source, &self.model.channels.selection())?;
        info!(
            "Selection from {}: x={:?} y={:?} m={:?}",
            source, selection.selection.x, selection.selection.y, selection.selection.m
        );
        Some(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CatalogClient, ClientFactory};
    use crate::snapshot::{MapCatalog, MapNode};

    fn selector() -> CatalogSelector {
        let factory: ClientFactory =
            Box::new(|url: &str| -> anyhow::Result<Box<dyn CatalogClient>> {
                anyhow::bail!("offline: {}", url)
            });
        let scan = MapNode::container(vec![
            ("energy", MapNode::array(vec![100])),
            ("I0", MapNode::array(vec![100])),
            ("fluo", MapNode::array(vec![100])),
        ]);
        let root = MapNode::container(vec![("scan 1", scan), ("flat", MapNode::array(vec![3]))]);
        let client: Box<dyn CatalogClient> = Box::new(MapCatalog::new("http://localhost:8000", root));
        CatalogSelector::new(factory).with_client(client)
    }

    #[test]
    fn test_load_channels_sets_source() {
        let mut selector = selector();
        assert_eq!(selector.load_channels("scan 1").unwrap(), 3);
        assert_eq!(selector.channel_table().channels()[1], "I0");
        assert_eq!(
            selector.data_source(),
            Some("http://localhost:8000/api/v1/metadata/scan%201")
        );
    }

    #[test]
    fn test_load_channels_of_array_fails() {
        let mut selector = selector();
        assert!(matches!(
            selector.load_channels("flat"),
            Err(BrowseError::NotContainer(_))
        ));
        assert!(selector.data_source().is_none());
    }

    #[test]
    fn test_add_selection_needs_y() {
        let mut selector = selector();
        assert!(selector.add_selection().is_none());

        selector.load_channels("scan 1").unwrap();
        selector.toggle_channel(0, ChannelRole::X, true).unwrap();
        assert!(selector.add_selection().is_none());

        selector.toggle_channel(2, ChannelRole::Y, true).unwrap();
        selector.toggle_channel(1, ChannelRole::Monitor, true).unwrap();
        let plot = selector.add_selection().unwrap();
        assert_eq!(plot.selection.x, vec![0]);
        assert_eq!(plot.selection.y, vec![2]);
        assert_eq!(plot.selection.m, vec![1]);
        assert_eq!(plot.source_name, "http://localhost:8000/api/v1/metadata/scan%201");
    }

    #[test]
    fn test_navigation_clears_channels() {
        let mut selector = selector();
        selector.load_channels("scan 1").unwrap();
        selector.enter_node("scan 1").unwrap();
        assert!(selector.channel_table().is_empty());
        assert!(selector.data_source().is_none());
    }
}
