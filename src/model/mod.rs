//! Pure Browser Model
//!
//! This module defines the plain, cloneable state behind the catalog
//! selector. It is organized into focused sub-models:
//!
//! - **ConnectionModel**: committed url, url draft, connection state
//! - **NavigationModel**: node path and pagination
//! - **ChannelTable**: channels of the chosen data source and their checks
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted and compared in tests
//! - No client: all catalog access lives in the selector
//! - Pure accessors: helper methods are side-effect free

pub mod channels;
pub mod connection;
pub mod navigation;
pub mod types;

pub use channels::{ChannelRole, ChannelSelection, ChannelTable, PlotSelection};
pub use connection::{ConnectionModel, ConnectionState};
pub use navigation::{NavigationModel, DEFAULT_ROWS_PER_PAGE};
pub use types::*;

use crate::logic::breadcrumb::NODE_ID_MAXLEN;

/// Root browser model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub connection: ConnectionModel,

    pub navigation: NavigationModel,

    pub channels: ChannelTable,

    /// Uri of the node whose children fill the channel table
    pub data_source: Option<String>,

    /// Display width of a breadcrumb label
    pub breadcrumb_max_width: usize,
}

impl Model {
    pub fn new(url: &str, rows_per_page: usize) -> Self {
        Self {
            connection: ConnectionModel::new(url),
            navigation: NavigationModel::new(rows_per_page),
            channels: ChannelTable::new(),
            data_source: None,
            breadcrumb_max_width: NODE_ID_MAXLEN,
        }
    }

    /// Forget the chosen data source and its channels
    pub fn clear_channels(&mut self) {
        self.channels.clear();
        self.data_source = None;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new("", DEFAULT_ROWS_PER_PAGE)
    }
}
