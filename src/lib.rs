//! Tiled catalog browser
//!
//! A navigation model for a remote hierarchical data catalog: url editing
//! and connection, a paginated view of the current container, index-based
//! breadcrumbs, and channel selection for plotting. The binary wraps it in
//! a line-oriented front end.

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod signals;
pub mod snapshot;
pub mod utils;
pub mod validation;

pub use api::{CatalogClient, ClientFactory, NodeItem, StructureFamily};
pub use app::CatalogSelector;
pub use error::{BrowseError, Result, ValidationError};
pub use signals::{CatalogSignals, Connected, Signal};
pub use snapshot::{snapshot_factory, MapCatalog, MapNode};
