//! Catalog selector orchestration
//!
//! `CatalogSelector` ties the pure model to the catalog client, the url
//! validators and the notification channels. Its methods are grouped by
//! domain:
//! - `connection`: url editing and connecting
//! - `navigation`: entering, leaving and opening nodes, breadcrumbs
//! - `pagination`: page handlers and the displayed rows
//! - `channels`: channel table and plot hand-off
//!
//! Everything runs synchronously on the caller's thread. Slots connected to
//! `signals` run inside the operation that fires them.

pub(crate) mod channels;
pub(crate) mod connection;
pub(crate) mod navigation;
pub(crate) mod pagination;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::error;

use crate::api::{CatalogClient, ClientFactory, NodeItem};
use crate::cache::{CatalogNode, NodeCache};
use crate::error::{BrowseError, Result};
use crate::logic::errors::format_error_message;
use crate::logic::path::display_path;
use crate::logic::url::DEFAULT_SCHEMES;
use crate::model::{ConnectionState, Model, DEFAULT_ROWS_PER_PAGE};
use crate::signals::CatalogSignals;
use crate::validation::ValidatorRegistry;

pub struct CatalogSelector {
    pub model: Model,
    pub signals: CatalogSignals,
    client: Option<Box<dyn CatalogClient>>,
    factory: ClientFactory,
    validators: ValidatorRegistry,
    cache: RefCell<NodeCache>,
}

impl CatalogSelector {
    /// Selector with no client, default page size and http(s) url validators
    pub fn new(factory: ClientFactory) -> Self {
        let schemes = DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect();
        Self {
            model: Model::new("", DEFAULT_ROWS_PER_PAGE),
            signals: CatalogSignals::new(),
            client: None,
            factory,
            validators: ValidatorRegistry::for_urls(schemes),
            cache: RefCell::new(NodeCache::new()),
        }
    }

    /// Initial committed url (no validation, no notification)
    pub fn with_url(mut self, url: &str) -> Self {
        self.model.connection.set_url(url);
        self
    }

    /// Start out connected to `client`
    pub fn with_client(mut self, client: Box<dyn CatalogClient>) -> Self {
        self.model.connection.set_url(client.uri());
        self.model.connection.state = ConnectionState::Connected {
            url: client.uri().to_string(),
            api_url: client.api_uri().to_string(),
        };
        self.client = Some(client);
        self.cache.get_mut().invalidate();
        self
    }

    pub fn with_validators(mut self, validators: ValidatorRegistry) -> Self {
        self.validators = validators;
        self
    }

    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.model.navigation.rows_per_page = rows_per_page.max(1);
        self
    }

    pub fn with_breadcrumb_width(mut self, max_width: usize) -> Self {
        self.model.breadcrumb_max_width = max_width;
        self
    }

    pub fn client(&self) -> Option<&dyn CatalogClient> {
        self.client.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn node_path(&self) -> &[String] {
        &self.model.navigation.node_path
    }

    pub fn current_page(&self) -> usize {
        self.model.navigation.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.model.navigation.rows_per_page
    }

    /// (hits, misses) of the resolved node cache
    pub fn cache_stats(&self) -> (u64, u64) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }

    fn connected_client(&self) -> Result<&dyn CatalogClient> {
        self.client.as_deref().ok_or(BrowseError::NotConnected)
    }

    /// Resolve `path` against the client, reusing the last resolved node
    pub fn node(&self, path: &[String]) -> Result<Rc<CatalogNode>> {
        let client = self.connected_client()?;
        if let Some(node) = self.cache.borrow_mut().get(path) {
            return Ok(node);
        }

        let item = client.item(path)?;
        let child_count = if item.is_container() {
            client.child_count(path)?
        } else {
            0
        };
        let node = CatalogNode {
            path: path.to_vec(),
            item,
            child_count,
        };
        Ok(self.cache.borrow_mut().store(node))
    }

    /// The node the current path designates (the root when the path is empty)
    pub fn current_node(&self) -> Result<Rc<CatalogNode>> {
        self.node(&self.model.navigation.node_path)
    }

    /// Child `key` of the current node; NotFound if it has no such child
    fn child_item(&self, key: &str) -> Result<NodeItem> {
        let client = self.connected_client()?;
        let current = self.current_node()?;
        if !current.item.is_container() {
            return Err(BrowseError::NotContainer(display_path(&current.path)));
        }
        client
            .child(&current.path, key)?
            .ok_or_else(|| BrowseError::NotFound(key.to_string()))
    }

    /// Report remote failures on the connection-error channel
    fn reported<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(BrowseError::Remote(err)) = &result {
            let message = format_error_message(err);
            error!("Catalog request failed: {:#}", err);
            self.signals.client_connection_error.emit(&message);
        }
        result
    }

    /// Path or page changed: the channel table belongs to the old view
    fn emit_table_changed(&mut self) {
        self.model.clear_channels();
        let path = self.model.navigation.node_path.clone();
        self.signals.table_changed.emit(&path);
    }
}

impl fmt::Debug for CatalogSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSelector")
            .field("model", &self.model)
            .field("signals", &self.signals)
            .field("client", &self.client)
            .field("validators", &self.validators)
            .finish_non_exhaustive()
    }
}
