//! Integration tests for url editing and (re)connecting
//!
//! These tests verify:
//! 1. A rejected url draft never replaces the committed url
//! 2. A failed connect keeps the session that was already established
//! 3. Node resolution is not repeated for an unchanged path
//! 4. A catalog request that fails mid-session is reported once and changes nothing

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tiledbrowse::api::{CatalogClient, ClientFactory, NodeItem};
use tiledbrowse::model::ConnectionState;
use tiledbrowse::{BrowseError, CatalogSelector, Connected, MapCatalog, MapNode};

fn tree() -> MapNode {
    MapNode::container(vec![
        ("a", MapNode::array(vec![1])),
        ("b", MapNode::container(vec![("c", MapNode::array(vec![2]))])),
    ])
}

/// Factory that fails for any url containing "offline"
fn factory() -> ClientFactory {
    Box::new(|url: &str| -> anyhow::Result<Box<dyn CatalogClient>> {
        if url.contains("offline") {
            anyhow::bail!("connection refused: {}", url);
        }
        Ok(Box::new(MapCatalog::new(url, tree())))
    })
}

fn collect<T: Clone + 'static>(
    signal: &mut tiledbrowse::Signal<T>,
) -> Rc<RefCell<Vec<T>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    signal.connect(move |payload: &T| s.borrow_mut().push(payload.clone()));
    seen
}

/// Test: a url without a scheme is rejected with exactly one notification
#[test]
fn test_invalid_url_keeps_committed_url() {
    let mut selector = CatalogSelector::new(factory()).with_url("http://localhost:8000");
    let errors = collect(&mut selector.signals.url_validation_error);
    let changes = collect(&mut selector.signals.url_changed);

    selector.set_url_draft("tiled.example.com/api");
    assert!(!selector.commit_url_edit());

    assert_eq!(selector.url(), "http://localhost:8000");
    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("URL must include a scheme."));
    assert!(changes.borrow().is_empty());
}

/// Test: a valid draft is committed and announced
#[test]
fn test_valid_url_is_committed() {
    let mut selector = CatalogSelector::new(factory());
    let changes = collect(&mut selector.signals.url_changed);

    selector.set_url_draft("https://tiled.example.com/api");
    assert!(selector.commit_url_edit());
    assert_eq!(selector.url(), "https://tiled.example.com/api");
    assert_eq!(changes.borrow().len(), 1);
}

/// Test: failing to connect without a prior client leaves no client
#[test]
fn test_failed_first_connect() {
    let mut selector = CatalogSelector::new(factory()).with_url("http://offline");
    let errors = collect(&mut selector.signals.client_connection_error);
    let connected = collect(&mut selector.signals.client_connected);

    assert!(!selector.connect());
    assert!(selector.client().is_none());
    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("connection refused"));
    assert!(connected.borrow().is_empty());
}

/// Test: a failed reconnect keeps the established client and position
#[test]
fn test_failed_reconnect_keeps_session() {
    let mut selector = CatalogSelector::new(factory()).with_url("http://localhost:8000");
    assert!(selector.connect());
    selector.enter_node("b").unwrap();

    let errors = collect(&mut selector.signals.client_connection_error);
    selector.set_url("http://offline");
    assert!(!selector.connect());

    assert_eq!(errors.borrow().len(), 1);
    let client = selector.client().expect("previous client kept");
    assert_eq!(client.uri(), "http://localhost:8000");
    assert_eq!(selector.node_path(), ["b".to_string()]);
    assert!(matches!(
        selector.model.connection.state,
        ConnectionState::Failed { .. }
    ));
    assert_eq!(selector.page_keys().unwrap(), vec!["c"]);
}

/// Test: connecting announces the urls and resets the view
#[test]
fn test_connect_announces_and_resets() {
    let mut selector = CatalogSelector::new(factory()).with_url("http://localhost:8000");
    let connected = collect(&mut selector.signals.client_connected);
    let tables = collect(&mut selector.signals.table_changed);

    assert!(selector.connect());
    selector.enter_node("b").unwrap();
    assert!(selector.connect());

    assert_eq!(
        connected.borrow()[0],
        Connected {
            url: "http://localhost:8000".to_string(),
            api_url: "http://localhost:8000/api/v1/".to_string(),
        }
    );
    assert!(selector.node_path().is_empty());
    assert_eq!(selector.current_page(), 0);
    assert_eq!(tables.borrow().last(), Some(&Vec::new()));
}

/// Catalog that counts how often nodes are resolved
struct CountingCatalog {
    inner: MapCatalog,
    item_calls: Rc<Cell<usize>>,
}

impl CatalogClient for CountingCatalog {
    fn uri(&self) -> &str {
        self.inner.uri()
    }

    fn api_uri(&self) -> &str {
        self.inner.api_uri()
    }

    fn item(&self, path: &[String]) -> anyhow::Result<NodeItem> {
        self.item_calls.set(self.item_calls.get() + 1);
        self.inner.item(path)
    }

    fn child_count(&self, path: &[String]) -> anyhow::Result<usize> {
        self.inner.child_count(path)
    }

    fn items(
        &self,
        path: &[String],
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<Vec<(String, NodeItem)>> {
        self.inner.items(path, offset, limit)
    }

    fn child(&self, path: &[String], key: &str) -> anyhow::Result<Option<NodeItem>> {
        self.inner.child(path, key)
    }
}

/// Test: the current node is resolved once per path, and again after reconnecting
#[test]
fn test_current_node_resolved_once_per_path() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let factory: ClientFactory = Box::new(move |url: &str| -> anyhow::Result<Box<dyn CatalogClient>> {
        Ok(Box::new(CountingCatalog {
            inner: MapCatalog::new(url, tree()),
            item_calls: Rc::clone(&counter),
        }))
    });
    let mut selector = CatalogSelector::new(factory).with_url("http://localhost:8000");
    assert!(selector.connect());

    for _ in 0..5 {
        selector.current_node().unwrap();
        selector.page_rows().unwrap();
        selector.location_label().unwrap();
    }
    assert_eq!(calls.get(), 1);

    selector.enter_node("b").unwrap();
    selector.current_node().unwrap();
    selector.current_node().unwrap();
    assert_eq!(calls.get(), 2);

    assert!(selector.connect());
    selector.current_node().unwrap();
    assert_eq!(calls.get(), 3);
}

/// Catalog whose lookups of "broken" and listings below "b" fail server-side
struct FlakyCatalog {
    inner: MapCatalog,
}

impl CatalogClient for FlakyCatalog {
    fn uri(&self) -> &str {
        self.inner.uri()
    }

    fn api_uri(&self) -> &str {
        self.inner.api_uri()
    }

    fn item(&self, path: &[String]) -> anyhow::Result<NodeItem> {
        self.inner.item(path)
    }

    fn child_count(&self, path: &[String]) -> anyhow::Result<usize> {
        self.inner.child_count(path)
    }

    fn items(
        &self,
        path: &[String],
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<Vec<(String, NodeItem)>> {
        if path.first().map(String::as_str) == Some("b") {
            anyhow::bail!("500 Internal Server Error: listing /{}", path.join("/"));
        }
        self.inner.items(path, offset, limit)
    }

    fn child(&self, path: &[String], key: &str) -> anyhow::Result<Option<NodeItem>> {
        if key == "broken" {
            anyhow::bail!("500 Internal Server Error: lookup {}", key);
        }
        self.inner.child(path, key)
    }
}

fn flaky_selector() -> CatalogSelector {
    let factory: ClientFactory = Box::new(|url: &str| -> anyhow::Result<Box<dyn CatalogClient>> {
        Ok(Box::new(FlakyCatalog {
            inner: MapCatalog::new(url, tree()),
        }))
    });
    let mut selector = CatalogSelector::new(factory).with_url("http://localhost:8000");
    assert!(selector.connect());
    selector
}

/// Test: enter, open and load fail with Remote, notify once each, and keep the position
#[test]
fn test_remote_failure_reported_and_state_kept() {
    let mut selector = flaky_selector();
    selector.on_rows_per_page_changed(1).unwrap();
    assert!(selector.on_next_page_clicked().unwrap());
    let path = selector.node_path().to_vec();
    let page = selector.current_page();

    let errors = collect(&mut selector.signals.client_connection_error);
    let tables = collect(&mut selector.signals.table_changed);

    assert!(matches!(selector.enter_node("broken"), Err(BrowseError::Remote(_))));
    assert_eq!(errors.borrow().len(), 1);

    assert!(matches!(selector.open_node("broken"), Err(BrowseError::Remote(_))));
    assert_eq!(errors.borrow().len(), 2);

    assert!(matches!(selector.load_channels("b"), Err(BrowseError::Remote(_))));
    assert_eq!(errors.borrow().len(), 3);

    assert!(errors
        .borrow()
        .iter()
        .all(|message| message.contains("500 Internal Server Error")));
    assert!(tables.borrow().is_empty());
    assert_eq!(selector.node_path(), path.as_slice());
    assert_eq!(selector.current_page(), page);
    assert!(selector.channel_table().is_empty());
    assert!(selector.client().is_some());
}

/// Test: contract errors are returned without a connection-error notification
#[test]
fn test_missing_child_is_not_a_connection_error() {
    let mut selector = flaky_selector();
    let errors = collect(&mut selector.signals.client_connection_error);

    assert!(matches!(selector.enter_node("nope"), Err(BrowseError::NotFound(_))));
    assert!(errors.borrow().is_empty());
}
