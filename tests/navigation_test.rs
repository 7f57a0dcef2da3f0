//! Integration tests for moving through the catalog tree
//!
//! Bug: breadcrumbs used to be matched by their rendered text. Two segments
//! that truncate to the same label ("structured_data", "structured_raw")
//! made a click jump to the wrong level. Breadcrumbs are now addressed by
//! prefix length.

use tiledbrowse::api::{CatalogClient, ClientFactory};
use tiledbrowse::model::OpenOutcome;
use tiledbrowse::{BrowseError, CatalogSelector, MapCatalog, MapNode};

fn tree() -> MapNode {
    let leaf = MapNode::container(vec![("spectrum", MapNode::array(vec![2048]))]);
    let raw = MapNode::container(vec![("structured_data", leaf)]);
    let data = MapNode::container(vec![("structured_raw", raw)]);
    MapNode::container(vec![
        ("structured_data", data),
        ("notes", MapNode::unsupported("sparse")),
    ])
}

fn selector() -> CatalogSelector {
    let factory: ClientFactory = Box::new(|url: &str| -> anyhow::Result<Box<dyn CatalogClient>> {
        Ok(Box::new(MapCatalog::new(url, tree())))
    });
    let mut selector = CatalogSelector::new(factory).with_url("http://localhost:8000");
    assert!(selector.connect());
    selector
}

fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Test: enter/exit sequences behave like a stack
#[test]
fn test_enter_exit_stack_semantics() {
    let mut selector = selector();
    let mut expected: Vec<String> = Vec::new();

    for key in ["structured_data", "structured_raw", "structured_data"] {
        selector.enter_node(key).unwrap();
        expected.push(key.to_string());
        assert_eq!(selector.node_path(), expected.as_slice());
    }

    selector.exit_node().unwrap();
    expected.pop();
    assert_eq!(selector.node_path(), expected.as_slice());

    selector.enter_node("structured_data").unwrap();
    expected.push("structured_data".to_string());
    assert_eq!(selector.node_path(), expected.as_slice());
}

/// Test: jump_to_node(0) returns to the root from any depth
#[test]
fn test_jump_to_root_from_any_depth() {
    let mut selector = selector();
    for depth in 0..=3 {
        selector.jump_to_node(0).unwrap();
        let keys = ["structured_data", "structured_raw", "structured_data"];
        for key in &keys[..depth] {
            selector.enter_node(key).unwrap();
        }
        selector.jump_to_node(0).unwrap();
        assert!(selector.node_path().is_empty());
        assert_eq!(selector.current_page(), 0);
    }
}

/// Test: breadcrumb i truncates the path to length i even with colliding labels
#[test]
fn test_breadcrumb_click_uses_index_not_label() {
    let mut selector = selector();
    selector.enter_node("structured_data").unwrap();
    selector.enter_node("structured_raw").unwrap();
    selector.enter_node("structured_data").unwrap();

    let crumbs = selector.breadcrumbs();
    assert_eq!(crumbs.len(), 4);
    assert_eq!(crumbs[1].label, crumbs[2].label);
    assert_eq!(crumbs[1].label, crumbs[3].label);
    assert_eq!(crumbs[2].key.as_deref(), Some("structured_raw"));

    selector.on_breadcrumb_clicked(crumbs[2].index).unwrap();
    assert_eq!(selector.node_path(), path(&["structured_data", "structured_raw"]));

    selector.on_breadcrumb_clicked(1).unwrap();
    assert_eq!(selector.node_path(), path(&["structured_data"]));
}

/// Test: out-of-range jumps are contract errors and leave the path alone
#[test]
fn test_jump_out_of_range() {
    let mut selector = selector();
    selector.enter_node("structured_data").unwrap();
    let err = selector.jump_to_node(5).unwrap_err();
    assert!(matches!(err, BrowseError::OutOfBounds { index: 5, depth: 1 }));
    assert_eq!(selector.node_path(), path(&["structured_data"]));
}

/// Test: exit at the root is reported as AtRoot
#[test]
fn test_exit_at_root() {
    let mut selector = selector();
    assert!(matches!(selector.exit_node(), Err(BrowseError::AtRoot)));
    assert!(selector.node_path().is_empty());
}

/// Test: open_node enters containers, selects arrays, rejects the rest
#[test]
fn test_open_node_by_family() {
    let mut selector = selector();

    let err = selector.open_node("notes").unwrap_err();
    assert!(matches!(err, BrowseError::UnsupportedType { .. }));
    assert!(selector.node_path().is_empty());

    assert_eq!(selector.open_node("structured_data").unwrap(), OpenOutcome::Entered);
    selector.open_node("structured_raw").unwrap();
    selector.open_node("structured_data").unwrap();

    let depth = selector.node_path().len();
    match selector.open_node("spectrum").unwrap() {
        OpenOutcome::DataSelected(data) => {
            assert_eq!(data.path.last().map(String::as_str), Some("spectrum"));
            assert_eq!(data.item.shape(), Some(&[2048][..]));
        }
        OpenOutcome::Entered => panic!("array must not be entered"),
    }
    assert_eq!(selector.node_path().len(), depth);
}

/// Test: a missing key fails with NotFound and changes nothing
#[test]
fn test_enter_missing_child() {
    let mut selector = selector();
    let err = selector.enter_node("does_not_exist").unwrap_err();
    assert!(matches!(err, BrowseError::NotFound(ref key) if key == "does_not_exist"));
    assert!(selector.node_path().is_empty());
}
