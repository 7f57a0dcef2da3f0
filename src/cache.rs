//! Resolved node cache
//!
//! Remembers the most recently resolved node so repeated lookups of an
//! unchanged path do not go back to the catalog. The cache must be
//! invalidated whenever the client is replaced.

use std::rc::Rc;

use crate::api::NodeItem;

/// A node resolved against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogNode {
    pub path: Vec<String>,
    pub item: NodeItem,
    /// Number of direct children (0 for anything but containers)
    pub child_count: usize,
}

#[derive(Debug, Default)]
pub struct NodeCache {
    entry: Option<Rc<CatalogNode>>,
    hits: u64,
    misses: u64,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached node for exactly `path`, if any
    pub fn get(&mut self, path: &[String]) -> Option<Rc<CatalogNode>> {
        match &self.entry {
            Some(node) if node.path == path => {
                self.hits += 1;
                Some(Rc::clone(node))
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn store(&mut self, node: CatalogNode) -> Rc<CatalogNode> {
        let node = Rc::new(node);
        self.entry = Some(Rc::clone(&node));
        node
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
