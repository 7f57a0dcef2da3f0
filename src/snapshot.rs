//! In-memory catalog
//!
//! `MapCatalog` serves a catalog tree held in memory. Trees are built in code
//! or loaded from a YAML/JSON snapshot such as:
//!
//! ```yaml
//! structure_family: container
//! children:
//!   - key: scan_1
//!     structure_family: container
//!     metadata: { plan: count }
//!     children:
//!       - key: I0
//!         structure_family: array
//!         structure: { shape: [10] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::api::{ArrayStructure, CatalogClient, ClientFactory, NodeItem, StructureFamily};

/// A node of an in-memory catalog tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    #[serde(flatten)]
    pub item: NodeItem,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MapEntry>,
}

/// A keyed child of a [`MapNode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: String,
    #[serde(flatten)]
    pub node: MapNode,
}

impl MapNode {
    pub fn container<K: Into<String>>(children: Vec<(K, MapNode)>) -> Self {
        Self {
            item: NodeItem::new(StructureFamily::Container),
            children: children
                .into_iter()
                .map(|(key, node)| MapEntry {
                    key: key.into(),
                    node,
                })
                .collect(),
        }
    }

    pub fn array(shape: Vec<u64>) -> Self {
        let mut item = NodeItem::new(StructureFamily::Array);
        item.structure = Some(ArrayStructure {
            shape,
            data_type: None,
        });
        Self {
            item,
            children: Vec::new(),
        }
    }

    pub fn unsupported(family: &str) -> Self {
        Self {
            item: NodeItem::new(StructureFamily::Unsupported(family.to_string())),
            children: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.item.metadata = metadata;
        self
    }

    fn get(&self, key: &str) -> Option<&MapNode> {
        self.children
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.node)
    }
}

/// Catalog client over an in-memory tree
#[derive(Debug, Clone)]
pub struct MapCatalog {
    uri: String,
    api_uri: String,
    root: MapNode,
}

impl MapCatalog {
    pub fn new(uri: &str, root: MapNode) -> Self {
        let api_uri = if uri.contains("/api/") {
            uri.split("/api/").next().unwrap_or(uri).to_string() + "/api/v1/"
        } else {
            format!("{}/api/v1/", uri.trim_end_matches('/'))
        };
        Self {
            uri: uri.to_string(),
            api_uri,
            root,
        }
    }

    /// Load a tree from a YAML (or JSON) snapshot file
    pub fn load_tree(path: &Path) -> Result<MapNode> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog snapshot {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse catalog snapshot {}", path.display()))
    }

    fn lookup(&self, path: &[String]) -> Result<&MapNode> {
        let mut node = &self.root;
        for (depth, key) in path.iter().enumerate() {
            node = node
                .get(key)
                .ok_or_else(|| anyhow::anyhow!("No such entry: /{}", path[..=depth].join("/")))?;
        }
        Ok(node)
    }

    fn container(&self, path: &[String]) -> Result<&MapNode> {
        let node = self.lookup(path)?;
        if !node.item.is_container() {
            anyhow::bail!(
                "/{} is a {}, not a container",
                path.join("/"),
                node.item.structure_family
            );
        }
        Ok(node)
    }
}

impl CatalogClient for MapCatalog {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn api_uri(&self) -> &str {
        &self.api_uri
    }

    fn item(&self, path: &[String]) -> Result<NodeItem> {
        Ok(self.lookup(path)?.item.clone())
    }

    fn child_count(&self, path: &[String]) -> Result<usize> {
        Ok(self.container(path)?.children.len())
    }

    fn items(
        &self,
        path: &[String],
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(String, NodeItem)>> {
        Ok(self
            .container(path)?
            .children
            .iter()
            .skip(offset)
            .take(limit)
            .map(|entry| (entry.key.clone(), entry.node.item.clone()))
            .collect())
    }

    fn child(&self, path: &[String], key: &str) -> Result<Option<NodeItem>> {
        Ok(self.container(path)?.get(key).map(|node| node.item.clone()))
    }
}

/// Factory serving an offline snapshot under whatever url is connected
///
/// There is no network transport: without a snapshot every connection fails.
pub fn snapshot_factory(snapshot: Option<PathBuf>) -> ClientFactory {
    Box::new(move |url: &str| -> Result<Box<dyn CatalogClient>> {
        match &snapshot {
            Some(path) => {
                let root = MapCatalog::load_tree(path)?;
                Ok(Box::new(MapCatalog::new(url, root)))
            }
            None => anyhow::bail!("No catalog transport configured for {}", url),
        }
    })
}
