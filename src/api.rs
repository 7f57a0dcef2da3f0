//! Catalog Client
//!
//! The remote catalog is reached through [`CatalogClient`]. Implementations
//! resolve nodes by path, count and page through a container's children, and
//! describe each node with a [`NodeItem`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Structural classification of a catalog node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StructureFamily {
    Container,
    Array,
    /// Any family this browser cannot open (table, sparse, awkward, ...)
    Unsupported(String),
}

impl StructureFamily {
    pub fn as_str(&self) -> &str {
        match self {
            StructureFamily::Container => "container",
            StructureFamily::Array => "array",
            StructureFamily::Unsupported(name) => name,
        }
    }

    /// Containers and arrays can be opened, everything else cannot
    pub fn is_supported(&self) -> bool {
        !matches!(self, StructureFamily::Unsupported(_))
    }
}

impl From<String> for StructureFamily {
    fn from(name: String) -> Self {
        match name.to_lowercase().as_str() {
            "container" => StructureFamily::Container,
            "array" => StructureFamily::Array,
            _ => StructureFamily::Unsupported(name),
        }
    }
}

impl From<StructureFamily> for String {
    fn from(family: StructureFamily) -> Self {
        family.as_str().to_string()
    }
}

impl fmt::Display for StructureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayStructure {
    pub shape: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// Attributes of a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeItem {
    pub structure_family: StructureFamily,
    #[serde(default = "empty_metadata")]
    pub metadata: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<ArrayStructure>,
}

fn empty_metadata() -> Value {
    Value::Object(serde_json::Map::new())
}

impl NodeItem {
    pub fn new(structure_family: StructureFamily) -> Self {
        Self {
            structure_family,
            metadata: empty_metadata(),
            structure: None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.structure_family == StructureFamily::Container
    }

    /// Array shape, if the node carries an array structure
    pub fn shape(&self) -> Option<&[u64]> {
        self.structure.as_ref().map(|s| s.shape.as_slice())
    }
}

/// Access to a remote hierarchical catalog
///
/// Paths are sequences of keys from the root; the empty path is the root
/// itself. Children are always listed in the same order.
pub trait CatalogClient {
    /// URI the client was built from
    fn uri(&self) -> &str;

    /// Resolved API root reported by the service
    fn api_uri(&self) -> &str;

    /// Attributes of the node at `path`
    fn item(&self, path: &[String]) -> Result<NodeItem>;

    /// Number of direct children of the container at `path`
    fn child_count(&self, path: &[String]) -> Result<usize>;

    /// Up to `limit` children of the container at `path`, starting at `offset`
    fn items(&self, path: &[String], offset: usize, limit: usize)
        -> Result<Vec<(String, NodeItem)>>;

    /// Direct child `key` of the container at `path`, `None` if absent
    fn child(&self, path: &[String], key: &str) -> Result<Option<NodeItem>>;

    /// Metadata URI of the node at `path`
    fn node_uri(&self, path: &[String]) -> String {
        let mut uri = self.api_uri().trim_end_matches('/').to_string();
        uri.push_str("/metadata/");
        let encoded: Vec<String> = path
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        uri.push_str(&encoded.join("/"));
        uri
    }
}

impl fmt::Debug for dyn CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("uri", &self.uri())
            .field("api_uri", &self.api_uri())
            .finish()
    }
}

/// Builds a client bound to a url
pub type ClientFactory = Box<dyn Fn(&str) -> Result<Box<dyn CatalogClient>>>;
