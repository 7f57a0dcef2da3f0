//! Shared types for the Model
//!
//! These types describe what the selector hands to a presentation layer:
//! displayed rows, node descriptions, and the outcome of opening a node.

use crate::api::{NodeItem, StructureFamily};
use crate::logic::formatting::{format_metadata, format_shape};

/// Label of the synthetic row that goes back to the parent
pub const PARENT_ROW_LABEL: &str = "..";

/// One displayed row of the catalog table
#[derive(Clone, Debug, PartialEq)]
pub enum Row {
    /// "Go up" row, shown first whenever the current node is not the root
    Parent,
    Child {
        key: String,
        item: NodeItem,
        /// 1-based position of the child in the whole listing
        position: usize,
    },
}

impl Row {
    pub fn label(&self) -> &str {
        match self {
            Row::Parent => PARENT_ROW_LABEL,
            Row::Child { key, .. } => key,
        }
    }

    /// Vertical header text ("" for the parent row)
    pub fn header(&self) -> String {
        match self {
            Row::Parent => String::new(),
            Row::Child { position, .. } => position.to_string(),
        }
    }

    pub fn family(&self) -> Option<&StructureFamily> {
        match self {
            Row::Parent => None,
            Row::Child { item, .. } => Some(&item.structure_family),
        }
    }
}

/// Details of a child node, shown when it is selected
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInfo {
    pub key: String,
    pub family: StructureFamily,
    pub shape: Option<Vec<u64>>,
    /// Metadata as pretty-printed JSON
    pub metadata: String,
    /// Whether the node can be opened (container or array)
    pub openable: bool,
}

impl NodeInfo {
    pub fn from_item(key: &str, item: &NodeItem) -> Self {
        let shape = match item.structure_family {
            StructureFamily::Array => item.shape().map(|s| s.to_vec()),
            _ => None,
        };
        Self {
            key: key.to_string(),
            family: item.structure_family.clone(),
            shape,
            metadata: format_metadata(&item.metadata),
            openable: item.structure_family.is_supported(),
        }
    }

    pub fn summary(&self) -> String {
        let mut text = format!("type: {}\n", self.family);
        if let Some(shape) = &self.shape {
            text.push_str(&format!("shape: {}\n", format_shape(shape)));
        }
        text.push_str(&format!("metadata: {}", self.metadata));
        text
    }
}

/// An array chosen for display
#[derive(Clone, Debug, PartialEq)]
pub struct DataSelection {
    pub path: Vec<String>,
    pub uri: String,
    pub item: NodeItem,
}

/// Result of opening a child of the current node
#[derive(Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    /// A container was entered; the path grew by one
    Entered,
    /// An array was selected; the path is unchanged
    DataSelected(DataSelection),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ArrayStructure;
    use serde_json::json;

    #[test]
    fn test_row_labels_and_headers() {
        let child = Row::Child {
            key: "a".to_string(),
            item: NodeItem::new(StructureFamily::Array),
            position: 6,
        };
        assert_eq!(child.label(), "a");
        assert_eq!(child.header(), "6");
        assert_eq!(Row::Parent.label(), "..");
        assert_eq!(Row::Parent.header(), "");
        assert!(Row::Parent.family().is_none());
    }

    #[test]
    fn test_array_summary_includes_shape() {
        let mut item = NodeItem::new(StructureFamily::Array);
        item.metadata = json!({"animal": "dog"});
        item.structure = Some(ArrayStructure {
            shape: vec![10],
            data_type: None,
        });
        let info = NodeInfo::from_item("a", &item);
        assert!(info.openable);
        assert_eq!(
            info.summary(),
            "type: array\nshape: (10,)\nmetadata: {\n  \"animal\": \"dog\"\n}"
        );
    }

    #[test]
    fn test_unsupported_node_is_not_openable() {
        let item = NodeItem::new(StructureFamily::Unsupported("table".to_string()));
        let info = NodeInfo::from_item("t", &item);
        assert!(!info.openable);
        assert_eq!(info.summary(), "type: table\nmetadata: {}");
    }
}
