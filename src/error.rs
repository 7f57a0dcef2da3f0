//! Browser error types
//!
//! `BrowseError` is returned to the immediate caller of a model operation.
//! Contract violations (bad key, bad breadcrumb index, zero page size) each
//! have their own variant so a presentation layer can tell them apart.
//! Remote failures are wrapped transparently.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Not connected to a catalog")]
    NotConnected,

    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Not a container: {0}")]
    NotContainer(String),

    #[error("Index {index} out of range for path of depth {depth}")]
    OutOfBounds { index: usize, depth: usize },

    #[error("Structure family not supported: '{family}' ({key})")]
    UnsupportedType { key: String, family: String },

    #[error("Already at the catalog root")]
    AtRoot,

    #[error("Rows per page must be a positive integer")]
    InvalidPageSize,

    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BrowseError>;

/// A candidate value rejected by a validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
