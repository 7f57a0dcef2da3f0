//! Business Logic
//!
//! Pure functions that can be unit tested without a catalog:
//! - breadcrumb: Breadcrumb labels and truncation
//! - errors: Connection error classification and messages
//! - formatting: Location labels, shapes and metadata display
//! - navigation: Page counts, clamping and page movement
//! - path: Node path helpers
//! - url: URL splitting and validators

pub mod breadcrumb;
pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod path;
pub mod url;
