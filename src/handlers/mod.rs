//! Input Handlers
//!
//! - command: line-oriented commands typed by the user
//!
//! Parsing is a pure function; execution drives a `CatalogSelector` and
//! writes what the user should see.

pub mod command;

pub use command::{parse_command, Command, Session};
