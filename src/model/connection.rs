//! Connection Model
//!
//! This sub-model contains the committed url, the in-progress url edit, and
//! the state of the last connection attempt.

use crate::logic::errors::ErrorType;

/// Connection state for the catalog service
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// No connection attempted yet
    Disconnected,
    /// Connected (url the client was built from, API root it reported)
    Connected { url: String, api_url: String },
    /// Last attempt failed; an earlier client may still be in use
    Failed {
        error_type: ErrorType,
        message: String,
    },
}

#[derive(Clone, Debug)]
pub struct ConnectionModel {
    /// Committed url used by the next connection attempt
    pub url: String,

    /// Text typed into the url field, not yet committed
    pub url_buffer: String,

    pub state: ConnectionState,
}

impl ConnectionModel {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            url_buffer: url.to_string(),
            state: ConnectionState::Disconnected,
        }
    }

    /// Replace the committed url (and the buffer). Returns true if it changed.
    pub fn set_url(&mut self, url: &str) -> bool {
        let changed = self.url != url;
        self.url = url.to_string();
        self.url_buffer = url.to_string();
        changed
    }
}

impl Default for ConnectionModel {
    fn default() -> Self {
        Self::new("")
    }
}
