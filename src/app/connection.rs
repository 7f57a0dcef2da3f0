//! Connection orchestration methods
//!
//! Methods for editing the url and (re)connecting:
//! - Drafting and committing the url through the registered validators
//! - Building a client through the factory
//! - Resetting the view after a new client is in place

use tracing::{debug, error, info};

use super::CatalogSelector;
use crate::logic::errors::{classify_error, format_error_message};
use crate::model::ConnectionState;
use crate::signals::Connected;
use crate::validation::URL_FIELD;

impl CatalogSelector {
    /// Committed url used by `connect`
    pub fn url(&self) -> &str {
        &self.model.connection.url
    }

    /// Text of the url being edited
    pub fn url_buffer(&self) -> &str {
        &self.model.connection.url_buffer
    }

    /// Replace the committed url without validation
    pub fn set_url(&mut self, url: &str) {
        debug!("set_url: {}", url);
        if self.model.connection.set_url(url) {
            self.signals.url_changed.emit(&());
        }
    }

    pub fn set_url_draft(&mut self, text: &str) {
        self.model.connection.url_buffer = text.to_string();
    }

    /// Validate the draft and make it the committed url
    ///
    /// A rejected draft is reported on `url_validation_error`; the draft and
    /// the committed url are left as they were. Returns whether the draft
    /// was committed.
    pub fn commit_url_edit(&mut self) -> bool {
        let candidate = self.model.connection.url_buffer.trim().to_string();
        debug!("commit_url_edit: {}", candidate);

        if let Err(err) = self.validators.validate(URL_FIELD, &candidate) {
            error!("Rejected url {:?}: {}", candidate, err);
            self.signals.url_validation_error.emit(&err.to_string());
            return false;
        }

        self.model.connection.url = candidate.clone();
        self.model.connection.url_buffer = candidate;
        self.signals.url_changed.emit(&());
        true
    }

    /// Build a client for the committed url
    ///
    /// On failure the previous client stays in place and the error is
    /// reported on `client_connection_error`. Returns whether a new client
    /// is now in use.
    pub fn connect(&mut self) -> bool {
        let url = self.model.connection.url.clone();
        debug!("connect: {}", url);

        let client = match (self.factory)(&url) {
            Ok(client) => client,
            Err(err) => {
                let message = format_error_message(&err);
                error!("Failed to connect to {}: {:#}", url, err);
                self.model.connection.state = ConnectionState::Failed {
                    error_type: classify_error(&err),
                    message: message.clone(),
                };
                self.signals.client_connection_error.emit(&message);
                return false;
            }
        };

        let connected = Connected {
            url: client.uri().to_string(),
            api_url: client.api_uri().to_string(),
        };
        info!("Connected to {} (api {})", connected.url, connected.api_url);

        self.client = Some(client);
        self.cache.get_mut().invalidate();
        self.model.connection.state = ConnectionState::Connected {
            url: connected.url.clone(),
            api_url: connected.api_url.clone(),
        };
        self.signals.client_connected.emit(&connected);
        self.reset_client_view();
        true
    }

    /// Back to the root, first page
    pub fn reset_client_view(&mut self) {
        debug!("reset_client_view");
        self.model.navigation.reset();
        if self.client.is_some() {
            self.emit_table_changed();
        }
    }
}
