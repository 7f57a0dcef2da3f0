//! Notification channels
//!
//! Each channel is a [`Signal`] with a fixed payload type. Slots run
//! synchronously, in the order they were connected, every time the signal is
//! emitted.

use std::fmt;
use tracing::trace;

/// Handle returned by [`Signal::connect`], used to disconnect the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

type Slot<T> = Box<dyn FnMut(&T)>;

pub struct Signal<T> {
    name: &'static str,
    slots: Vec<(SlotId, Slot<T>)>,
    next_id: u64,
}

impl<T> Signal<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: Vec::new(),
            next_id: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn connect<F>(&mut self, slot: F) -> SlotId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Returns false if the slot was not connected
    pub fn disconnect(&mut self, id: SlotId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    pub fn emit(&mut self, payload: &T) {
        trace!("emit {} to {} slot(s)", self.name, self.slots.len());
        for (_, slot) in self.slots.iter_mut() {
            slot(payload);
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Payload of the connection-established notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    pub url: String,
    pub api_url: String,
}

/// All notifications raised by a catalog selector
#[derive(Debug)]
pub struct CatalogSignals {
    pub client_connected: Signal<Connected>,
    /// Error message
    pub client_connection_error: Signal<String>,
    /// New node path
    pub table_changed: Signal<Vec<String>>,
    pub url_changed: Signal<()>,
    /// Error message
    pub url_validation_error: Signal<String>,
}

impl CatalogSignals {
    pub fn new() -> Self {
        Self {
            client_connected: Signal::new("client_connected"),
            client_connection_error: Signal::new("client_connection_error"),
            table_changed: Signal::new("table_changed"),
            url_changed: Signal::new("url_changed"),
            url_validation_error: Signal::new("url_validation_error"),
        }
    }
}

impl Default for CatalogSignals {
    fn default() -> Self {
        Self::new()
    }
}
