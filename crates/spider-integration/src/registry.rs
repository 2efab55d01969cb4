//! Shared registry of authenticated clients.

use dashmap::DashMap;
use spider_api::ClientHandle;

/// Process-wide mapping from entry identity to its client handle.
///
/// Exactly one handle exists per entry: inserted on successful entry
/// setup, removed on successful unload. Platform handlers look their
/// client up here in between. Setup and unload each touch a distinct key,
/// so the map needs no outer lock.
#[derive(Default)]
pub struct ClientRegistry {
    clients: DashMap<String, ClientHandle>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    /// Drop every stored handle. Called when the process starts over.
    pub fn reset(&self) {
        self.clients.clear();
    }

    /// Store the handle for an entry.
    pub fn insert(&self, entry_id: impl Into<String>, client: ClientHandle) {
        self.clients.insert(entry_id.into(), client);
    }

    /// Remove and return the handle for an entry.
    pub fn remove(&self, entry_id: &str) -> Option<ClientHandle> {
        self.clients.remove(entry_id).map(|(_, client)| client)
    }

    /// Handle for an entry, if it is currently set up.
    pub fn client_for(&self, entry_id: &str) -> Option<ClientHandle> {
        self.clients.get(entry_id).map(|r| r.value().clone())
    }

    /// Check whether an entry has a registered client.
    pub fn contains(&self, entry_id: &str) -> bool {
        self.clients.contains_key(entry_id)
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
