//! Session Module
//!
//! Host-owned session storage that session-scoped stores attach to.

use std::collections::HashMap;

use crate::cache::EntryMap;

// == Constants ==
/// Session slot holding the session-scoped cache entries.
pub const SESSION_SLOT: &str = "simple_cache";

// == Session ==
/// Named slots of cache entries owned by the host for one session.
///
/// The host creates a `Session` per user session and hands it to
/// [`LocalStore::in_session`](crate::cache::LocalStore::in_session). No locking
/// is done here; the host is expected to serve one request per session at a
/// time.
#[derive(Debug)]
pub struct Session<V> {
    /// Session identifier assigned by the host
    id: String,
    slots: HashMap<String, EntryMap<V>>,
}

impl<V> Session<V> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slots: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the entries stored under `name`, creating an empty slot first.
    pub fn slot_mut(&mut self, name: &str) -> &mut EntryMap<V> {
        self.slots.entry(name.to_string()).or_default()
    }

    pub fn slot(&self, name: &str) -> Option<&EntryMap<V>> {
        self.slots.get(name)
    }

    /// Drops a slot and everything cached in it.
    pub fn remove_slot(&mut self, name: &str) -> Option<EntryMap<V>> {
        self.slots.remove(name)
    }
}
