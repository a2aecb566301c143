//! Local Store Module
//!
//! Map-backed cache with lazy TTL expiration. The backing map is either owned
//! by the store (process-scoped) or borrowed from a host session
//! (session-scoped, see [`LocalStore::in_session`]).

use std::borrow::BorrowMut;
use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::debug;

use crate::cache::{CacheStats, ExpiringEntry, Session, SimpleCache, Ttl, SESSION_SLOT};
use crate::error::Result;

/// Mapping from cache key to entry, as held by a store or a session slot.
pub type EntryMap<V> = HashMap<String, ExpiringEntry<V>>;

// == Local Store ==
/// In-memory cache over an [`EntryMap`].
///
/// Values are moved in on `set` and cloned out on `get`, so callers never hold
/// a reference into cached state.
#[derive(Debug)]
pub struct LocalStore<V, M = EntryMap<V>> {
    /// Backing map, owned or borrowed
    entries: M,
    /// Lookup statistics for this store handle
    stats: CacheStats,
    _value: PhantomData<V>,
}

impl<V> LocalStore<V> {
    // == Constructor ==
    /// Creates an empty process-scoped store.
    pub fn new() -> Self {
        Self::with_map(EntryMap::new())
    }
}

impl<V> Default for LocalStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, V> LocalStore<V, &'s mut EntryMap<V>> {
    // == Session Constructor ==
    /// Attaches a store to the cache slot of a host session.
    ///
    /// Entries live in the session, so every store later attached to the same
    /// session sees the mutations made through this one.
    pub fn in_session(session: &'s mut Session<V>) -> Self {
        Self::with_map(session.slot_mut(SESSION_SLOT))
    }
}

impl<V, M> LocalStore<V, M>
where
    M: BorrowMut<EntryMap<V>>,
{
    /// Wraps an existing backing map.
    pub fn with_map(entries: M) -> Self {
        Self {
            entries,
            stats: CacheStats::new(),
            _value: PhantomData,
        }
    }

    fn map(&self) -> &EntryMap<V> {
        self.entries.borrow()
    }

    fn map_mut(&mut self) -> &mut EntryMap<V> {
        self.entries.borrow_mut()
    }

    // == Length ==
    /// Returns the number of physically present entries, expired or not.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Releases the backing map.
    pub fn into_inner(self) -> M {
        self.entries
    }
}

impl<V, M> SimpleCache<V> for LocalStore<V, M>
where
    V: Clone,
    M: BorrowMut<EntryMap<V>>,
{
    // == Get ==
    /// Returns a clone of the stored value, or `default`.
    ///
    /// An expired entry is removed here, on the access that discovers it.
    fn get(&mut self, key: &str, default: V) -> V {
        // Some(None) = present but expired
        let lookup = self
            .map()
            .get(key)
            .map(|entry| (!entry.is_expired()).then(|| entry.value.clone()));

        match lookup {
            Some(Some(value)) => {
                self.stats.record_hit();
                value
            }
            Some(None) => {
                self.map_mut().remove(key);
                self.stats.record_expiration();
                debug!(key, "purged expired entry");
                default
            }
            None => {
                self.stats.record_miss();
                default
            }
        }
    }

    // == Set ==
    /// Stores `value`. A missing or zero TTL never expires; a past TTL removes the key.
    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<bool> {
        if ttl.is_some_and(|ttl| ttl.is_past()) {
            self.map_mut().remove(key);
            return Ok(true);
        }
        let entry = ExpiringEntry::new(value, ttl);
        self.map_mut().insert(key.to_string(), entry);
        Ok(true)
    }

    fn delete(&mut self, key: &str) -> bool {
        self.map_mut().remove(key);
        true
    }

    fn clear(&mut self) -> bool {
        self.map_mut().clear();
        true
    }

    // == Has ==
    /// Reports physical presence only.
    ///
    /// Expiration is not checked: an expired entry that no `get` has purged
    /// yet still counts as present.
    fn has(&self, key: &str) -> bool {
        self.map().contains_key(key)
    }

    fn stats(&self) -> CacheStats {
        self.stats.clone()
    }
}
