//! Shared Segment Module
//!
//! A process-wide native cache facility. Cloned handles share one segment,
//! the way every worker of a host process shares one opcode-cache segment.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::{ExpiringEntry, NativeCache, Ttl};

// == Shared Segment ==
/// Thread-safe key/value segment with per-entry TTL in seconds.
///
/// Expired entries are dropped when a fetch or existence check finds them.
#[derive(Debug)]
pub struct SharedSegment<V> {
    entries: Arc<RwLock<HashMap<String, ExpiringEntry<V>>>>,
}

impl<V> SharedSegment<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of entries in the segment, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes `key` if it is present but expired. Returns true if it was dropped.
    fn drop_if_expired(&self, key: &str) -> bool {
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                true
            }
            _ => false,
        }
    }
}

impl<V> Clone for SharedSegment<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<V> Default for SharedSegment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> NativeCache<V> for SharedSegment<V> {
    fn fetch(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                None => return None,
                Some(_) => {}
            }
        }
        self.drop_if_expired(key);
        None
    }

    /// Zero seconds stores the value without expiry.
    fn store(&self, key: &str, value: V, ttl_secs: u64) -> bool {
        let entry = ExpiringEntry::new(value, Some(Ttl::Seconds(ttl_secs)));
        self.entries.write().insert(key.to_string(), entry);
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    fn clear_all(&self) -> bool {
        self.entries.write().clear();
        true
    }

    fn exists(&self, key: &str) -> bool {
        let present = self.entries.read().contains_key(key);
        present && !self.drop_if_expired(key)
    }
}
