//! External Cache Adapter Module
//!
//! Forwards the simple-cache contract to a native cache facility (APCu-style
//! shared memory). The adapter only normalizes TTL arguments and validates
//! keys; storage and expiry belong to the facility.

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::debug;

use crate::cache::{CacheStats, SimpleCache, Ttl};
use crate::error::{CacheError, Result};

// == Constants ==
/// TTL applied when a caller does not pass one: one day.
pub const DEFAULT_FALLBACK_TTL: u64 = 86_400;

/// Characters the facility reserves and refuses in keys.
pub const RESERVED_KEY_CHARS: [char; 8] = ['{', '}', '(', ')', '/', '\\', '@', ':'];

// == Native Cache ==
/// Operations offered by a native cache facility.
///
/// A TTL of zero seconds means "no expiry". The bulk operations default to
/// loops over the single-key ones; facilities with native batch calls
/// override them.
pub trait NativeCache<V> {
    /// Returns the stored value, or `None` when the key is not found.
    fn fetch(&self, key: &str) -> Option<V>;

    fn store(&self, key: &str, value: V, ttl_secs: u64) -> bool;

    /// Returns false when nothing was deleted.
    fn delete(&self, key: &str) -> bool;

    fn clear_all(&self) -> bool;

    fn exists(&self, key: &str) -> bool;

    /// Fetches every key, returning only the ones found.
    fn fetch_many(&self, keys: &[String]) -> Vec<(String, V)> {
        keys.iter()
            .filter_map(|key| self.fetch(key).map(|value| (key.clone(), value)))
            .collect()
    }

    /// Stores every pair. Returns the keys that failed.
    fn store_many(&self, pairs: Vec<(String, V)>, ttl_secs: u64) -> Vec<String> {
        pairs
            .into_iter()
            .filter_map(|(key, value)| (!self.store(&key, value, ttl_secs)).then_some(key))
            .collect()
    }

    /// Deletes every key. Returns the keys that failed.
    fn delete_many(&self, keys: &[String]) -> Vec<String> {
        keys.iter()
            .filter(|key| !self.delete(key))
            .cloned()
            .collect()
    }
}

// == Key Validation ==
/// Rejects keys containing any of [`RESERVED_KEY_CHARS`], naming the first one found.
pub fn validate_key(key: &str) -> Result<()> {
    match key.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
        Some(c) => Err(CacheError::InvalidArgument(format!(
            "Key '{}' contains reserved character '{}'",
            key, c
        ))),
        None => Ok(()),
    }
}

// == Apcu Cache ==
/// Simple-cache adapter over a [`NativeCache`] facility.
#[derive(Debug, Clone)]
pub struct ApcuCache<V, N> {
    native: N,
    /// TTL in seconds used when a call passes none
    default_ttl: u64,
    stats: CacheStats,
    _value: PhantomData<V>,
}

impl<V, N> ApcuCache<V, N>
where
    N: NativeCache<V>,
{
    /// Wraps `native` with the one-day fallback TTL.
    pub fn new(native: N) -> Self {
        Self::with_default_ttl(native, DEFAULT_FALLBACK_TTL)
    }

    pub fn with_default_ttl(native: N, default_ttl: u64) -> Self {
        Self {
            native,
            default_ttl,
            stats: CacheStats::new(),
            _value: PhantomData,
        }
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    /// Resolves a call's TTL argument into seconds for the facility.
    fn resolve_ttl(&self, ttl: Option<Ttl>) -> u64 {
        ttl.map_or(self.default_ttl, |ttl| ttl.as_seconds())
    }
}

impl<V, N> SimpleCache<V> for ApcuCache<V, N>
where
    V: Clone,
    N: NativeCache<V>,
{
    fn get(&mut self, key: &str, default: V) -> V {
        match self.native.fetch(key) {
            Some(value) => {
                self.stats.record_hit();
                value
            }
            None => {
                self.stats.record_miss();
                default
            }
        }
    }

    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<bool> {
        if let Err(err) = validate_key(key) {
            debug!(key, "rejected key with reserved character");
            return Err(err);
        }
        if ttl.is_some_and(|ttl| ttl.is_past()) {
            return Ok(self.delete(key));
        }
        Ok(self.native.store(key, value, self.resolve_ttl(ttl)))
    }

    /// Succeeds when the key is gone afterwards, whether or not it existed.
    fn delete(&mut self, key: &str) -> bool {
        self.native.delete(key) || !self.native.exists(key)
    }

    fn clear(&mut self) -> bool {
        self.native.clear_all()
    }

    fn has(&self, key: &str) -> bool {
        self.native.exists(key)
    }

    fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Bulk Operations ==
    fn get_multiple(&mut self, keys: &[String], default: V) -> Vec<(String, V)> {
        let found: HashMap<String, V> = self.native.fetch_many(keys).into_iter().collect();

        keys.iter()
            .map(|key| {
                let value = match found.get(key).cloned() {
                    Some(value) => {
                        self.stats.record_hit();
                        value
                    }
                    None => {
                        self.stats.record_miss();
                        default.clone()
                    }
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Validates every key before anything is stored.
    fn set_multiple(&mut self, pairs: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<bool> {
        for (key, _) in &pairs {
            validate_key(key)?;
        }
        if ttl.is_some_and(|ttl| ttl.is_past()) {
            let keys: Vec<String> = pairs.into_iter().map(|(key, _)| key).collect();
            return Ok(self.delete_multiple(&keys));
        }
        let failed = self.native.store_many(pairs, self.resolve_ttl(ttl));
        Ok(failed.is_empty())
    }

    fn delete_multiple(&mut self, keys: &[String]) -> bool {
        self.native
            .delete_many(keys)
            .iter()
            .all(|key| !self.native.exists(key))
    }
}
