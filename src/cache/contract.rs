//! Simple Cache Contract
//!
//! The operation surface shared by every backend: single-key get/set/delete,
//! existence checks, a full clear, and bulk variants of each.

use crate::cache::{CacheStats, Ttl};
use crate::error::Result;

// == Simple Cache ==
/// Common get/set/delete/clear/has contract with bulk variants.
///
/// Missing and expired keys are not errors: `get` hands back the caller's
/// default. The only failure is [`CacheError::InvalidArgument`], raised by
/// backends that restrict key characters.
///
/// Bulk operations default to looping over the single-key operations in
/// input order.
///
/// [`CacheError::InvalidArgument`]: crate::error::CacheError::InvalidArgument
pub trait SimpleCache<V> {
    /// Returns the value stored under `key`, or `default` on a miss.
    fn get(&mut self, key: &str, default: V) -> V;

    /// Stores `value` under `key`. `None` uses the backend's default TTL.
    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<bool>;

    /// Removes `key`. Deleting a missing key still succeeds.
    fn delete(&mut self, key: &str) -> bool;

    /// Removes every entry.
    fn clear(&mut self) -> bool;

    /// Reports whether `key` is present.
    fn has(&self, key: &str) -> bool;

    /// Lookup counters for this backend.
    fn stats(&self) -> CacheStats;

    // == Bulk Operations ==
    /// Looks up every key in order; misses yield a clone of `default`.
    fn get_multiple(&mut self, keys: &[String], default: V) -> Vec<(String, V)>
    where
        V: Clone,
    {
        keys.iter()
            .map(|key| (key.clone(), self.get(key, default.clone())))
            .collect()
    }

    /// Stores every pair in order with the same TTL.
    fn set_multiple(&mut self, pairs: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<bool> {
        let mut success = true;
        for (key, value) in pairs {
            success &= self.set(&key, value, ttl)?;
        }
        Ok(success)
    }

    /// Deletes every key in order.
    fn delete_multiple(&mut self, keys: &[String]) -> bool {
        keys.iter().fold(true, |ok, key| self.delete(key) && ok)
    }
}
