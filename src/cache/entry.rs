//! Expiring Entry Module
//!
//! A cached value paired with an optional absolute expiration instant.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::Ttl;

// == Expiring Entry ==
/// Represents a single cache entry with value and expiration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds), None = never expires
    pub expires_at: Option<u64>,
}

impl<V> ExpiringEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    ///
    /// A missing or zero TTL produces an entry that never expires. A past TTL
    /// produces an entry that is already expired.
    pub fn new(value: V, ttl: Option<Ttl>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = match ttl.map(|ttl| ttl.signed_seconds()) {
            None | Some(0) => None,
            Some(secs) if secs < 0 => Some(now),
            Some(secs) => Some(now.saturating_add((secs as u64).saturating_mul(1000))),
        };

        Self { value, expires_at }
    }

    /// Creates an entry that never expires.
    pub fn persistent(value: V) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration
    /// instant, so a TTL that has fully elapsed is never served.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Checks expiration against an explicit Unix-millisecond instant.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
