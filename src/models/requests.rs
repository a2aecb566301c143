//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies. Batch fields are
//! kept as raw JSON and checked by the handlers, so a wrongly shaped batch
//! argument is reported as an invalid argument rather than a parse failure.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for POST /get-multiple
#[derive(Debug, Clone, Deserialize)]
pub struct GetMultipleRequest {
    /// Expected to be an array of strings
    pub keys: Value,
    /// Value returned for missing keys
    #[serde(default)]
    pub default: Value,
}

/// Request body for PUT /set-multiple
#[derive(Debug, Clone, Deserialize)]
pub struct SetMultipleRequest {
    /// Expected to be an object of key/value pairs
    pub values: Value,
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// Request body for POST /delete-multiple
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteMultipleRequest {
    pub keys: Value,
}

/// Request body for POST /key
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    /// Arguments to flatten into a key, nested arrays allowed
    pub args: Vec<Value>,
}
