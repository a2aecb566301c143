//! Batch Argument Module
//!
//! Checks dynamically typed batch arguments before a bulk operation runs.
//! Typed callers pass slices and vectors directly; JSON callers go through
//! these helpers so a non-list key argument fails up front.

use serde_json::Value;

use crate::error::{CacheError, Result};

// == Key List ==
/// Reads a list of keys from a JSON array of strings.
pub fn key_list(keys: &Value) -> Result<Vec<String>> {
    let Value::Array(items) = keys else {
        return Err(CacheError::InvalidArgument(format!(
            "Cache keys must be an array, got {}",
            type_name(keys)
        )));
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(key) => Ok(key.clone()),
            other => Err(CacheError::InvalidArgument(format!(
                "Cache keys must be strings, got {}",
                type_name(other)
            ))),
        })
        .collect()
}

// == Pair Map ==
/// Reads key/value pairs from a JSON object, in document order.
pub fn pair_map(values: &Value) -> Result<Vec<(String, Value)>> {
    match values {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()),
        other => Err(CacheError::InvalidArgument(format!(
            "Cache values must be an object, got {}",
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
