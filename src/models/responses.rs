//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cache::CacheStats;

/// Response body for GET /get/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    /// The stored value, or null on a miss
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for every write operation
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

/// Response body for GET /has/:key
#[derive(Debug, Clone, Serialize)]
pub struct HasResponse {
    pub key: String,
    pub exists: bool,
}

impl HasResponse {
    pub fn new(key: impl Into<String>, exists: bool) -> Self {
        Self {
            key: key.into(),
            exists,
        }
    }
}

/// Response body for POST /get-multiple
#[derive(Debug, Clone, Serialize)]
pub struct MultipleResponse {
    /// Requested keys in request order
    pub values: Map<String, Value>,
}

impl MultipleResponse {
    pub fn new(pairs: Vec<(String, Value)>) -> Self {
        Self {
            values: pairs.into_iter().collect(),
        }
    }
}

/// Response body for POST /key
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    pub key: String,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Backend name
    pub backend: String,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(backend: impl Into<String>, stats: &CacheStats) -> Self {
        Self {
            backend: backend.into(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("test_key", json!([1, 2]));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"key": "test_key", "value": [1, 2]}));
    }

    #[test]
    fn test_multiple_response_keeps_order() {
        let resp = MultipleResponse::new(vec![
            ("b".to_string(), json!(2)),
            ("a".to_string(), json!(1)),
        ]);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"values":{"b":2,"a":1}}"#);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            expirations: 5,
        };
        let resp = StatsResponse::new("local", &stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.backend, "local");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
