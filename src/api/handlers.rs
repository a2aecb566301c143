//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{
    key_list, pair_map, ApcuCache, KeyArg, LocalStore, SharedSegment, SimpleCache, Ttl,
};
use crate::config::{BackendKind, Config};
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteMultipleRequest, GetMultipleRequest, GetResponse, HasResponse, HealthResponse,
    KeyRequest, KeyResponse, MultipleResponse, SetMultipleRequest, SetRequest, StatsResponse,
    SuccessResponse,
};

/// Cache backend served by the API.
pub type DynCache = Box<dyn SimpleCache<Value> + Send + Sync>;

/// Application state shared across all handlers.
///
/// Contains the cache backend wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache backend
    pub cache: Arc<RwLock<DynCache>>,
    /// Which backend is running
    pub backend: BackendKind,
}

impl AppState {
    /// Creates a new AppState with the given cache backend.
    pub fn new(cache: DynCache, backend: BackendKind) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            backend,
        }
    }

    /// Creates an AppState over a fresh process-scoped local store.
    pub fn local() -> Self {
        Self::new(Box::new(LocalStore::<Value>::new()), BackendKind::Local)
    }

    /// Creates an AppState over the given shared segment.
    pub fn shared(segment: SharedSegment<Value>, default_ttl: u64) -> Self {
        let cache: ApcuCache<Value, _> = ApcuCache::with_default_ttl(segment, default_ttl);
        Self::new(Box::new(cache), BackendKind::Shared)
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        match config.backend {
            BackendKind::Local => Self::local(),
            BackendKind::Shared => Self::shared(SharedSegment::new(), config.default_ttl),
        }
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SuccessResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let mut cache = state.cache.write().await;
    let success = cache.set(&req.key, req.value, req.ttl.map(Ttl::Seconds))?;

    Ok(Json(SuccessResponse::new(success)))
}

/// Handler for GET /get/:key
///
/// Responds with a null value on a miss.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<GetResponse> {
    // Write lock: an expired entry is purged on read
    let mut cache = state.cache.write().await;
    let value = cache.get(&key, Value::Null);

    Json(GetResponse::new(key, value))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<SuccessResponse> {
    let mut cache = state.cache.write().await;
    Json(SuccessResponse::new(cache.delete(&key)))
}

/// Handler for DELETE /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<SuccessResponse> {
    let mut cache = state.cache.write().await;
    Json(SuccessResponse::new(cache.clear()))
}

/// Handler for GET /has/:key
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let cache = state.cache.read().await;
    let exists = cache.has(&key);

    Json(HasResponse::new(key, exists))
}

/// Handler for POST /get-multiple
pub async fn get_multiple_handler(
    State(state): State<AppState>,
    Json(req): Json<GetMultipleRequest>,
) -> Result<Json<MultipleResponse>> {
    let keys = key_list(&req.keys)?;

    let mut cache = state.cache.write().await;
    let values = cache.get_multiple(&keys, req.default);

    Ok(Json(MultipleResponse::new(values)))
}

/// Handler for PUT /set-multiple
pub async fn set_multiple_handler(
    State(state): State<AppState>,
    Json(req): Json<SetMultipleRequest>,
) -> Result<Json<SuccessResponse>> {
    let pairs = pair_map(&req.values)?;

    let mut cache = state.cache.write().await;
    let success = cache.set_multiple(pairs, req.ttl.map(Ttl::Seconds))?;

    Ok(Json(SuccessResponse::new(success)))
}

/// Handler for POST /delete-multiple
pub async fn delete_multiple_handler(
    State(state): State<AppState>,
    Json(req): Json<DeleteMultipleRequest>,
) -> Result<Json<SuccessResponse>> {
    let keys = key_list(&req.keys)?;

    let mut cache = state.cache.write().await;
    Ok(Json(SuccessResponse::new(cache.delete_multiple(&keys))))
}

/// Handler for POST /key
///
/// Derives a cache key from the given arguments without touching the cache.
pub async fn key_handler(Json(req): Json<KeyRequest>) -> Json<KeyResponse> {
    let args: Vec<KeyArg> = req.args.iter().map(KeyArg::from).collect();
    Json(KeyResponse {
        key: crate::cache::create_key(&args),
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(state.backend.to_string(), &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
