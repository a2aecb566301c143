//! Simple Cache - key derivation and interchangeable cache backends
//!
//! Provides a get/set/delete/clear/has contract with bulk variants over a
//! local expiring store and an adapter for a shared native cache segment,
//! plus an HTTP surface serving either backend.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{ApcuCache, LocalStore, Session, SimpleCache, Ttl};
pub use config::Config;
pub use error::{CacheError, Result};
