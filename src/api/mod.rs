//! API Module
//!
//! HTTP handlers and routing exposing the simple-cache contract as JSON.
//!
//! # Endpoints
//! - `PUT /set` - Store a value
//! - `GET /get/:key` - Retrieve a value (null on a miss)
//! - `DELETE /del/:key` - Delete a key
//! - `GET /has/:key` - Check key presence
//! - `DELETE /clear` - Remove every entry
//! - `POST /get-multiple`, `PUT /set-multiple`, `POST /delete-multiple` - Bulk operations
//! - `POST /key` - Derive a cache key from arguments
//! - `GET /stats` - Lookup statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
