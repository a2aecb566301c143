//! Cache Module
//!
//! Key derivation plus two interchangeable backends behind one contract: a
//! local expiring store (process- or session-scoped) and an adapter over a
//! shared native cache facility.

mod adapter;
mod args;
mod contract;
mod entry;
mod key;
mod segment;
mod session;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use adapter::{validate_key, ApcuCache, NativeCache, DEFAULT_FALLBACK_TTL, RESERVED_KEY_CHARS};
pub use args::{key_list, pair_map};
pub use contract::SimpleCache;
pub use entry::{current_timestamp_ms, ExpiringEntry};
pub use key::{create_key, create_key_array, KeyArg, KEY_DELIMITER};
pub use segment::SharedSegment;
pub use session::{Session, SESSION_SLOT};
pub use stats::CacheStats;
pub use store::{EntryMap, LocalStore};
pub use ttl::Ttl;
