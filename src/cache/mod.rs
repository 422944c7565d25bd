//! Cache Module
//!
//! Provides an in-memory cache with pluggable eviction ordering, pluggable
//! storage and lazy TTL expiration.

mod factory;
mod index;
mod item;
mod orchestrator;
mod stats;
mod store;


// Re-export public types
pub use factory::{build_index, build_store, create_cache};
pub use index::{EvictionIndex, FifoIndex};
pub use item::{current_timestamp_ms, expiry_after, Item, Lookup};
pub use orchestrator::Cache;
pub use stats::CacheStats;
pub use store::{MapStore, Store};
