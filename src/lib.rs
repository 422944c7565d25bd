//! Mini Cache - An in-process key-value cache
//!
//! Bounded caching with a pluggable eviction index, a pluggable store, batch
//! operations and lazy TTL expiry.
//!
//! ```
//! use mini_cache::{create_cache, CacheOptions, Item};
//!
//! let mut cache = create_cache(CacheOptions::with_capacity(2)).unwrap();
//! cache.put_many(vec![Item::new("a", 1), Item::new("b", 2), Item::new("c", 3)]);
//!
//! assert_eq!(cache.get(&"a"), Some(1));
//! assert_eq!(cache.get(&"c"), None);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;

pub use cache::{create_cache, Cache, CacheStats, EvictionIndex, FifoIndex, Item, Lookup, MapStore, Store};
pub use config::{CacheOptions, IndexType, StoreType};
pub use error::{CacheError, Result};
pub use shared::SharedCache;
