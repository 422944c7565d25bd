//! Cache Factory Module
//!
//! Maps configuration tags to concrete index and store implementations.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::{Cache, EvictionIndex, FifoIndex, MapStore, Store};
use crate::config::{CacheOptions, IndexType, StoreType};
use crate::error::Result;

/// Builds an empty store for the given tag.
pub fn build_store<K, V>(store_type: StoreType) -> Box<dyn Store<K, V>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    V: Debug + Send + Sync + 'static,
{
    match store_type {
        StoreType::Map => Box::new(MapStore::new()),
    }
}

/// Builds an empty eviction index for the given tag.
pub fn build_index<K>(index_type: IndexType) -> Box<dyn EvictionIndex<K>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    match index_type {
        IndexType::Fifo => Box::new(FifoIndex::new()),
    }
}

// == Create Cache ==
/// Creates a cache from options.
///
/// Fails with `InvalidCapacity` when `options.capacity` is 0. Unknown
/// store/index tags are rejected earlier, when the options are parsed.
///
/// # Example
/// ```
/// use mini_cache::{create_cache, CacheOptions};
///
/// let mut cache = create_cache(CacheOptions::with_capacity(2)).unwrap();
/// cache.put("a", 1, None);
/// assert_eq!(cache.get(&"a"), Some(1));
/// ```
pub fn create_cache<K, V>(options: CacheOptions) -> Result<Cache<K, V>>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    V: Clone + Debug + Send + Sync + 'static,
{
    let store = build_store(options.store_type);
    let index = build_index(options.index_type);
    let cache = Cache::new(options.capacity, index, store)?;

    Ok(cache.with_default_ttl(options.default_ttl_ms.map(Duration::from_millis)))
}
