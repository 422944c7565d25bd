//! Cache Orchestrator Module
//!
//! Main cache engine composing an eviction index with a store, enforcing the
//! capacity bound and lazily expiring items on read.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{current_timestamp_ms, CacheStats, EvictionIndex, Item, Lookup, Store};
use crate::error::{CacheError, Result};

// == Cache ==
/// Capacity-bounded cache over a pluggable index and store.
///
/// Every key listed by the index has an item in the store and vice versa;
/// each mutating operation restores that before returning.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Eviction ordering of live keys
    index: Box<dyn EvictionIndex<K>>,
    /// Key to item storage
    store: Box<dyn Store<K, V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of live keys
    capacity: usize,
    /// TTL applied by `put` when the caller gives none
    default_ttl: Option<Duration>,
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new cache over the given collaborators.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live keys, at least 1
    /// * `index` - Eviction ordering policy, expected empty
    /// * `store` - Backing store, expected empty
    pub fn new(
        capacity: usize,
        index: Box<dyn EvictionIndex<K>>,
        store: Box<dyn Store<K, V>>,
    ) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            index,
            store,
            stats: CacheStats::new(),
            capacity,
            default_ttl: None,
        })
    }

    /// Sets the TTL used by [`Cache::put`] calls that pass none.
    pub fn with_default_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.default_ttl = ttl;
        self
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest keys if the cache now holds too many.
    ///
    /// A capacity of 0 is rejected and leaves the cache untouched.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        validate_capacity(capacity)?;
        debug!("Capacity changed from {} to {}", self.capacity, capacity);
        self.capacity = capacity;

        let overflow = self.index.len().saturating_sub(capacity);
        self.evict(overflow);
        Ok(())
    }

    // == Put ==
    /// Stores a single value.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (falls back to the default TTL, if configured)
    pub fn put(&mut self, key: K, value: V, ttl: Option<Duration>) {
        let item = match ttl.or(self.default_ttl) {
            Some(ttl) => Item::with_ttl(key, value, ttl),
            None => Item::new(key, value),
        };
        self.put_many(vec![item]);
    }

    // == Put Many ==
    /// Stores a batch of items.
    ///
    /// Only the first `capacity` items are kept; the rest are dropped without
    /// touching the cache. Room is made by evicting the oldest keys before
    /// anything is written, so the live set never exceeds capacity. Keys
    /// already live are re-inserted as the newest.
    pub fn put_many(&mut self, mut items: Vec<Item<K, V>>) {
        if items.is_empty() {
            return;
        }

        if items.len() > self.capacity {
            trace!(
                "Dropping {} items beyond capacity {}",
                items.len() - self.capacity,
                self.capacity
            );
            items.truncate(self.capacity);
        }

        let keys: Vec<K> = items.iter().map(|item| item.key.clone()).collect();
        let incoming = keys.iter().collect::<HashSet<_>>().len();

        // Re-put keys lose their old position and must not count twice.
        self.index.remove_keys(&keys);

        let overflow = (self.index.len() + incoming).saturating_sub(self.capacity);
        self.evict(overflow);

        trace!("Writing {} items", items.len());
        for item in items {
            self.store.put(item);
        }
        self.index.add_keys(&keys);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None if the key is missing or expired.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_many(slice::from_ref(key))
            .pop()
            .and_then(|lookup| lookup.value)
    }

    // == Get Many ==
    /// Retrieves a batch of keys, one result per requested key, in request order.
    ///
    /// Expired items read as absent and are removed from the cache once the
    /// whole batch has been resolved.
    pub fn get_many(&mut self, keys: &[K]) -> Vec<Lookup<K, V>> {
        self.index.mark_get(keys);

        let now = current_timestamp_ms();
        let mut expired = Vec::new();
        let mut results = Vec::with_capacity(keys.len());

        for key in keys {
            let value = match self.store.get(key) {
                Some(item) if item.is_expired_at(now) => {
                    expired.push(key.clone());
                    None
                }
                Some(item) => Some(item.value.clone()),
                None => None,
            };

            if value.is_some() {
                self.stats.record_hit();
            } else {
                self.stats.record_miss();
            }

            results.push(Lookup {
                key: key.clone(),
                value,
            });
        }

        if !expired.is_empty() {
            let removed = self.delete(&expired);
            debug!("Expired {} keys on read", removed);
            self.stats.record_expirations(removed);
        }

        results
    }

    // == Remove ==
    /// Removes a key. Absent keys are ignored.
    pub fn remove(&mut self, key: &K) {
        self.remove_many(slice::from_ref(key));
    }

    /// Removes a batch of keys. Absent keys are ignored.
    pub fn remove_many(&mut self, keys: &[K]) {
        self.delete(keys);
    }

    // == Purge Expired ==
    /// Removes every expired item now rather than waiting for it to be read.
    ///
    /// Returns the number of items removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired: Vec<K> = self
            .store
            .keys()
            .into_iter()
            .filter(|key| {
                self.store
                    .get(key)
                    .is_some_and(|item| item.is_expired_at(now))
            })
            .collect();

        if expired.is_empty() {
            return 0;
        }

        let removed = self.delete(&expired);
        debug!("Purged {} expired keys", removed);
        self.stats.record_expirations(removed);
        removed
    }

    // == Introspection ==
    /// Returns the live keys in eviction order, newest first.
    ///
    /// Expired keys that have not been read yet are still listed.
    pub fn keys(&self) -> Vec<K> {
        self.index.keys()
    }

    /// Returns the number of live keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }

    #[cfg(test)]
    pub(crate) fn stored_keys(&self) -> Vec<K> {
        self.store.keys()
    }

    // == Internal Helpers ==
    /// Evicts `count` keys from the back of the index and drops their items.
    fn evict(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let evicted = self.index.remove_last(count);
        for key in &evicted {
            self.store.delete(key);
        }
        debug!("Evicted {} keys to stay within capacity {}", evicted.len(), self.capacity);
        self.stats.record_evictions(evicted.len());
    }

    /// Removes keys from the index, then from the store.
    ///
    /// Returns how many items the store actually held.
    fn delete(&mut self, keys: &[K]) -> usize {
        self.index.remove_keys(keys);
        keys.iter().filter(|key| self.store.delete(key)).count()
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(CacheError::InvalidCapacity(capacity));
    }
    Ok(())
}
