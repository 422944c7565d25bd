//! Shared Cache Module
//!
//! A cloneable handle that serializes access to one cache behind a single
//! async lock, for callers spread across tasks.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{Cache, CacheStats, Item, Lookup};
use crate::error::Result;

/// Thread-safe handle to a [`Cache`].
///
/// Reads take the write lock too, since a read may expire entries.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<RwLock<Cache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> From<Cache<K, V>> for SharedCache<K, V> {
    fn from(cache: Cache<K, V>) -> Self {
        Self::new(cache)
    }
}

impl<K, V> SharedCache<K, V> {
    /// Wraps a cache for shared access.
    pub fn new(cache: Cache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    pub async fn capacity(&self) -> usize {
        self.inner.read().await.capacity()
    }

    pub async fn set_capacity(&self, capacity: usize) -> Result<()> {
        self.inner.write().await.set_capacity(capacity)
    }

    pub async fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        self.inner.write().await.put(key, value, ttl);
    }

    pub async fn put_many(&self, items: Vec<Item<K, V>>) {
        self.inner.write().await.put_many(items);
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.write().await.get(key)
    }

    pub async fn get_many(&self, keys: &[K]) -> Vec<Lookup<K, V>> {
        self.inner.write().await.get_many(keys)
    }

    pub async fn remove(&self, key: &K) {
        self.inner.write().await.remove(key);
    }

    pub async fn remove_many(&self, keys: &[K]) {
        self.inner.write().await.remove_many(keys);
    }

    pub async fn purge_expired(&self) -> usize {
        self.inner.write().await.purge_expired()
    }

    pub async fn keys(&self) -> Vec<K> {
        self.inner.read().await.keys()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::create_cache;
    use crate::config::CacheOptions;

    fn shared(capacity: usize) -> SharedCache<String, u64> {
        SharedCache::new(create_cache(CacheOptions::with_capacity(capacity)).unwrap())
    }

    #[tokio::test]
    async fn test_shared_put_and_get() {
        let cache = shared(4);

        cache.put("a".to_string(), 1, None).await;

        assert_eq!(cache.get(&"a".to_string()).await, Some(1));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_shared_clones_see_same_cache() {
        let cache = shared(4);
        let other = cache.clone();

        other.put("a".to_string(), 1, None).await;
        cache.remove(&"a".to_string()).await;

        assert!(other.is_empty().await);
    }

    #[tokio::test]
    async fn test_shared_concurrent_writers_respect_capacity() {
        let cache = shared(10);

        let mut handles = Vec::new();
        for task in 0..8u64 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..25u64 {
                    cache.put(format!("{}-{}", task, i), i, None).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 10);
        assert_eq!(cache.stats().await.evictions, 190);
    }

    #[tokio::test]
    async fn test_shared_set_capacity() {
        let cache = shared(4);
        cache
            .put_many(vec![
                Item::new("a".to_string(), 1),
                Item::new("b".to_string(), 2),
                Item::new("c".to_string(), 3),
            ])
            .await;

        cache.set_capacity(1).await.unwrap();

        assert_eq!(cache.capacity().await, 1);
        assert_eq!(cache.keys().await, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_shared_ttl() {
        let cache = shared(4);
        cache
            .put("k".to_string(), 7, Some(Duration::from_millis(10)))
            .await;

        tokio::time::sleep(Duration::from_millis(40)).await;

        let results = cache.get_many(&["k".to_string()]).await;
        assert_eq!(results[0].value, None);
        assert_eq!(cache.purge_expired().await, 0);
        assert!(cache.is_empty().await);
    }
}
