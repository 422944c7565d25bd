//! Map Store Module
//!
//! HashMap-backed store.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::Store;
use crate::cache::Item;

// == Map Store ==
/// In-memory store keyed by a HashMap.
#[derive(Debug, Clone)]
pub struct MapStore<K, V> {
    entries: HashMap<K, Item<K, V>>,
}

impl<K, V> MapStore<K, V> {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Default for MapStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Store<K, V> for MapStore<K, V>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
    V: Debug + Send + Sync,
{
    fn put(&mut self, item: Item<K, V>) {
        self.entries.insert(item.key.clone(), item);
    }

    fn get(&self, key: &K) -> Option<&Item<K, V>> {
        self.entries.get(key)
    }

    fn delete(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }
}
