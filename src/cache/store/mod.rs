//! Store Module
//!
//! A store holds the authoritative item for each key. It knows nothing about
//! eviction order.

mod map;

use std::fmt::Debug;

use crate::cache::Item;

pub use map::MapStore;

// == Store Trait ==
/// Keyed persistence of items.
pub trait Store<K, V>: Debug + Send + Sync {
    /// Inserts `item`, overwriting any item under the same key.
    fn put(&mut self, item: Item<K, V>);

    /// Returns the item stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&Item<K, V>>;

    /// Removes `key`, returning whether it was present.
    fn delete(&mut self, key: &K) -> bool;

    /// Returns the number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every stored key, in no particular order.
    fn keys(&self) -> Vec<K>;
}
