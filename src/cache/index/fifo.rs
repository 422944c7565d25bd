//! FIFO Index Module
//!
//! Implements insertion-order tracking for cache eviction.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::EvictionIndex;

// == FIFO Index ==
/// Tracks insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently inserted
/// - Back = Next to be evicted
///
/// Reads never change the order.
#[derive(Debug, Clone)]
pub struct FifoIndex<K> {
    /// Order of keys by insertion time
    order: VecDeque<K>,
}

impl<K> FifoIndex<K> {
    // == Constructor ==
    /// Creates a new empty FIFO index.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K> Default for FifoIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FifoIndex<K>
where
    K: Eq + Hash,
{
    fn retain_absent(&mut self, keys: &[K]) {
        if keys.is_empty() {
            return;
        }
        let doomed: HashSet<&K> = keys.iter().collect();
        self.order.retain(|k| !doomed.contains(k));
    }
}

impl<K> EvictionIndex<K> for FifoIndex<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug + Send + Sync,
{
    fn keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    // Insertion order is the only thing FIFO cares about.
    fn mark_get(&mut self, _keys: &[K]) {}

    // == Add Keys ==
    /// Pushes the batch onto the front, first key of the batch frontmost.
    ///
    /// Keys already tracked are moved rather than duplicated.
    fn add_keys(&mut self, keys: &[K]) {
        self.retain_absent(keys);

        let mut seen = HashSet::with_capacity(keys.len());
        let batch: Vec<&K> = keys.iter().filter(|k| seen.insert(*k)).collect();

        for key in batch.into_iter().rev() {
            self.order.push_front(key.clone());
        }
    }

    fn remove_keys(&mut self, keys: &[K]) {
        self.retain_absent(keys);
    }

    // == Remove Last ==
    /// Splits off the back `count` keys, returned in index order.
    fn remove_last(&mut self, count: usize) -> Vec<K> {
        let count = count.min(self.order.len());
        let at = self.order.len() - count;
        self.order.split_off(at).into_iter().collect()
    }
}
