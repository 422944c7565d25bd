//! Eviction Index Module
//!
//! An eviction index tracks which keys are live and in what order they are
//! evicted, independent of the values stored for them.

mod fifo;

use std::fmt::Debug;

pub use fifo::FifoIndex;

// == Eviction Index Trait ==
/// Ordering bookkeeping for live keys.
///
/// The front of the ordering holds the keys least likely to be evicted next,
/// the back holds the next eviction candidates.
pub trait EvictionIndex<K>: Debug + Send + Sync {
    /// Returns the live keys in eviction order, front first.
    fn keys(&self) -> Vec<K>;

    /// Returns the number of live keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notifies the index that `keys` were read.
    fn mark_get(&mut self, keys: &[K]);

    /// Inserts `keys` as the most recently added, preserving their relative order.
    fn add_keys(&mut self, keys: &[K]);

    /// Removes `keys`. Absent keys are ignored.
    fn remove_keys(&mut self, keys: &[K]);

    /// Removes and returns up to `count` keys from the back of the ordering.
    fn remove_last(&mut self, count: usize) -> Vec<K>;
}
