//! Cache Item Module
//!
//! Defines stored items with optional absolute expiry, and the per-key
//! result returned by batch reads.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

// == Item ==
/// A key with its value and optional expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item<K, V> {
    /// Key the item is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expiry: Option<u64>,
}

impl<K, V> Item<K, V> {
    // == Constructors ==
    /// Creates an item that never expires.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            expiry: None,
        }
    }

    /// Creates an item that expires `ttl` from now.
    pub fn with_ttl(key: K, value: V, ttl: Duration) -> Self {
        Self {
            key,
            value,
            expiry: Some(expiry_after(ttl)),
        }
    }

    /// Creates an item that expires at the given Unix millisecond timestamp.
    pub fn expiring_at(key: K, value: V, expiry: u64) -> Self {
        Self {
            key,
            value,
            expiry: Some(expiry),
        }
    }

    // == Is Expired ==
    /// Checks whether the item is expired at `now` (Unix milliseconds).
    ///
    /// An item is expired once `now >= expiry`; items without expiry never are.
    pub fn is_expired_at(&self, now: u64) -> bool {
        match self.expiry {
            Some(expiry) => now >= expiry,
            None => false,
        }
    }

    /// Checks whether the item is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        let now = current_timestamp_ms();
        self.expiry.map(|expiry| expiry.saturating_sub(now))
    }
}

// == Lookup ==
/// Result of reading one key: the key and its value, or `None` when the key
/// is missing or expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup<K, V> {
    pub key: K,
    pub value: Option<V>,
}

impl<K, V> Lookup<K, V> {
    pub fn is_hit(&self) -> bool {
        self.value.is_some()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Absolute expiry timestamp `ttl` from now.
///
/// Partial milliseconds round up so a nonzero TTL is never already expired.
/// TTLs beyond the millisecond range saturate at `u64::MAX`.
pub fn expiry_after(ttl: Duration) -> u64 {
    let ttl_ms = u64::try_from(ttl.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX);
    current_timestamp_ms().saturating_add(ttl_ms)
}
