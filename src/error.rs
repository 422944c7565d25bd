//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Missing or expired keys
//! are never errors; reads report them as `None`.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Store backend tag that no implementation exists for
    #[error("Unsupported store type: {0}")]
    UnsupportedStoreType(String),

    /// Index policy tag that no implementation exists for
    #[error("Unsupported index type: {0}")]
    UnsupportedIndexType(String),

    /// Capacity must be a positive integer
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
