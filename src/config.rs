//! Configuration Module
//!
//! Cache construction options, loadable from environment variables or any
//! serde source.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 50;

// == Store Type ==
/// Backing store implementations selectable by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StoreType {
    /// In-memory associative map
    #[default]
    Map,
}

impl FromStr for StoreType {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "map" => Ok(StoreType::Map),
            other => Err(CacheError::UnsupportedStoreType(other.to_string())),
        }
    }
}

impl TryFrom<String> for StoreType {
    type Error = CacheError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StoreType> for String {
    fn from(value: StoreType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::Map => f.write_str("map"),
        }
    }
}

// == Index Type ==
/// Eviction ordering policies selectable by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndexType {
    /// Strict insertion order
    #[default]
    Fifo,
}

impl FromStr for IndexType {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fifo" => Ok(IndexType::Fifo),
            other => Err(CacheError::UnsupportedIndexType(other.to_string())),
        }
    }
}

impl TryFrom<String> for IndexType {
    type Error = CacheError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<IndexType> for String {
    fn from(value: IndexType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexType::Fifo => f.write_str("fifo"),
        }
    }
}

// == Cache Options ==
/// Cache construction parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheOptions {
    /// Maximum number of live keys
    pub capacity: usize,
    /// Backing store implementation
    pub store_type: StoreType,
    /// Eviction ordering policy
    pub index_type: IndexType,
    /// TTL in milliseconds applied to `put` calls without an explicit TTL
    pub default_ttl_ms: Option<u64>,
}

impl CacheOptions {
    /// Creates options with the given capacity and default everything else.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Loads options from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum live keys (default: 50)
    /// - `CACHE_STORE_TYPE` - Store tag (default: "map")
    /// - `CACHE_INDEX_TYPE` - Index tag (default: "fifo")
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: none)
    ///
    /// Unset variables fall back to defaults; set but invalid ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let capacity = match lookup("CACHE_CAPACITY") {
            Some(raw) => parse_number("CACHE_CAPACITY", &raw)?,
            None => defaults.capacity,
        };
        let store_type = match lookup("CACHE_STORE_TYPE") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.store_type,
        };
        let index_type = match lookup("CACHE_INDEX_TYPE") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.index_type,
        };
        let default_ttl_ms = match lookup("CACHE_DEFAULT_TTL_MS") {
            Some(raw) => Some(parse_number("CACHE_DEFAULT_TTL_MS", &raw)?),
            None => defaults.default_ttl_ms,
        };

        Ok(Self {
            capacity,
            store_type,
            index_type,
            default_ttl_ms,
        })
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            store_type: StoreType::Map,
            index_type: IndexType::Fifo,
            default_ttl_ms: None,
        }
    }
}

fn parse_number<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| CacheError::InvalidConfig(format!("{} is not a valid number: {:?}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_options_default() {
        let options = CacheOptions::default();
        assert_eq!(options.capacity, 50);
        assert_eq!(options.store_type, StoreType::Map);
        assert_eq!(options.index_type, IndexType::Fifo);
        assert_eq!(options.default_ttl_ms, None);
    }

    #[test]
    fn test_options_from_lookup_defaults() {
        let options = CacheOptions::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(options, CacheOptions::default());
    }

    #[test]
    fn test_options_from_lookup_values() {
        let options = CacheOptions::from_lookup(lookup_from(&[
            ("CACHE_CAPACITY", "7"),
            ("CACHE_STORE_TYPE", "map"),
            ("CACHE_INDEX_TYPE", " fifo "),
            ("CACHE_DEFAULT_TTL_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(options.capacity, 7);
        assert_eq!(options.default_ttl_ms, Some(1500));
    }

    #[test]
    fn test_options_from_lookup_unsupported_store() {
        let result = CacheOptions::from_lookup(lookup_from(&[("CACHE_STORE_TYPE", "redux")]));
        assert_eq!(
            result,
            Err(CacheError::UnsupportedStoreType("redux".to_string()))
        );
    }

    #[test]
    fn test_options_from_lookup_unsupported_index() {
        let result = CacheOptions::from_lookup(lookup_from(&[("CACHE_INDEX_TYPE", "lru")]));
        assert_eq!(result, Err(CacheError::UnsupportedIndexType("lru".to_string())));
    }

    #[test]
    fn test_options_from_lookup_bad_number() {
        let result = CacheOptions::from_lookup(lookup_from(&[("CACHE_CAPACITY", "lots")]));
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: CacheOptions = serde_json::from_str(r#"{"capacity": 3}"#).unwrap();
        assert_eq!(options.capacity, 3);
        assert_eq!(options.store_type, StoreType::Map);
        assert_eq!(options.index_type, IndexType::Fifo);
    }

    #[test]
    fn test_options_deserialize_unknown_tag() {
        let result: std::result::Result<CacheOptions, _> =
            serde_json::from_str(r#"{"store_type": "redux"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Unsupported store type: redux"));
    }

    #[test]
    fn test_type_tags_display() {
        assert_eq!(StoreType::Map.to_string(), "map");
        assert_eq!(IndexType::Fifo.to_string(), "fifo");
    }
}
