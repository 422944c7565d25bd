//! Mini Cache demo
//!
//! Walks through batch insert, removal and batch read against a cache built
//! from environment configuration, printing results as JSON.

use anyhow::Context;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::{create_cache, CacheOptions, Item};

#[derive(Debug, Clone, Serialize)]
struct Data {
    id: String,
    count: u32,
    selected: bool,
}

impl Data {
    fn new(id: &str, count: u32, selected: bool) -> Self {
        Self {
            id: id.to_string(),
            count,
            selected,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = CacheOptions::from_env().context("Failed to load cache options")?;
    info!(
        "Configuration loaded: capacity={}, store={}, index={}, default_ttl_ms={:?}",
        options.capacity, options.store_type, options.index_type, options.default_ttl_ms
    );

    let mut cache = create_cache::<String, Data>(options).context("Failed to create cache")?;

    cache.put_many(vec![
        Item::new("asdf".to_string(), Data::new("asdf", 1, true)),
        Item::new("qwer".to_string(), Data::new("qwer", 2, true)),
        Item::new("zxcv".to_string(), Data::new("zxcv", 3, false)),
    ]);
    info!("Inserted batch, live keys: {:?}", cache.keys());

    cache.remove(&"qwer".to_string());
    info!("Removed qwer, live keys: {:?}", cache.keys());

    let results = cache.get_many(&[
        "asdf".to_string(),
        "qwer".to_string(),
        "zxcv".to_string(),
    ]);

    println!("{}", serde_json::to_string_pretty(&results)?);
    println!("{}", serde_json::to_string_pretty(&cache.stats())?);

    Ok(())
}
