//! Local snapshot cache: validity check, write path, and the cached provider.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::config::SNAPSHOT_CACHE_VERSION;
use crate::data::market::{CreateMarketSnapshot, MarketSnapshot, cache_file::SnapshotCacheFile};
use crate::utils::time_utils::how_many_seconds_ago;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SERDE;

pub fn check_cache_validity(
    recency_required_secs: i64,
    version_required: f64,
    symbol: &str,
) -> Result<()> {
    let full_path = SnapshotCacheFile::default_cache_path(symbol);

    #[cfg(debug_assertions)]
    if PRINT_SERDE {
        log::info!("Checking validity of snapshot cache at {:?}...", full_path);
    }
    let cache = SnapshotCacheFile::load_from_path(&full_path)?;

    // Check version
    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }

    // Check symbol matches
    if cache.symbol != symbol {
        bail!(
            "Cache symbol mismatch: file holds {}, expected {}",
            cache.symbol,
            symbol
        );
    }

    // Check recency
    let seconds_ago = how_many_seconds_ago(cache.timestamp_ms);
    if seconds_ago > recency_required_secs {
        bail!(
            "Cache too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            recency_required_secs
        );
    }

    #[cfg(debug_assertions)]
    if PRINT_SERDE {
        log::info!(
            "Cache valid: v{}, {}s old (limit {}s), symbol {}",
            cache.version,
            seconds_ago,
            recency_required_secs,
            cache.symbol
        );
    }

    Ok(())
}

/// Write a snapshot to the binary cache file. Only fresh API data is worth
/// caching; snapshots that were themselves read from the cache are skipped.
pub fn write_snapshot_cache_locally(
    snapshot_signature: &'static str,
    snapshot: &MarketSnapshot,
) -> Result<()> {
    if snapshot_signature != "Yahoo Finance API" {
        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!("Skipping cache write (data not from the live API)");
        }
        return Ok(());
    }

    let full_path = SnapshotCacheFile::default_cache_path(&snapshot.symbol);

    #[cfg(debug_assertions)]
    if PRINT_SERDE {
        log::info!("Writing snapshot cache to disk: {:?}...", full_path);
    }

    let cache = SnapshotCacheFile::new(snapshot.clone(), SNAPSHOT_CACHE_VERSION);
    cache.save_to_path(&full_path)?;

    #[cfg(debug_assertions)]
    if PRINT_SERDE {
        log::info!("Snapshot cache written: {:?}", full_path);
    }

    Ok(())
}

/// Async wrapper for write_snapshot_cache_locally
/// Spawns a blocking task so the write never holds up the UI
pub async fn write_snapshot_cache_async(
    snapshot_signature: &'static str,
    snapshot: MarketSnapshot,
) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        write_snapshot_cache_locally(snapshot_signature, &snapshot)
    })
    .await
    .context("Cache write task panicked")?
}

pub struct CachedVersion;

#[async_trait]
impl CreateMarketSnapshot for CachedVersion {
    fn signature(&self) -> &'static str {
        "Local Cache"
    }

    async fn create_snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        let full_path: PathBuf = SnapshotCacheFile::default_cache_path(symbol);

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!("Reading snapshot cache from: {:?}...", full_path);
        }

        let cache = tokio::task::spawn_blocking(move || SnapshotCacheFile::load_from_path(&full_path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load cache file")?;

        if cache.symbol != symbol {
            bail!(
                "Cache symbol mismatch: file holds {}, expected {}",
                cache.symbol,
                symbol
            );
        }

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!("Cache loaded: {} bars for {}", cache.data.bars.len(), cache.symbol);
        }

        Ok(cache.data)
    }
}
