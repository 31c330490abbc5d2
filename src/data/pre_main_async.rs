// Async code to run in main before egui starts up

use anyhow::Result;

use crate::Cli;
use crate::config::{MARKET, SNAPSHOT_CACHE_VERSION};
use crate::data::market::{
    CreateMarketSnapshot, MarketSnapshot, cached::CachedVersion, cached::check_cache_validity,
    get_market_snapshot_async, yahoo_api::YahooApiVersion,
};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_FETCH_EVENTS;

/// Resolve the provider chain and fetch the session's market snapshot before
/// the GUI starts. If the local cache fails validation the only choice is the
/// live API; otherwise both sources are available and the CLI flag decides
/// which one is tried first.
pub async fn fetch_market_snapshot(
    snapshot_acceptable_age_secs: i64,
    args: &Cli,
) -> Result<(MarketSnapshot, &'static str)> {
    let symbol = args
        .symbol
        .clone()
        .unwrap_or_else(|| MARKET.default_symbol.to_string());

    let providers: Vec<Box<dyn CreateMarketSnapshot>> = {
        let api_first = args.prefer_api;
        match (
            api_first,
            check_cache_validity(snapshot_acceptable_age_secs, SNAPSHOT_CACHE_VERSION, &symbol),
        ) {
            (false, Ok(_)) => vec![Box::new(CachedVersion), Box::new(YahooApiVersion)], // local first
            (true, Ok(_)) => vec![Box::new(YahooApiVersion), Box::new(CachedVersion)], // API first
            (_, Err(e)) => {
                log::warn!("Snapshot cache validation failed: {:#}", e);
                log::warn!("Falling back to the chart API...");
                vec![Box::new(YahooApiVersion)] // API only
            }
        }
    };

    let (snapshot, snapshot_signature) = get_market_snapshot_async(&providers, &symbol).await?;

    #[cfg(debug_assertions)]
    if PRINT_FETCH_EVENTS {
        log::info!(
            "Retrieved {} daily bars for {} using: {}.",
            snapshot.bars.len(),
            snapshot.symbol,
            snapshot_signature
        );
    }

    Ok((snapshot, snapshot_signature))
}
