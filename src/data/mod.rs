// Market data loading, caching, and the plan record store
pub mod market;
pub mod plan_store;
pub mod pre_main_async;

// Re-export commonly used types
pub use market::MarketSnapshot;
pub use market::cached::write_snapshot_cache_async;
pub use plan_store::PlanStore;
pub use pre_main_async::fetch_market_snapshot;
