//! File persistence and serialization configuration

use chrono::NaiveDate;

use crate::utils::time_utils;

/// Directory path for storing daily plan records
pub const PLAN_LOG_DIR: &str = "logs";

/// Extension used by plan record files
pub const PLAN_LOG_EXT: &str = "json";

/// Directory path for the market snapshot cache
pub const SNAPSHOT_CACHE_DIR: &str = "market_cache";

/// Current version of the snapshot cache serialization format
pub const SNAPSHOT_CACHE_VERSION: f64 = 1.0;

/// Generate the per-date plan record filename
/// Example: "2026-08-04.json"
pub fn plan_log_filename(date: NaiveDate) -> String {
    format!("{}.{}", time_utils::format_date(date), PLAN_LOG_EXT)
}

/// Generate the symbol-specific snapshot cache filename
/// Example: "snapshot_^NSEI_v1.bin"
pub fn snapshot_cache_filename(symbol: &str) -> String {
    format!("snapshot_{}_v{}.bin", symbol, SNAPSHOT_CACHE_VERSION)
}

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";
