//! Configuration module for the pivot planner application.

pub mod debug;
pub mod market;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use market::MARKET;
pub use persistence::{
    APP_STATE_PATH, PLAN_LOG_DIR, PLAN_LOG_EXT, SNAPSHOT_CACHE_DIR, SNAPSHOT_CACHE_VERSION,
    plan_log_filename, snapshot_cache_filename,
};
pub use plot::PLOT_CONFIG;
