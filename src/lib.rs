#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{MarketSnapshot, PlanStore, fetch_market_snapshot};
pub use domain::{DailyBar, ReferenceBar};
pub use models::{DailyPlan, PivotLevels};
pub use ui::PivotPlannerApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the chart API as primary source instead of the local cache
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,

    /// Index symbol to plan against (defaults to the configured index)
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    snapshot: anyhow::Result<(MarketSnapshot, &'static str)>,
) -> Box<dyn eframe::App> {
    Box::new(PivotPlannerApp::new(cc, snapshot))
}
