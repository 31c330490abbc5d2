#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use pivot_planner::config::{APP_STATE_PATH, MARKET};
use pivot_planner::data::write_snapshot_cache_async;
use pivot_planner::ui::config::UI_TEXT;
use pivot_planner::{Cli, fetch_market_snapshot, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let snapshot =
        rt.block_on(fetch_market_snapshot(MARKET.snapshot_acceptable_age_sec, &args));

    // D. Background Cache Write (fresh API data only)
    if let Ok((snapshot, snapshot_signature)) = &snapshot {
        let cache_data = snapshot.clone();
        let signature = *snapshot_signature;
        rt.spawn(async move {
            if let Err(e) = write_snapshot_cache_async(signature, cache_data).await {
                log::error!("Failed to write snapshot cache: {:#}", e);
            }
        });
    }

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, snapshot))),
    )
}
