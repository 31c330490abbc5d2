//! Market-data provider configuration constants and types.

/// Configuration for the Yahoo Finance v8 chart endpoint
pub struct ChartEndpoint {
    /// Base URL; the symbol is appended as the final path segment
    pub base_url: &'static str,
    /// Window requested for the daily-bar lookback (Yahoo shorthand)
    pub chart_range: &'static str,
    /// Bar width requested; this tool only ever deals in daily bars
    pub bar_interval: &'static str,
    /// The endpoint rejects clients without a browser-like user agent
    pub user_agent: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// The Master Market-Data Configuration Struct
pub struct MarketConfig {
    /// Index fetched when no `--symbol` override is given
    pub default_symbol: &'static str,
    pub endpoint: ChartEndpoint,
    pub client: ClientDefaults,
    /// Bars needed to derive a previous-session reference (last bar is the
    /// still-forming session, so at least two)
    pub min_bars_required: usize,
    /// Maximum age of a cached snapshot before the API is consulted (seconds)
    pub snapshot_acceptable_age_sec: i64,
}

pub const MARKET: MarketConfig = MarketConfig {
    default_symbol: "^NSEI",
    endpoint: ChartEndpoint {
        base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
        chart_range: "5d",
        bar_interval: "1d",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    },
    client: ClientDefaults { timeout_ms: 5000 },
    min_bars_required: 2,
    // 6 hours (60 * 60 * 6): one morning's worth of restarts
    snapshot_acceptable_age_sec: 21_600,
};
