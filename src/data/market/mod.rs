pub mod cache_file;
pub mod cached;
pub mod yahoo_api;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::MARKET;
use crate::domain::{DailyBar, ReferenceBar};

#[async_trait]
pub trait CreateMarketSnapshot {
    // Either produce a snapshot for the symbol OR return an anyhow::error
    async fn create_snapshot(&self, symbol: &str) -> Result<MarketSnapshot>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_market_snapshot_async(
    implementations: &[Box<dyn CreateMarketSnapshot>],
    symbol: &str,
) -> Result<(MarketSnapshot, &'static str)> {
    for imp in implementations {
        match imp.create_snapshot(symbol).await {
            Ok(snapshot) => {
                let signature = imp.signature();
                return Ok((snapshot, signature));
            }
            Err(e) => {
                log::info!("Market data source '{}' failed: {:#}", imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All market data sources failed for {}", symbol))
}

/// Everything the dashboard needs from the provider for one session: a short
/// window of daily bars, oldest first, most recent last.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub bars: Vec<DailyBar>,
}

impl MarketSnapshot {
    /// The previous session's bar. The last bar is usually the still-forming
    /// current session, so the reference is the second-to-last one.
    pub fn reference_bar(&self) -> Result<ReferenceBar> {
        if self.bars.len() < MARKET.min_bars_required {
            bail!(
                "Need at least {} daily bars for {}, provider returned {}",
                MARKET.min_bars_required,
                self.symbol,
                self.bars.len()
            );
        }
        let bar = &self.bars[self.bars.len() - 2];
        Ok(ReferenceBar::from(bar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64) -> DailyBar {
        let date = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
        DailyBar::new(date, close - 5.0, close + 10.0, close - 10.0, close)
    }

    #[test]
    fn test_reference_is_the_second_to_last_bar() {
        let snapshot = MarketSnapshot {
            symbol: "^NSEI".to_string(),
            bars: vec![bar(1, 18400.0), bar(2, 18450.0), bar(3, 18500.0)],
        };

        let reference = snapshot.reference_bar().unwrap();
        assert_eq!(reference.date, NaiveDate::from_ymd_opt(2026, 8, 2).unwrap());
        assert_eq!(reference.close, 18450.0);
        assert_eq!(reference.high, 18460.0);
        assert_eq!(reference.low, 18440.0);
    }

    #[test]
    fn test_too_few_bars_is_an_error() {
        let snapshot = MarketSnapshot {
            symbol: "^NSEI".to_string(),
            bars: vec![bar(1, 18400.0)],
        };
        assert!(snapshot.reference_bar().is_err());
    }
}
