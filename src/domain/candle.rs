use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLC bar as returned by the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl DailyBar {
    // A constructor for convenience
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        DailyBar {
            date,
            open,
            high,
            low,
            close,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        if self.is_bullish() {
            (self.open, self.close)
        } else {
            (self.close, self.open)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(open: f64, close: f64) -> DailyBar {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        DailyBar::new(date, open, 110.0, 90.0, close)
    }

    #[test]
    fn test_body_range_orients_by_direction() {
        assert_eq!(bar(95.0, 105.0).body_range(), (95.0, 105.0));
        assert_eq!(bar(105.0, 95.0).body_range(), (95.0, 105.0));
    }

    #[test]
    fn test_doji_counts_as_bullish() {
        assert!(bar(100.0, 100.0).is_bullish());
    }
}
