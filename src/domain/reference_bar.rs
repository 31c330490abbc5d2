use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DailyBar;
use crate::utils::maths_utils::round2;

/// The previous session's high/low/close, the sole input to the pivot
/// formulas. Values are fixed to 2 decimals when the bar is derived and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBar {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&DailyBar> for ReferenceBar {
    fn from(bar: &DailyBar) -> Self {
        ReferenceBar {
            date: bar.date,
            high: round2(bar.high),
            low: round2(bar.low),
            close: round2(bar.close),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bar_rounds_on_derivation() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let bar = DailyBar::new(date, 18350.0, 18500.456, 18300.004, 18450.118);
        let reference = ReferenceBar::from(&bar);
        assert_eq!(reference.date, date);
        assert_eq!(reference.high, 18500.46);
        assert_eq!(reference.low, 18300.0);
        assert_eq!(reference.close, 18450.12);
    }
}
