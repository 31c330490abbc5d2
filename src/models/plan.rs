//! The persisted daily plan record: computed levels + checklist + notes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::models::PivotLevels;

/// The seven pre-market checks, in display order. The set is fixed, not
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ChecklistItem {
    GlobalSentiment,
    EconomicEvents,
    PreviousLevels,
    PivotMarked,
    VwapPlotted,
    BiasMade,
    TradePlanned,
}

impl ChecklistItem {
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistItem::GlobalSentiment => "Global market sentiment checked",
            ChecklistItem::EconomicEvents => "Key economic events reviewed",
            ChecklistItem::PreviousLevels => "Previous day's high/low plotted",
            ChecklistItem::PivotMarked => "Pivot points & CPR marked",
            ChecklistItem::VwapPlotted => "VWAP plotted on chart",
            ChecklistItem::BiasMade => "Bias (bullish/bearish/neutral) identified",
            ChecklistItem::TradePlanned => "Trade plan finalized",
        }
    }
}

/// Named boolean flags, one field per flag so the log files stay readable
/// (and greppable) as plain JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    #[serde(default)]
    pub global_sentiment: bool,
    #[serde(default)]
    pub economic_events: bool,
    #[serde(default)]
    pub previous_levels: bool,
    #[serde(default)]
    pub pivot_marked: bool,
    #[serde(default)]
    pub vwap_plotted: bool,
    #[serde(default)]
    pub bias_made: bool,
    #[serde(default)]
    pub trade_planned: bool,
}

impl Checklist {
    pub fn flag(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::GlobalSentiment => self.global_sentiment,
            ChecklistItem::EconomicEvents => self.economic_events,
            ChecklistItem::PreviousLevels => self.previous_levels,
            ChecklistItem::PivotMarked => self.pivot_marked,
            ChecklistItem::VwapPlotted => self.vwap_plotted,
            ChecklistItem::BiasMade => self.bias_made,
            ChecklistItem::TradePlanned => self.trade_planned,
        }
    }

    pub fn flag_mut(&mut self, item: ChecklistItem) -> &mut bool {
        match item {
            ChecklistItem::GlobalSentiment => &mut self.global_sentiment,
            ChecklistItem::EconomicEvents => &mut self.economic_events,
            ChecklistItem::PreviousLevels => &mut self.previous_levels,
            ChecklistItem::PivotMarked => &mut self.pivot_marked,
            ChecklistItem::VwapPlotted => &mut self.vwap_plotted,
            ChecklistItem::BiasMade => &mut self.bias_made,
            ChecklistItem::TradePlanned => &mut self.trade_planned,
        }
    }

    pub fn completed_count(&self) -> usize {
        use strum::IntoEnumIterator;
        ChecklistItem::iter().filter(|item| self.flag(*item)).count()
    }

    pub fn total_count() -> usize {
        use strum::IntoEnumIterator;
        ChecklistItem::iter().count()
    }
}

/// One day's saved trade plan. The date is the natural key in the store; a
/// later save for the same date overwrites the earlier record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub pivots: PivotLevels,
    pub checklist: Checklist,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_flag_accessors_cover_every_item() {
        let mut checklist = Checklist::default();
        assert_eq!(checklist.completed_count(), 0);

        for item in ChecklistItem::iter() {
            assert!(!checklist.flag(item));
            *checklist.flag_mut(item) = true;
            assert!(checklist.flag(item));
        }
        assert_eq!(checklist.completed_count(), Checklist::total_count());
        assert_eq!(Checklist::total_count(), 7);
    }

    #[test]
    fn test_plan_serializes_to_the_log_file_shape() {
        let plan = DailyPlan {
            date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            pivots: PivotLevels::from_hlc(18500.0, 18300.0, 18450.0),
            checklist: Checklist {
                pivot_marked: true,
                ..Checklist::default()
            },
            notes: "Wait for the first 15m candle.".to_string(),
        };

        let value: serde_json::Value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["date"], "2026-08-04");
        assert_eq!(value["pivots"]["central_pivot"], 18416.67);
        assert_eq!(value["pivots"]["r3"], 18733.34);
        assert_eq!(value["checklist"]["pivot_marked"], true);
        assert_eq!(value["checklist"]["vwap_plotted"], false);
        assert_eq!(value["notes"], "Wait for the first 15m candle.");

        let restored: DailyPlan = serde_json::from_value(value).unwrap();
        assert_eq!(restored, plan);
    }
}
