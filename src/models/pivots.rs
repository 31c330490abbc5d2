//! Classical floor-trader pivot points and the Central Pivot Range.

use serde::{Deserialize, Serialize};

use crate::domain::ReferenceBar;
use crate::utils::maths_utils::round2;

/// CPR width (%) below which a trend day becomes likely.
pub const NARROW_CPR_THRESHOLD_PCT: f64 = 0.3;

/// CPR width (%) above which a range-bound day becomes likely.
pub const WIDE_CPR_THRESHOLD_PCT: f64 = 0.6;

/// The full level set derived from one reference bar. Every value is a
/// deterministic function of (high, low, close) alone, rounded to 2 decimals
/// at each step (ties half away from zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub central_pivot: f64,
    pub upper_boundary: f64,
    pub lower_boundary: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    /// Width from the central pivot up to the upper boundary, as % of the pivot
    pub ub_pct: f64,
    /// Width from the central pivot down to the lower boundary, as % of the pivot
    pub lb_pct: f64,
}

impl PivotLevels {
    /// Derive the level set. Caller guarantees high >= low > 0; this is a
    /// documented precondition, not an enforced contract.
    pub fn from_hlc(high: f64, low: f64, close: f64) -> Self {
        let range = high - low;

        let cp = round2((high + low + close) / 3.0);
        let r1 = round2(2.0 * cp - low);
        let r2 = round2(cp + range);
        let r3 = round2(r1 + range);
        let s1 = round2(2.0 * cp - high);
        let s2 = round2(cp - range);
        let s3 = round2(s1 - range);

        let lb = round2((high + low) / 2.0);
        let ub = round2(cp + (cp - lb));

        let ub_pct = round2(((ub - cp) / cp) * 100.0);
        let lb_pct = round2(((cp - lb) / cp) * 100.0);

        PivotLevels {
            central_pivot: cp,
            upper_boundary: ub,
            lower_boundary: lb,
            r1,
            r2,
            r3,
            s1,
            s2,
            s3,
            ub_pct,
            lb_pct,
        }
    }

    pub fn from_reference(reference: &ReferenceBar) -> Self {
        Self::from_hlc(reference.high, reference.low, reference.close)
    }

    pub fn bias(&self) -> CprBias {
        CprBias::classify(self.ub_pct, self.lb_pct)
    }

    /// (label, value) rows in display order for the levels table.
    pub fn rows(&self) -> [(&'static str, f64); 9] {
        [
            ("Central Pivot (CP)", self.central_pivot),
            ("Upper Boundary (UB)", self.upper_boundary),
            ("Lower Boundary (LB)", self.lower_boundary),
            ("R1", self.r1),
            ("R2", self.r2),
            ("R3", self.r3),
            ("S1", self.s1),
            ("S2", self.s2),
            ("S3", self.s3),
        ]
    }
}

/// Session character implied by the width of the Central Pivot Range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CprBias {
    /// Both widths under the narrow threshold: trend day likely
    NarrowTrendLikely,
    /// Either width over the wide threshold: range-bound day possible
    WideRangeBound,
    /// Everything in between: balanced movement
    Balanced,
}

impl CprBias {
    pub fn classify(ub_pct: f64, lb_pct: f64) -> Self {
        if ub_pct < NARROW_CPR_THRESHOLD_PCT && lb_pct < NARROW_CPR_THRESHOLD_PCT {
            CprBias::NarrowTrendLikely
        } else if ub_pct > WIDE_CPR_THRESHOLD_PCT || lb_pct > WIDE_CPR_THRESHOLD_PCT {
            CprBias::WideRangeBound
        } else {
            CprBias::Balanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_bar_collapses_the_cpr() {
        // high/low symmetric around the close: CP, LB and UB coincide
        let levels = PivotLevels::from_hlc(100.0, 90.0, 95.0);
        assert_eq!(levels.central_pivot, 95.0);
        assert_eq!(levels.r1, 100.0);
        assert_eq!(levels.s1, 90.0);
        assert_eq!(levels.r2, 105.0);
        assert_eq!(levels.s2, 85.0);
        assert_eq!(levels.r3, 110.0);
        assert_eq!(levels.s3, 80.0);
        assert_eq!(levels.lower_boundary, 95.0);
        assert_eq!(levels.upper_boundary, 95.0);
        assert_eq!(levels.ub_pct, 0.0);
        assert_eq!(levels.lb_pct, 0.0);
    }

    #[test]
    fn test_index_scale_bar_rounds_at_each_step() {
        // CP is rounded to 18416.67 before UB is derived from it
        let levels = PivotLevels::from_hlc(18500.0, 18300.0, 18450.0);
        assert_eq!(levels.central_pivot, 18416.67);
        assert_eq!(levels.lower_boundary, 18400.0);
        assert_eq!(levels.upper_boundary, 18433.34);
        assert_eq!(levels.ub_pct, 0.09);
        assert_eq!(levels.lb_pct, 0.09);
        assert_eq!(levels.bias(), CprBias::NarrowTrendLikely);
    }

    #[test]
    fn test_pivot_sits_between_s1_and_r1() {
        let cases = [
            (18500.0, 18300.0, 18450.0),
            (100.0, 90.0, 95.0),
            (24890.5, 24515.25, 24612.1),
            (1.5, 1.2, 1.3),
        ];
        for (high, low, close) in cases {
            let levels = PivotLevels::from_hlc(high, low, close);
            assert!(
                levels.s1 < levels.central_pivot && levels.central_pivot < levels.r1,
                "CP not inside (S1, R1) for ({high}, {low}, {close})"
            );
        }
    }

    #[test]
    fn test_upper_boundary_mirrors_lower_across_pivot() {
        let levels = PivotLevels::from_hlc(24890.0, 24515.0, 24612.0);
        let up = levels.upper_boundary - levels.central_pivot;
        let down = levels.central_pivot - levels.lower_boundary;
        assert!((up - down).abs() < 0.011, "mirror broken: {up} vs {down}");
    }

    #[test]
    fn test_bias_thresholds() {
        assert_eq!(CprBias::classify(0.09, 0.09), CprBias::NarrowTrendLikely);
        assert_eq!(CprBias::classify(0.7, 0.1), CprBias::WideRangeBound);
        assert_eq!(CprBias::classify(0.1, 0.65), CprBias::WideRangeBound);
        assert_eq!(CprBias::classify(0.4, 0.4), CprBias::Balanced);
        // Threshold edges are exclusive on both sides
        assert_eq!(CprBias::classify(0.3, 0.2), CprBias::Balanced);
        assert_eq!(CprBias::classify(0.6, 0.6), CprBias::Balanced);
    }
}
