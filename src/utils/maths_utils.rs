use argminmax::ArgMinMax;

/// Round to 2 decimal places. `f64::round` rounds ties half away from zero,
/// which is the rounding rule used for every published level.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_truncates_to_two_decimals() {
        assert_eq!(round2(18416.666666), 18416.67);
        assert_eq!(round2(0.0905), 0.09);
        assert_eq!(round2(95.0), 95.0);
    }

    #[test]
    fn test_round2_ties_away_from_zero() {
        assert_eq!(round2(2.005_000_1), 2.01);
        assert_eq!(round2(-2.005_000_1), -2.01);
        assert_eq!(round2(1.125), 1.13);
    }

    #[test]
    fn test_min_max_over_slice() {
        let values = [18400.0, 18520.5, 18311.2, 18499.0];
        assert_eq!(get_min(&values), 18311.2);
        assert_eq!(get_max(&values), 18520.5);
    }
}
