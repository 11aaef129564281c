//! Y-axis range and tick generation

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::projection::ProjectionPoint;

/// Fraction of the principal used as the bottom of the axis
pub const AXIS_FLOOR_FACTOR: f64 = 0.9;

/// Step ladder, largest band first: (minimum range, step)
const STEP_BANDS: [(i128, i128); 3] = [
    (1_000_000, 1_000_000),
    (100_000, 100_000),
    (10_000, 10_000),
];
const DEFAULT_STEP: i128 = 1_000;

/// Upper bound on generated ticks. The ladder alone keeps every range below
/// 10^10 under this; wider ranges scale the step by further powers of ten.
pub const MAX_TICKS: i128 = 10_000;

/// Display range and tick values for the amount axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: i128,
    pub max: i128,
    pub step: i128,
    pub ticks: Vec<i128>,
}

impl AxisScale {
    /// Derive the scale from a projection and the principal it started from
    pub fn from_points(points: &[ProjectionPoint], principal: f64) -> Self {
        let min = (principal * AXIS_FLOOR_FACTOR).floor() as i128;
        let max = points
            .iter()
            .map(ProjectionPoint::max_amount)
            .max()
            .unwrap_or(min);

        let range = max.saturating_sub(min);
        let mut step = step_for_range(range);
        while range / step > MAX_TICKS {
            match step.checked_mul(10) {
                Some(wider) => step = wider,
                None => break,
            }
        }
        if step > 1_000_000 {
            warn!("axis range {} exceeds the step ladder, widened step to {}", range, step);
        }

        let ticks = generate_ticks(min, max, step);
        trace!("axis min={} max={} step={} ticks={:?}", min, max, step, ticks);

        Self { min, max, step, ticks }
    }

    /// Top of the drawn range. The last tick may overshoot `max` by up to one step.
    pub fn upper_bound(&self) -> i128 {
        self.ticks.last().copied().unwrap_or(self.max).max(self.max)
    }
}

/// Pick the tick spacing by order of magnitude of the range
pub fn step_for_range(range: i128) -> i128 {
    STEP_BANDS
        .iter()
        .find(|(threshold, _)| range >= *threshold)
        .map(|&(_, step)| step)
        .unwrap_or(DEFAULT_STEP)
}

/// Ticks from `min` by `step` through `max`, plus one past `max` if the last falls short.
/// The final tick always covers `max`; it saturates at `i128::MAX` rather than overflow.
pub fn generate_ticks(min: i128, max: i128, step: i128) -> Vec<i128> {
    let mut ticks = Vec::new();
    let mut current = min;
    while current <= max {
        ticks.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    if let Some(&last) = ticks.last() {
        if last < max {
            ticks.push(last.saturating_add(step));
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InterestParams;
    use crate::projection::project;

    fn point(year: u32, compound: i128, simple: i128) -> ProjectionPoint {
        ProjectionPoint { year, compound_amount: compound, simple_amount: simple }
    }

    #[test]
    fn test_reference_scale() {
        let points = project(&InterestParams::new(1000.0, 10.0, 10));
        let scale = AxisScale::from_points(&points, 1000.0);
        assert_eq!(scale.min, 900);
        assert_eq!(scale.max, 2594);
        assert_eq!(scale.step, 1000);
        assert_eq!(scale.ticks, vec![900, 1900, 2900]);
        assert_eq!(scale.upper_bound(), 2900);
    }

    #[test]
    fn test_step_bands() {
        assert_eq!(step_for_range(0), 1_000);
        assert_eq!(step_for_range(9_999), 1_000);
        assert_eq!(step_for_range(10_000), 10_000);
        assert_eq!(step_for_range(99_999), 10_000);
        assert_eq!(step_for_range(100_000), 100_000);
        assert_eq!(step_for_range(999_999), 100_000);
        assert_eq!(step_for_range(1_000_000), 1_000_000);
        assert_eq!(step_for_range(750_000_000), 1_000_000);
    }

    #[test]
    fn test_exact_hit_needs_no_extra_tick() {
        assert_eq!(generate_ticks(900, 2900, 1000), vec![900, 1900, 2900]);
    }

    #[test]
    fn test_max_uses_both_series() {
        let points = vec![point(0, 1000, 1000), point(1, 1040, 1100)];
        let scale = AxisScale::from_points(&points, 1000.0);
        assert_eq!(scale.max, 1100);
        assert_eq!(scale.ticks, vec![900, 1900]);
    }

    #[test]
    fn test_empty_points_degenerate_scale() {
        let scale = AxisScale::from_points(&[], 1000.0);
        assert_eq!(scale.min, 900);
        assert_eq!(scale.max, 900);
        assert_eq!(scale.ticks, vec![900]);
        assert_eq!(scale.upper_bound(), 900);
    }

    #[test]
    fn test_floor_of_fractional_principal() {
        let scale = AxisScale::from_points(&[point(0, 2, 2)], 1.5);
        assert_eq!(scale.min, 1);
        assert_eq!(scale.ticks, vec![1, 1001]);
    }

    #[test]
    fn test_huge_range_widens_step() {
        let points = project(&InterestParams::new(1_000.0, 100.0, 40));
        let scale = AxisScale::from_points(&points, 1_000.0);
        assert_eq!(scale.max, 1_099_511_627_776_000);
        assert!(scale.step > 1_000_000);
        assert!(scale.ticks.len() as i128 <= MAX_TICKS + 2);
        assert!(*scale.ticks.last().unwrap() >= scale.max);
    }

    #[test]
    fn test_saturated_amounts_still_covered() {
        let points = vec![point(0, 1, 1), point(1, i128::MAX - 5, 2)];
        let scale = AxisScale::from_points(&points, 1.0);
        assert_eq!(scale.max, i128::MAX - 5);
        assert!(scale.ticks.len() as i128 <= MAX_TICKS + 2);
        assert_eq!(*scale.ticks.last().unwrap(), i128::MAX);
    }

    #[test]
    fn test_tick_overflow_appends_covering_tick() {
        let max = i128::MAX - 1;
        let ticks = generate_ticks(max - 15, max, 10);
        assert_eq!(ticks, vec![max - 15, max - 5, i128::MAX]);
        assert!(*ticks.last().unwrap() >= max);
    }

    #[test]
    fn test_large_range_uses_million_step() {
        let points = project(&InterestParams::new(100_000.0, 20.0, 30));
        let scale = AxisScale::from_points(&points, 100_000.0);
        assert_eq!(scale.step, 1_000_000);
        assert_eq!(scale.ticks[0], 90_000);
        assert!(*scale.ticks.last().unwrap() >= scale.max);
        assert!(scale.ticks.windows(2).all(|w| w[1] - w[0] == 1_000_000));
    }
}
