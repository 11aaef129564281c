//! Projection engine
//!
//! Each year is computed directly from the closed-form expressions rather than
//! rolled forward, so rounding never accumulates between years.

use log::debug;

use crate::params::InterestParams;
use super::points::{ProjectionPoint, ProjectionResult};

/// Round to the nearest whole currency unit, halves away from zero.
///
/// For the non-negative balances the engine produces this matches half-up.
/// Values beyond the `i128` range saturate.
pub fn round_amount(value: f64) -> i128 {
    value.round() as i128
}

/// Project `years + 1` points for the given inputs.
///
/// Growth uses `powf` so each year is a single correctly rounded power, not a
/// chain of multiplications whose error can tip a near-tie.
pub fn project(params: &InterestParams) -> Vec<ProjectionPoint> {
    let growth = 1.0 + params.rate_fraction();

    (0..=params.years)
        .map(|year| ProjectionPoint {
            year,
            compound_amount: round_amount(params.principal * growth.powf(year as f64)),
            simple_amount: round_amount(
                params.principal * (1.0 + params.rate_fraction() * year as f64),
            ),
        })
        .collect()
}

/// Runs projections and packages them with their inputs
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a full projection. The caller is responsible for bounding the inputs.
    pub fn project(&self, params: &InterestParams) -> ProjectionResult {
        let mut result = ProjectionResult::new(*params);
        for point in project(params) {
            result.add_point(point);
        }

        debug!(
            "projected principal={} rate={}% years={} -> {} points",
            params.principal,
            params.rate,
            params.years,
            result.len()
        );
        result
    }
}
