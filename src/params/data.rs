//! Input parameter record and its advisory bounds

use serde::{Deserialize, Serialize};

use super::error::{Field, InputError};

/// Smallest principal the entry field accepts
pub const PRINCIPAL_MIN: f64 = 1.0;

/// Largest principal accepted. At 100% over 100 years this grows to about
/// 1.27e38, which still fits the `i128` amounts.
pub const PRINCIPAL_MAX: f64 = 100_000_000.0;

/// Annual rate bounds, in percent
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 100.0;

/// Horizon bounds, in years
pub const YEARS_MIN: u32 = 1;
pub const YEARS_MAX: u32 = 100;

/// The three numeric inputs driving a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestParams {
    /// Starting amount in whole currency units
    pub principal: f64,

    /// Annual interest rate in percent (10.0 = 10%)
    pub rate: f64,

    /// Projection horizon in years
    pub years: u32,
}

impl Default for InterestParams {
    fn default() -> Self {
        Self {
            principal: 1000.0,
            rate: 10.0,
            years: 10,
        }
    }
}

impl InterestParams {
    pub fn new(principal: f64, rate: f64, years: u32) -> Self {
        Self { principal, rate, years }
    }

    /// Annual rate as a decimal fraction
    pub fn rate_fraction(&self) -> f64 {
        self.rate / 100.0
    }

    /// Check every field against its bounds
    pub fn validate(&self) -> Result<(), InputError> {
        check(Field::Principal, self.principal, PRINCIPAL_MIN, PRINCIPAL_MAX)?;
        check(Field::Rate, self.rate, RATE_MIN, RATE_MAX)?;
        check(
            Field::Years,
            self.years as f64,
            YEARS_MIN as f64,
            YEARS_MAX as f64,
        )?;
        Ok(())
    }

    /// Validate and return self, for chaining
    pub fn validated(self) -> Result<Self, InputError> {
        self.validate().map(|_| self)
    }

    /// Coerce every field into bounds. Non-finite values fall to the lower bound.
    pub fn clamped(&self) -> Self {
        Self {
            principal: clamp_finite(self.principal, PRINCIPAL_MIN, PRINCIPAL_MAX),
            rate: clamp_finite(self.rate, RATE_MIN, RATE_MAX),
            years: self.years.clamp(YEARS_MIN, YEARS_MAX),
        }
    }

    /// True when clamping would leave the parameters unchanged
    pub fn is_in_bounds(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check(field: Field, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}
