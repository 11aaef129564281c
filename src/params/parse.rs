//! Parse raw text from the numeric entry fields
//!
//! Empty text reads as zero, the same as an emptied number field. Anything
//! else must parse as a decimal number.

use super::error::{Field, InputError};

/// Parse a principal or rate entry
pub fn parse_amount(field: Field, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        text: text.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}

/// Parse a horizon entry. Fractional years round up, so "2.5" covers years 0..=3.
pub fn parse_years(text: &str) -> Result<u32, InputError> {
    let value = parse_amount(Field::Years, text)?;
    if value < 0.0 || value > u32::MAX as f64 {
        return Err(InputError::OutOfRange {
            field: Field::Years,
            value,
            min: 0.0,
            max: u32::MAX as f64,
        });
    }
    Ok(value.ceil() as u32)
}
