//! Input-domain errors

use std::fmt;
use thiserror::Error;

/// Which input field a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Rate,
    Years,
}

impl Field {
    /// Label shown next to the entry field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Principal => "Initial Amount",
            Field::Rate => "Annual Rate (%)",
            Field::Years => "Time Period (years)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when raw input falls outside the calculator's domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: '{text}' is not a number")]
    NotANumber { field: Field, text: String },

    #[error("{field}: value must be finite")]
    NonFinite { field: Field },

    #[error("{field}: {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl InputError {
    /// Field the error refers to
    pub fn field(&self) -> Field {
        match self {
            InputError::NotANumber { field, .. }
            | InputError::NonFinite { field }
            | InputError::OutOfRange { field, .. } => *field,
        }
    }
}
