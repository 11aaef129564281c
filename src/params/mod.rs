//! Calculator inputs: principal, annual rate and horizon

mod data;
mod error;
pub mod parse;

pub use data::{InterestParams, PRINCIPAL_MIN, PRINCIPAL_MAX, RATE_MIN, RATE_MAX, YEARS_MIN, YEARS_MAX};
pub use error::{InputError, Field};
pub use parse::{parse_amount, parse_years};
