//! Holding-tax rules: fiscal year computation and receipt numbers.
//!
//! Compliance itself is a store lookup (direct record, then household
//! members); the pure pieces living here are the fiscal-year labeling and
//! the receipt number scheme.

pub mod error;
pub mod receipt;
pub mod year;

pub use error::TaxError;
pub use year::{DEFAULT_FISCAL_START_MONTH, fiscal_year_for};
