//! Tax error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tax operations.
#[derive(Debug, Error)]
pub enum TaxError {
    /// A paid record already exists for this citizen or their household.
    #[error("Holding tax for {fiscal_year} is already paid")]
    AlreadyPaid {
        /// The fiscal year of the duplicate payment.
        fiscal_year: String,
    },

    /// Payment amount must be positive.
    #[error("Tax amount must be positive")]
    NonPositiveAmount,

    /// The fiscal-year label is malformed.
    #[error("Invalid fiscal year label {0:?}")]
    InvalidFiscalYear(String),

    /// Citizen not found.
    #[error("Citizen {0} not found")]
    CitizenNotFound(Uuid),

    /// Bounded receipt-number attempts were exhausted without a unique hit.
    #[error("Exhausted receipt number generation attempts")]
    GenerationExhausted,

    /// The registry store is unreachable; the operation may be retried.
    #[error("Registry store unreachable: {0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl TaxError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::AlreadyPaid { .. } => 409,
            Self::NonPositiveAmount | Self::InvalidFiscalYear(_) => 400,
            Self::CitizenNotFound(_) => 404,
            Self::Unavailable(_) => 503,
            Self::GenerationExhausted | Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyPaid { .. } => "ALREADY_PAID",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::InvalidFiscalYear(_) => "INVALID_FISCAL_YEAR",
            Self::CitizenNotFound(_) => "CITIZEN_NOT_FOUND",
            Self::GenerationExhausted => "GENERATION_EXHAUSTED",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_paid_error() {
        let err = TaxError::AlreadyPaid {
            fiscal_year: "2024-2025".to_string(),
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "ALREADY_PAID");
        assert!(err.to_string().contains("2024-2025"));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(TaxError::NonPositiveAmount.status_code(), 400);
        assert_eq!(
            TaxError::InvalidFiscalYear("2024".to_string()).status_code(),
            400
        );
    }

    #[test]
    fn test_not_found_error() {
        assert_eq!(TaxError::CitizenNotFound(Uuid::nil()).status_code(), 404);
    }
}
