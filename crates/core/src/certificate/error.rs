//! Certificate workflow error types.

use thiserror::Error;
use uuid::Uuid;

use crate::certificate::types::{CertificateKind, CertificateStatus};

/// Errors that can occur during certificate operations.
#[derive(Debug, Error)]
pub enum CertificateError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: CertificateStatus,
        /// The attempted target status.
        to: CertificateStatus,
    },

    /// The payload variant does not match the certificate type's kind.
    #[error("Payload does not match certificate kind {expected} (got {got})")]
    PayloadMismatch {
        /// The kind required by the certificate type.
        expected: CertificateKind,
        /// The kind of the submitted payload.
        got: CertificateKind,
    },

    /// A required payload field is missing or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A succession payload must list at least one heir.
    #[error("Succession certificate requires at least one heir")]
    EmptyHeirs,

    /// Trade license capital must be positive.
    #[error("Trade license capital must be positive")]
    NonPositiveCapital,

    /// Catalog fees cannot be negative.
    #[error("Certificate fee cannot be negative")]
    NegativeFee,

    /// A jurisdiction code must be exactly five decimal digits.
    #[error("Invalid jurisdiction code {0:?}: expected exactly 5 digits")]
    InvalidJurisdictionCode(String),

    /// Certificate number prefixes need a four-digit year.
    #[error("Year {0} cannot be encoded in a certificate number")]
    InvalidNumberYear(i32),

    /// Bounded number-generation attempts were exhausted without a unique hit.
    #[error("Exhausted certificate number generation attempts")]
    GenerationExhausted,

    /// Certificate not found.
    #[error("Certificate {0} not found")]
    CertificateNotFound(Uuid),

    /// Certificate type not found.
    #[error("Certificate type {0} not found")]
    TypeNotFound(Uuid),

    /// The referenced citizen does not exist or is not approved.
    #[error("Citizen {0} is not an approved registry record")]
    CitizenNotEligible(Uuid),

    /// The registry store is unreachable; the operation may be retried.
    #[error("Registry store unreachable: {0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CertificateError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. }
            | Self::PayloadMismatch { .. }
            | Self::MissingField(_)
            | Self::EmptyHeirs
            | Self::NonPositiveCapital
            | Self::NegativeFee => 400,

            Self::CitizenNotEligible(_) => 403,

            Self::CertificateNotFound(_) | Self::TypeNotFound(_) => 404,

            Self::Unavailable(_) => 503,

            Self::InvalidJurisdictionCode(_)
            | Self::InvalidNumberYear(_)
            | Self::GenerationExhausted
            | Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::PayloadMismatch { .. } => "PAYLOAD_MISMATCH",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::EmptyHeirs => "EMPTY_HEIRS",
            Self::NonPositiveCapital => "NON_POSITIVE_CAPITAL",
            Self::NegativeFee => "NEGATIVE_FEE",
            Self::InvalidJurisdictionCode(_) => "INVALID_JURISDICTION_CODE",
            Self::InvalidNumberYear(_) => "INVALID_NUMBER_YEAR",
            Self::GenerationExhausted => "GENERATION_EXHAUSTED",
            Self::CertificateNotFound(_) => "CERTIFICATE_NOT_FOUND",
            Self::TypeNotFound(_) => "TYPE_NOT_FOUND",
            Self::CitizenNotEligible(_) => "CITIZEN_NOT_ELIGIBLE",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = CertificateError::InvalidTransition {
            from: CertificateStatus::Pending,
            to: CertificateStatus::Issued,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("pending"));
        assert!(err.to_string().contains("issued"));
    }

    #[test]
    fn test_payload_mismatch_error() {
        let err = CertificateError::PayloadMismatch {
            expected: CertificateKind::TradeLicense,
            got: CertificateKind::General,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "PAYLOAD_MISMATCH");
    }

    #[test]
    fn test_generation_exhausted_error() {
        let err = CertificateError::GenerationExhausted;
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "GENERATION_EXHAUSTED");
    }

    #[test]
    fn test_not_found_errors() {
        assert_eq!(
            CertificateError::CertificateNotFound(Uuid::nil()).status_code(),
            404
        );
        assert_eq!(CertificateError::TypeNotFound(Uuid::nil()).status_code(), 404);
    }
}
