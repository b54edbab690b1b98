//! Citizen workflow error types.

use thiserror::Error;
use uuid::Uuid;

use crate::citizen::types::CitizenStatus;

/// Errors that can occur during citizen operations.
#[derive(Debug, Error)]
pub enum CitizenError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: CitizenStatus,
        /// The attempted target status.
        to: CitizenStatus,
    },

    /// A citizen with this national ID already exists.
    #[error("A citizen with national ID {0} is already registered")]
    DuplicateNid(String),

    /// Citizen not found by ID.
    #[error("Citizen {0} not found")]
    CitizenNotFound(Uuid),

    /// No citizen matched the presented national ID and date of birth.
    #[error("No citizen matches the given national ID and date of birth")]
    NoIdentityMatch,

    /// The matched record is still awaiting administrator approval.
    #[error("Citizen record is pending approval")]
    PendingApproval,

    /// The matched record was rejected by an administrator.
    #[error("Citizen application was rejected")]
    ApplicationRejected,

    /// A required field is missing or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Household code does not resolve to a household.
    #[error("Unknown household code {0}")]
    UnknownHousehold(String),

    /// The registry store is unreachable; the operation may be retried.
    #[error("Registry store unreachable: {0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CitizenError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::MissingField(_) => 400,
            Self::PendingApproval | Self::ApplicationRejected => 403,
            Self::DuplicateNid(_) => 409,
            Self::CitizenNotFound(_) | Self::NoIdentityMatch | Self::UnknownHousehold(_) => 404,
            Self::Unavailable(_) => 503,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::DuplicateNid(_) => "DUPLICATE_NID",
            Self::CitizenNotFound(_) => "CITIZEN_NOT_FOUND",
            Self::NoIdentityMatch => "NO_IDENTITY_MATCH",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::ApplicationRejected => "APPLICATION_REJECTED",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::UnknownHousehold(_) => "UNKNOWN_HOUSEHOLD",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_nid_error() {
        let err = CitizenError::DuplicateNid("1234567890".to_string());
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "DUPLICATE_NID");
        assert!(err.to_string().contains("1234567890"));
    }

    #[test]
    fn test_identify_policy_errors() {
        assert_eq!(CitizenError::PendingApproval.status_code(), 403);
        assert_eq!(CitizenError::PendingApproval.error_code(), "PENDING_APPROVAL");
        assert_eq!(CitizenError::ApplicationRejected.status_code(), 403);
        assert_eq!(
            CitizenError::ApplicationRejected.error_code(),
            "APPLICATION_REJECTED"
        );
        // The two policy refusals must stay distinguishable to callers.
        assert_ne!(
            CitizenError::PendingApproval.to_string(),
            CitizenError::ApplicationRejected.to_string()
        );
    }

    #[test]
    fn test_no_identity_match_error() {
        let err = CitizenError::NoIdentityMatch;
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NO_IDENTITY_MATCH");
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = CitizenError::InvalidTransition {
            from: CitizenStatus::Approved,
            to: CitizenStatus::Rejected,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("approved"));
        assert!(err.to_string().contains("rejected"));
    }
}
