//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `RegistryError`.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record exists but registry policy forbids acting on it
    /// (e.g. identifying a citizen whose application is still pending).
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// Conflict (e.g., duplicate national ID, duplicate tax payment).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// One-time passcode did not match or is past its expiry.
    #[error("Invalid or expired code: {0}")]
    InvalidOrExpired(String),

    /// The persistent store is unreachable; the operation may be retried.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::PolicyViolation(_) => 403,
            Self::Conflict(_) => 409,
            Self::InvalidOrExpired(_) => 401,
            Self::Unavailable(_) => 503,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PolicyViolation(_) => "POLICY_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::InvalidOrExpired(_) => "INVALID_OR_EXPIRED",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller may retry the operation unchanged.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RegistryError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(RegistryError::NotFound(String::new()).status_code(), 404);
        assert_eq!(RegistryError::Validation(String::new()).status_code(), 400);
        assert_eq!(
            RegistryError::PolicyViolation(String::new()).status_code(),
            403
        );
        assert_eq!(RegistryError::Conflict(String::new()).status_code(), 409);
        assert_eq!(
            RegistryError::InvalidOrExpired(String::new()).status_code(),
            401
        );
        assert_eq!(RegistryError::Unavailable(String::new()).status_code(), 503);
        assert_eq!(RegistryError::Database(String::new()).status_code(), 500);
        assert_eq!(RegistryError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RegistryError::Conflict(String::new()).error_code(),
            "CONFLICT"
        );
        assert_eq!(
            RegistryError::PolicyViolation(String::new()).error_code(),
            "POLICY_VIOLATION"
        );
        assert_eq!(
            RegistryError::InvalidOrExpired(String::new()).error_code(),
            "INVALID_OR_EXPIRED"
        );
        assert_eq!(
            RegistryError::Unavailable(String::new()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::Conflict("duplicate NID".into()).to_string(),
            "Conflict: duplicate NID"
        );
        assert_eq!(
            RegistryError::PolicyViolation("pending approval".into()).to_string(),
            "Policy violation: pending approval"
        );
    }

    #[test]
    fn test_only_unavailable_is_retryable() {
        assert!(RegistryError::Unavailable(String::new()).is_retryable());
        assert!(!RegistryError::Conflict(String::new()).is_retryable());
        assert!(!RegistryError::Database(String::new()).is_retryable());
    }
}
