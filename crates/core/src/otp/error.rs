//! One-time passcode error types.

use thiserror::Error;

/// Errors that can occur during passcode verification.
///
/// Mismatch and expiry share one outward-facing error code so a caller can
/// never distinguish "wrong code" from "right code, too late".
#[derive(Debug, Error)]
pub enum OtpError {
    /// The presented code does not match the stored token.
    #[error("Invalid or expired code")]
    Mismatch,

    /// The code matched but the token is past its absolute expiry.
    #[error("Invalid or expired code")]
    Expired,

    /// No live token exists for this email.
    #[error("Invalid or expired code")]
    NoToken,

    /// The registry store is unreachable; the operation may be retried.
    #[error("Registry store unreachable: {0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl OtpError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Mismatch | Self::Expired | Self::NoToken => 401,
            Self::Unavailable(_) => 503,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Mismatch | Self::Expired | Self::NoToken => "INVALID_OR_EXPIRED",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_indistinguishable_to_callers() {
        assert_eq!(OtpError::Mismatch.to_string(), OtpError::Expired.to_string());
        assert_eq!(OtpError::Mismatch.error_code(), OtpError::Expired.error_code());
        assert_eq!(OtpError::NoToken.error_code(), "INVALID_OR_EXPIRED");
        assert_eq!(OtpError::Mismatch.status_code(), 401);
    }
}
