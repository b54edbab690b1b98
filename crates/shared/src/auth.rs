//! Authentication types for administrator sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for administrator session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (administrator ID).
    pub sub: Uuid,
    /// Administrator username.
    pub username: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an administrator.
    #[must_use]
    pub fn new(admin_id: Uuid, username: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: admin_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the administrator ID from claims.
    #[must_use]
    pub const fn admin_id(&self) -> Uuid {
        self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Administrator username.
    pub username: String,
    /// Administrator password.
    pub password: String,
}

/// Login response payload.
///
/// When the account has a bound email, `otp_required` is true and no token is
/// issued until the passcode is verified.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Whether a one-time passcode must still be verified.
    pub otp_required: bool,
    /// Session token; present only when no second factor is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Token expiration in seconds; present alongside `token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// One-time passcode verification request.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpRequest {
    /// Email the passcode was sent to.
    pub email: String,
    /// The 6-digit passcode.
    pub code: String,
}

/// Request to bind an email address to the administrator account.
#[derive(Debug, Clone, Deserialize)]
pub struct BindEmailRequest {
    /// The email address to bind.
    pub email: String,
}

/// Session token payload returned after full authentication.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    /// Session token.
    pub token: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
}
