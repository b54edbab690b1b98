//! Passcode verification rules.

use chrono::{DateTime, Duration, Utc};

use crate::otp::error::OtpError;
use crate::otp::types::hash_code;

/// Stateless passcode rules.
///
/// The repository owns the token row; these functions own the decision of
/// whether a presented code is acceptable.
pub struct OtpService;

impl OtpService {
    /// Returns the absolute expiry for a token issued at `now`.
    #[must_use]
    pub fn expiry_for(now: DateTime<Utc>, ttl_minutes: i64) -> DateTime<Utc> {
        now + Duration::minutes(ttl_minutes)
    }

    /// Decides whether a presented code matches a stored token.
    ///
    /// The expiry check is strict: a code presented exactly at `expires_at`
    /// is already expired. A failed check must leave the token in place; only
    /// the next issuance for the email reaps it.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::Mismatch` on a wrong code, `OtpError::Expired` on a
    /// matching but stale one.
    pub fn check(
        stored_hash: &str,
        expires_at: DateTime<Utc>,
        presented_code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), OtpError> {
        if hash_code(presented_code) != stored_hash {
            return Err(OtpError::Mismatch);
        }
        if now >= expires_at {
            return Err(OtpError::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otp::types::{DEFAULT_TTL_MINUTES, generate_code};

    fn setup() -> (String, String, DateTime<Utc>, DateTime<Utc>) {
        let code = generate_code();
        let hash = hash_code(&code);
        let now = Utc::now();
        let expires_at = OtpService::expiry_for(now, DEFAULT_TTL_MINUTES);
        (code, hash, now, expires_at)
    }

    #[test]
    fn test_correct_code_before_expiry() {
        let (code, hash, now, expires_at) = setup();
        assert!(OtpService::check(&hash, expires_at, &code, now).is_ok());
    }

    #[test]
    fn test_wrong_code_rejected() {
        let (code, hash, now, expires_at) = setup();
        let wrong = if code == "000000" { "000001" } else { "000000" };
        assert!(matches!(
            OtpService::check(&hash, expires_at, wrong, now),
            Err(OtpError::Mismatch)
        ));
    }

    #[test]
    fn test_correct_code_after_expiry() {
        let (code, hash, now, expires_at) = setup();
        let late = expires_at + Duration::seconds(1);
        assert!(matches!(
            OtpService::check(&hash, expires_at, &code, late),
            Err(OtpError::Expired)
        ));
        let _ = now;
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let (code, hash, _now, expires_at) = setup();
        assert!(matches!(
            OtpService::check(&hash, expires_at, &code, expires_at),
            Err(OtpError::Expired)
        ));
    }

    #[test]
    fn test_expiry_for_adds_ttl() {
        let now = Utc::now();
        let expires = OtpService::expiry_for(now, 10);
        assert_eq!(expires - now, Duration::minutes(10));
    }
}
