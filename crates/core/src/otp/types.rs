//! One-time passcode domain types.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digits in a passcode.
pub const CODE_LEN: usize = 6;

/// Default passcode time-to-live in minutes.
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// What a verified passcode unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    /// Second factor for administrator login.
    Login,
    /// Confirming ownership of an email before binding it to the account.
    EmailBinding,
}

impl OtpPurpose {
    /// Returns the string representation of the purpose.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::EmailBinding => "email_binding",
        }
    }

    /// Parses a purpose from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "login" => Some(Self::Login),
            "email_binding" => Some(Self::EmailBinding),
            _ => None,
        }
    }
}

impl fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generates a uniform-random 6-digit passcode, zero-padded.
#[must_use]
pub fn generate_code() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);
    format!("{code:06}")
}

/// Hashes a passcode for storage.
#[must_use]
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(hash_code("123456"), hash_code("123456"));
        assert_ne!(hash_code("123456"), hash_code("123457"));
    }

    #[test]
    fn test_hash_is_not_the_code() {
        let hash = hash_code("123456");
        assert_ne!(hash, "123456");
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_purpose_roundtrip() {
        for purpose in [OtpPurpose::Login, OtpPurpose::EmailBinding] {
            assert_eq!(OtpPurpose::parse(purpose.as_str()), Some(purpose));
        }
        assert_eq!(OtpPurpose::parse("password_reset"), None);
    }
}
