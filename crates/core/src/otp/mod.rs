//! One-time passcode generation and verification rules.
//!
//! A token is a 6-digit code hashed for storage, bound to one email and one
//! purpose, with an absolute expiry checked lazily at verification. At most
//! one live token exists per email; the store enforces that with a unique
//! column and an atomic replace.

pub mod error;
pub mod service;
pub mod types;

pub use error::OtpError;
pub use service::OtpService;
pub use types::{CODE_LEN, DEFAULT_TTL_MINUTES, OtpPurpose, generate_code, hash_code};
