//! Administrator authentication primitives.

pub mod password;

pub use password::{PasswordError, hash_password, verify_password};
