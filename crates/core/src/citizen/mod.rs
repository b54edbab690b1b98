//! Citizen approval state machine and identification policy.
//!
//! Citizens enter the registry either through public self-application
//! (starting `pending`) or through an administrator (starting `approved`).
//! The only transitions are administrator-driven `pending → approved` and
//! `pending → rejected`, both terminal.

pub mod error;
pub mod service;
pub mod types;

pub use error::CitizenError;
pub use service::CitizenWorkflow;
pub use types::{Address, CitizenStatus, Gender, PersonName};
