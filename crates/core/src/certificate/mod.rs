//! Certificate lifecycle, payload validation, and number scheme.
//!
//! Certificates move `Pending → Approved → Issued` (or `Pending → Rejected`),
//! with an administrator fast path that creates records directly in `Issued`.
//! Each certificate type carries a canonical kind that selects the payload
//! variant and its validation rules.

pub mod error;
pub mod number;
pub mod payload;
pub mod service;
pub mod types;

pub use error::CertificateError;
pub use number::{CERTIFICATE_NUMBER_LEN, JurisdictionCodes, MAX_GENERATION_ATTEMPTS};
pub use payload::{CertificatePayload, Heir};
pub use service::CertificateWorkflow;
pub use types::{CertificateKind, CertificateStatus};
