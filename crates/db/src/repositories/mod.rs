//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Pure transition and validation rules live in `nagorik-core`; repositories
//! revalidate through them before every write.

pub mod administrator;
pub mod certificate;
pub mod certificate_type;
pub mod citizen;
pub mod ledger;
pub mod notification;
pub mod otp;
pub mod tax;

pub use administrator::AdministratorRepository;
pub use certificate::{ApplyCertificateInput, CertificateRepository, DirectIssueInput, VerifiedCertificate};
pub use certificate_type::{CertificateTypeRepository, CreateCertificateTypeInput};
pub use citizen::{CitizenRepository, CreateCitizenInput};
pub use ledger::{LedgerRepository, LedgerSource};
pub use notification::NotificationRepository;
pub use otp::OtpRepository;
pub use tax::{Compliance, TaxRepository};

use sea_orm::{DbErr, SqlErr};

use nagorik_core::certificate::CertificateError;
use nagorik_core::citizen::CitizenError;
use nagorik_core::otp::OtpError;
use nagorik_core::tax::TaxError;

/// Returns the unique-constraint violation message, if this error is one.
///
/// Used to turn insert conflicts into domain errors (duplicate NID, duplicate
/// payment) or into a bounded regeneration retry (certificate and receipt
/// numbers).
pub(crate) fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => Some(msg),
        _ => None,
    }
}

/// Connection-level failures map to a retryable `Unavailable`, everything
/// else to a plain database error.
pub(crate) fn is_unavailable(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

pub(crate) fn citizen_err(err: DbErr) -> CitizenError {
    if is_unavailable(&err) {
        CitizenError::Unavailable(err.to_string())
    } else {
        CitizenError::Database(err.to_string())
    }
}

pub(crate) fn certificate_err(err: DbErr) -> CertificateError {
    if is_unavailable(&err) {
        CertificateError::Unavailable(err.to_string())
    } else {
        CertificateError::Database(err.to_string())
    }
}

pub(crate) fn tax_err(err: DbErr) -> TaxError {
    if is_unavailable(&err) {
        TaxError::Unavailable(err.to_string())
    } else {
        TaxError::Database(err.to_string())
    }
}

pub(crate) fn registry_err(err: DbErr) -> nagorik_shared::RegistryError {
    if is_unavailable(&err) {
        nagorik_shared::RegistryError::Unavailable(err.to_string())
    } else {
        nagorik_shared::RegistryError::Database(err.to_string())
    }
}

pub(crate) fn otp_err(err: DbErr) -> OtpError {
    if is_unavailable(&err) {
        OtpError::Unavailable(err.to_string())
    } else {
        OtpError::Database(err.to_string())
    }
}
