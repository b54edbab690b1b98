//! Shared domain types.

pub mod id;

pub use id::{
    AdministratorId, CertificateId, CertificateTypeId, CitizenId, HouseholdId, LedgerEntryId,
    NotificationId, TaxRecordId, VerificationTokenId,
};
