//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Every uniqueness rule the registry depends on (national IDs, certificate
//! numbers, one payment per household per fiscal year, one live passcode per
//! email) is carried by a database constraint, never by a read-then-write
//! check.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AdministratorRepository, CertificateRepository, CertificateTypeRepository, CitizenRepository,
    LedgerRepository, NotificationRepository, OtpRepository, TaxRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
