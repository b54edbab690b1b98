//! `SeaORM` entity definitions.

pub mod administrators;
pub mod certificate_types;
pub mod certificates;
pub mod citizens;
pub mod households;
pub mod ledger_entries;
pub mod notifications;
pub mod tax_records;
pub mod verification_tokens;
