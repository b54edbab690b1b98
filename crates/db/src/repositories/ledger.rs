//! Append-only ledger repository.
//!
//! Entries are written once when a fee-bearing action completes and are
//! never updated or deleted; the crate exposes no mutation path.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::ledger_entries;

/// What produced a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerSource {
    /// A certificate issuance fee.
    Certificate,
    /// A holding-tax payment.
    Tax,
}

impl LedgerSource {
    /// Returns the string representation of the source.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Tax => "tax",
        }
    }
}

/// Ledger repository.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry on the given connection.
    ///
    /// Takes the connection explicitly so callers can append inside the same
    /// transaction as the primary write.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn append_with<C: ConnectionTrait>(
        conn: &C,
        source: LedgerSource,
        source_id: Uuid,
        citizen_id: Option<Uuid>,
        amount: Decimal,
        description: &str,
    ) -> Result<ledger_entries::Model, DbErr> {
        let entry = ledger_entries::ActiveModel {
            id: Set(Uuid::now_v7()),
            source: Set(source.as_str().to_string()),
            source_id: Set(source_id),
            citizen_id: Set(citizen_id),
            amount: Set(amount),
            description: Set(description.to_string()),
            recorded_at: Set(Utc::now().into()),
        };

        entry.insert(conn).await
    }

    /// Lists the entries recorded for one source record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_source(
        &self,
        source: LedgerSource,
        source_id: Uuid,
    ) -> Result<Vec<ledger_entries::Model>, DbErr> {
        ledger_entries::Entity::find()
            .filter(ledger_entries::Column::Source.eq(source.as_str()))
            .filter(ledger_entries::Column::SourceId.eq(source_id))
            .order_by_asc(ledger_entries::Column::RecordedAt)
            .all(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_as_str() {
        assert_eq!(LedgerSource::Certificate.as_str(), "certificate");
        assert_eq!(LedgerSource::Tax.as_str(), "tax");
    }
}
