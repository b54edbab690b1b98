//! Holding-tax repository: payment and household-aware compliance.
//!
//! The "already paid" guard is the insert's unique constraints (one per
//! citizen per fiscal year, one per household per fiscal year), never a read
//! followed by a separate write, so two concurrent payments cannot both pass.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

use nagorik_core::tax::{TaxError, receipt, year};

use crate::entities::{citizens, tax_records};
use crate::repositories::ledger::{LedgerRepository, LedgerSource};
use crate::repositories::notification::NotificationRepository;
use crate::repositories::{tax_err, unique_violation};

/// Result of a compliance check.
#[derive(Debug, Clone)]
pub struct Compliance {
    /// Whether the fiscal year is covered.
    pub paid: bool,
    /// The citizen whose payment covers it; `None` when unpaid.
    pub payer: Option<citizens::Model>,
}

/// Tax repository for payments and compliance checks.
#[derive(Debug, Clone)]
pub struct TaxRepository {
    db: DatabaseConnection,
}

impl TaxRepository {
    /// Creates a new tax repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a citizen is covered for a fiscal year.
    ///
    /// A direct payment wins; otherwise any payment by a member of the same
    /// household covers the whole household.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::CitizenNotFound` for an unknown citizen and
    /// `TaxError::InvalidFiscalYear` for a malformed label.
    pub async fn check_compliance(
        &self,
        citizen_id: Uuid,
        fiscal_year: &str,
    ) -> Result<Compliance, TaxError> {
        if !year::is_valid_label(fiscal_year) {
            return Err(TaxError::InvalidFiscalYear(fiscal_year.to_string()));
        }

        let citizen = self.fetch_citizen(citizen_id).await?;

        let direct = tax_records::Entity::find()
            .filter(tax_records::Column::CitizenId.eq(citizen_id))
            .filter(tax_records::Column::FiscalYear.eq(fiscal_year))
            .one(&self.db)
            .await
            .map_err(tax_err)?;

        if direct.is_some() {
            return Ok(Compliance {
                paid: true,
                payer: Some(citizen),
            });
        }

        let Some(household_id) = citizen.household_id else {
            return Ok(Compliance {
                paid: false,
                payer: None,
            });
        };

        let household_record = tax_records::Entity::find()
            .filter(tax_records::Column::HouseholdId.eq(household_id))
            .filter(tax_records::Column::FiscalYear.eq(fiscal_year))
            .one(&self.db)
            .await
            .map_err(tax_err)?;

        match household_record {
            Some(record) => {
                let payer = self.fetch_citizen(record.citizen_id).await?;
                Ok(Compliance {
                    paid: true,
                    payer: Some(payer),
                })
            }
            None => Ok(Compliance {
                paid: false,
                payer: None,
            }),
        }
    }

    /// Records a holding-tax payment.
    ///
    /// Creates the record, a receipt number (bounded regeneration under the
    /// unique column), and a ledger entry in one transaction, then emits a
    /// best-effort notification.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::AlreadyPaid` when the citizen or their household
    /// already covers the year, `TaxError::NonPositiveAmount` or
    /// `TaxError::InvalidFiscalYear` for bad input, and
    /// `TaxError::GenerationExhausted` when receipt attempts run out.
    pub async fn pay_tax(
        &self,
        citizen_id: Uuid,
        fiscal_year: &str,
        amount: Decimal,
    ) -> Result<tax_records::Model, TaxError> {
        if amount <= Decimal::ZERO {
            return Err(TaxError::NonPositiveAmount);
        }
        if !year::is_valid_label(fiscal_year) {
            return Err(TaxError::InvalidFiscalYear(fiscal_year.to_string()));
        }

        let citizen = self.fetch_citizen(citizen_id).await?;

        for _attempt in 0..receipt::MAX_GENERATION_ATTEMPTS {
            let now = Utc::now();
            let receipt_number = receipt::generate(now.date_naive());

            let txn = self
                .db
                .begin()
                .await
                .map_err(tax_err)?;

            let record = tax_records::ActiveModel {
                id: Set(Uuid::now_v7()),
                citizen_id: Set(citizen.id),
                household_id: Set(citizen.household_id),
                fiscal_year: Set(fiscal_year.to_string()),
                amount: Set(amount),
                receipt_number: Set(receipt_number.clone()),
                paid_at: Set(now.into()),
            };

            let created = match record.insert(&txn).await {
                Ok(model) => model,
                Err(e) => {
                    let Some(message) = unique_violation(&e) else {
                        return Err(tax_err(e));
                    };
                    txn.rollback()
                        .await
                        .map_err(tax_err)?;

                    // A receipt collision is retryable; a citizen/household
                    // collision means the year is already covered.
                    if message.contains("receipt_number") {
                        continue;
                    }
                    return Err(TaxError::AlreadyPaid {
                        fiscal_year: fiscal_year.to_string(),
                    });
                }
            };

            LedgerRepository::append_with(
                &txn,
                LedgerSource::Tax,
                created.id,
                Some(citizen.id),
                amount,
                &format!("Holding tax {fiscal_year}"),
            )
            .await
            .map_err(tax_err)?;

            txn.commit()
                .await
                .map_err(tax_err)?;

            info!(
                citizen_id = %citizen.id,
                fiscal_year,
                receipt_number = %created.receipt_number,
                "Holding tax paid"
            );
            self.notify_payment(&citizen, fiscal_year).await;

            return Ok(created);
        }

        Err(TaxError::GenerationExhausted)
    }

    async fn fetch_citizen(&self, citizen_id: Uuid) -> Result<citizens::Model, TaxError> {
        citizens::Entity::find_by_id(citizen_id)
            .one(&self.db)
            .await
            .map_err(tax_err)?
            .ok_or(TaxError::CitizenNotFound(citizen_id))
    }

    async fn notify_payment(&self, citizen: &citizens::Model, fiscal_year: &str) {
        let notifications = NotificationRepository::new(self.db.clone());
        if let Err(e) = notifications
            .emit(
                "Holding tax paid",
                &format!("{} paid holding tax for {fiscal_year}", citizen.name_en),
                "info",
                Some(&format!("/citizens/{}", citizen.id)),
            )
            .await
        {
            warn!(error = %e, "Failed to write tax payment notification");
        }
    }
}
