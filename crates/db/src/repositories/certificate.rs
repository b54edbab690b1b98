//! Certificate repository for application, review, and issuance.
//!
//! Number assignment is generate → insert under the unique column → retry on
//! conflict, bounded by `MAX_GENERATION_ATTEMPTS`; randomness alone is never
//! trusted. The fee-to-ledger side effect commits in the same transaction as
//! the status change, so an issued certificate with a nonzero fee always has
//! exactly one ledger entry.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use nagorik_core::certificate::{
    CertificateError, CertificatePayload, CertificateStatus, CertificateWorkflow,
    JurisdictionCodes, MAX_GENERATION_ATTEMPTS, number,
};
use nagorik_core::citizen::CitizenStatus;

use crate::entities::{certificate_types, certificates, citizens};
use crate::repositories::ledger::{LedgerRepository, LedgerSource};
use crate::repositories::{certificate_err, unique_violation};

/// Input for a certificate application.
#[derive(Debug, Clone)]
pub struct ApplyCertificateInput {
    /// Linked citizen; `None` for manual/non-resident applicants.
    pub citizen_id: Option<Uuid>,
    /// Applicant name, required when no citizen is linked.
    pub applicant_name: Option<String>,
    /// Certificate type.
    pub certificate_type_id: Uuid,
    /// Type-specific payload.
    pub payload: CertificatePayload,
}

/// Input for the administrator fast path that creates a certificate
/// directly in `Issued`.
#[derive(Debug, Clone)]
pub struct DirectIssueInput {
    /// The application fields.
    pub application: ApplyCertificateInput,
    /// Fee collected; defaults to the type's fee when `None`.
    pub fee_paid: Option<Decimal>,
}

/// Public verification view of a certificate.
///
/// Only `Issued` certificates expose the citizen's identity; every other
/// state collapses to a neutral `not_issued` with no internal detail.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifiedCertificate {
    /// `issued` or `not_issued`.
    pub status: String,
    /// The certificate number that was looked up.
    pub certificate_number: String,
    /// Type name (English); only for issued certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name_en: Option<String>,
    /// Type name (Bangla); only for issued certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name_bn: Option<String>,
    /// Issue date; only for issued certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    /// Holder name; only for issued certificates linked to a citizen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Holder national ID; only for issued certificates linked to a citizen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_nid: Option<String>,
}

/// Certificate repository for workflow operations.
#[derive(Debug, Clone)]
pub struct CertificateRepository {
    db: DatabaseConnection,
    codes: JurisdictionCodes,
}

impl CertificateRepository {
    /// Creates a new certificate repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, codes: JurisdictionCodes) -> Self {
        Self { db, codes }
    }

    /// Files a certificate application in `Pending`.
    ///
    /// The payload is validated against the type's kind; linked citizens must
    /// be approved registry records. The type's fee is recorded as the fee
    /// collected with the application.
    ///
    /// # Errors
    ///
    /// Returns payload validation errors, `TypeNotFound`, or
    /// `CitizenNotEligible`.
    pub async fn apply(
        &self,
        input: ApplyCertificateInput,
    ) -> Result<certificates::Model, CertificateError> {
        let cert_type = self.fetch_type(input.certificate_type_id).await?;
        let kind = parse_kind(&cert_type.kind)?;
        CertificateWorkflow::validate_application(kind, &input.payload)?;
        self.check_applicant(&input).await?;

        let now = Utc::now();
        let certificate = certificates::ActiveModel {
            id: Set(Uuid::now_v7()),
            citizen_id: Set(input.citizen_id),
            applicant_name: Set(input.applicant_name),
            certificate_type_id: Set(cert_type.id),
            status: Set(CertificateStatus::Pending.as_str().to_string()),
            certificate_number: Set(None),
            issued_at: Set(None),
            fee_paid: Set(cert_type.fee),
            payload: Set(payload_json(&input.payload)?),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = certificate
            .insert(&self.db)
            .await
            .map_err(certificate_err)?;

        info!(certificate_id = %created.id, kind = %kind, "Certificate application filed");
        Ok(created)
    }

    /// Approves a pending application.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Pending`.
    pub async fn approve(&self, certificate_id: Uuid) -> Result<certificates::Model, CertificateError> {
        self.transition(certificate_id, CertificateWorkflow::approve).await
    }

    /// Rejects a pending application.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Pending`.
    pub async fn reject(&self, certificate_id: Uuid) -> Result<certificates::Model, CertificateError> {
        self.transition(certificate_id, CertificateWorkflow::reject).await
    }

    async fn transition(
        &self,
        certificate_id: Uuid,
        step: fn(CertificateStatus) -> Result<CertificateStatus, CertificateError>,
    ) -> Result<certificates::Model, CertificateError> {
        let certificate = self.fetch(certificate_id).await?;

        let next = step(parse_status(&certificate.status)?)?;

        let mut active: certificates::ActiveModel = certificate.into();
        active.status = Set(next.as_str().to_string());
        active.updated_at = Set(Utc::now().into());

        let updated = active
            .update(&self.db)
            .await
            .map_err(certificate_err)?;

        info!(certificate_id = %updated.id, status = %updated.status, "Certificate status changed");
        Ok(updated)
    }

    /// Issues an approved certificate: assigns the number, stamps the issue
    /// date, and appends the fee's ledger entry in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Approved`, or
    /// `GenerationExhausted` when the bounded number attempts run out.
    pub async fn issue(&self, certificate_id: Uuid) -> Result<certificates::Model, CertificateError> {
        let certificate = self.fetch(certificate_id).await?;
        CertificateWorkflow::issue(parse_status(&certificate.status)?)?;

        let birth_year = self.birth_year_of(certificate.citizen_id).await?;

        for _attempt in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = number::generate(birth_year, Utc::now().year(), &self.codes)?;
            let now = Utc::now();

            let txn = self
                .db
                .begin()
                .await
                .map_err(certificate_err)?;

            let mut active: certificates::ActiveModel = certificate.clone().into();
            active.status = Set(CertificateStatus::Issued.as_str().to_string());
            active.certificate_number = Set(Some(candidate.clone()));
            active.issued_at = Set(Some(now.into()));
            active.updated_at = Set(now.into());

            let updated = match active.update(&txn).await {
                Ok(model) => model,
                Err(e) if unique_violation(&e).is_some() => {
                    txn.rollback()
                        .await
                        .map_err(certificate_err)?;
                    continue;
                }
                Err(e) => return Err(certificate_err(e)),
            };

            self.append_fee_entry(&txn, &updated).await?;

            txn.commit()
                .await
                .map_err(certificate_err)?;

            info!(
                certificate_id = %updated.id,
                certificate_number = %candidate,
                "Certificate issued"
            );
            return Ok(updated);
        }

        Err(CertificateError::GenerationExhausted)
    }

    /// Administrator fast path: creates the certificate directly in `Issued`,
    /// finalizing number and ledger entry at creation.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::apply`], or
    /// `GenerationExhausted` when the bounded number attempts run out.
    pub async fn admin_issue_direct(
        &self,
        input: DirectIssueInput,
    ) -> Result<certificates::Model, CertificateError> {
        let application = input.application;
        let cert_type = self.fetch_type(application.certificate_type_id).await?;
        let kind = parse_kind(&cert_type.kind)?;
        CertificateWorkflow::validate_application(kind, &application.payload)?;
        self.check_applicant(&application).await?;

        let fee_paid = input.fee_paid.unwrap_or(cert_type.fee);
        let birth_year = self.birth_year_of(application.citizen_id).await?;
        let payload = payload_json(&application.payload)?;

        for _attempt in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = number::generate(birth_year, Utc::now().year(), &self.codes)?;
            let now = Utc::now();

            let txn = self
                .db
                .begin()
                .await
                .map_err(certificate_err)?;

            let certificate = certificates::ActiveModel {
                id: Set(Uuid::now_v7()),
                citizen_id: Set(application.citizen_id),
                applicant_name: Set(application.applicant_name.clone()),
                certificate_type_id: Set(cert_type.id),
                status: Set(CertificateStatus::Issued.as_str().to_string()),
                certificate_number: Set(Some(candidate.clone())),
                issued_at: Set(Some(now.into())),
                fee_paid: Set(fee_paid),
                payload: Set(payload.clone()),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };

            let created = match certificate.insert(&txn).await {
                Ok(model) => model,
                Err(e) if unique_violation(&e).is_some() => {
                    txn.rollback()
                        .await
                        .map_err(certificate_err)?;
                    continue;
                }
                Err(e) => return Err(certificate_err(e)),
            };

            self.append_fee_entry(&txn, &created).await?;

            txn.commit()
                .await
                .map_err(certificate_err)?;

            info!(
                certificate_id = %created.id,
                certificate_number = %candidate,
                "Certificate issued directly"
            );
            return Ok(created);
        }

        Err(CertificateError::GenerationExhausted)
    }

    /// Public verification lookup by certificate number.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::CertificateNotFound` for an unknown number.
    pub async fn verify_by_number(
        &self,
        certificate_number: &str,
    ) -> Result<VerifiedCertificate, CertificateError> {
        let certificate = certificates::Entity::find()
            .filter(certificates::Column::CertificateNumber.eq(certificate_number))
            .one(&self.db)
            .await
            .map_err(certificate_err)?
            .ok_or(CertificateError::CertificateNotFound(Uuid::nil()))?;

        if parse_status(&certificate.status)? != CertificateStatus::Issued {
            // Neutral answer: existence is acknowledged, nothing else leaks
            return Ok(VerifiedCertificate {
                status: "not_issued".to_string(),
                certificate_number: certificate_number.to_string(),
                type_name_en: None,
                type_name_bn: None,
                issued_at: None,
                holder_name: None,
                holder_nid: None,
            });
        }

        let cert_type = self.fetch_type(certificate.certificate_type_id).await?;

        let holder = match certificate.citizen_id {
            Some(citizen_id) => citizens::Entity::find_by_id(citizen_id)
                .one(&self.db)
                .await
                .map_err(certificate_err)?,
            None => None,
        };

        Ok(VerifiedCertificate {
            status: "issued".to_string(),
            certificate_number: certificate_number.to_string(),
            type_name_en: Some(cert_type.name_en),
            type_name_bn: Some(cert_type.name_bn),
            issued_at: certificate.issued_at,
            holder_name: holder.as_ref().map(|c| c.name_en.clone()),
            holder_nid: holder.as_ref().map(|c| c.nid.clone()),
        })
    }

    /// Finds a certificate by ID.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::CertificateNotFound` for an unknown ID.
    pub async fn find_by_id(
        &self,
        certificate_id: Uuid,
    ) -> Result<certificates::Model, CertificateError> {
        self.fetch(certificate_id).await
    }

    async fn fetch(&self, certificate_id: Uuid) -> Result<certificates::Model, CertificateError> {
        certificates::Entity::find_by_id(certificate_id)
            .one(&self.db)
            .await
            .map_err(certificate_err)?
            .ok_or(CertificateError::CertificateNotFound(certificate_id))
    }

    async fn fetch_type(
        &self,
        type_id: Uuid,
    ) -> Result<certificate_types::Model, CertificateError> {
        certificate_types::Entity::find_by_id(type_id)
            .one(&self.db)
            .await
            .map_err(certificate_err)?
            .ok_or(CertificateError::TypeNotFound(type_id))
    }

    /// Linked citizens must be approved records; manual applicants must at
    /// least carry a name.
    async fn check_applicant(&self, input: &ApplyCertificateInput) -> Result<(), CertificateError> {
        match input.citizen_id {
            Some(citizen_id) => {
                let citizen = citizens::Entity::find_by_id(citizen_id)
                    .one(&self.db)
                    .await
                    .map_err(certificate_err)?
                    .ok_or(CertificateError::CitizenNotEligible(citizen_id))?;

                if CitizenStatus::parse(&citizen.status) != Some(CitizenStatus::Approved) {
                    return Err(CertificateError::CitizenNotEligible(citizen_id));
                }
                Ok(())
            }
            None => {
                let has_name = input
                    .applicant_name
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty());
                if has_name {
                    Ok(())
                } else {
                    Err(CertificateError::MissingField("applicant_name"))
                }
            }
        }
    }

    async fn birth_year_of(&self, citizen_id: Option<Uuid>) -> Result<Option<i32>, CertificateError> {
        match citizen_id {
            Some(id) => {
                let citizen = citizens::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(certificate_err)?
                    .ok_or(CertificateError::CitizenNotEligible(id))?;
                Ok(Some(citizen.date_of_birth.year()))
            }
            None => Ok(None),
        }
    }

    async fn append_fee_entry(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        certificate: &certificates::Model,
    ) -> Result<(), CertificateError> {
        if certificate.fee_paid <= Decimal::ZERO {
            return Ok(());
        }

        LedgerRepository::append_with(
            txn,
            LedgerSource::Certificate,
            certificate.id,
            certificate.citizen_id,
            certificate.fee_paid,
            &format!("Certificate fee for {}", certificate.id),
        )
        .await
        .map_err(certificate_err)?;

        Ok(())
    }
}

fn parse_status(raw: &str) -> Result<CertificateStatus, CertificateError> {
    CertificateStatus::parse(raw)
        .ok_or_else(|| CertificateError::Database(format!("corrupt certificate status {raw:?}")))
}

fn parse_kind(raw: &str) -> Result<nagorik_core::certificate::CertificateKind, CertificateError> {
    nagorik_core::certificate::CertificateKind::parse(raw)
        .ok_or_else(|| CertificateError::Database(format!("corrupt certificate kind {raw:?}")))
}

fn payload_json(payload: &CertificatePayload) -> Result<serde_json::Value, CertificateError> {
    serde_json::to_value(payload)
        .map_err(|err| CertificateError::Database(format!("serialize certificate payload: {err}")))
}
