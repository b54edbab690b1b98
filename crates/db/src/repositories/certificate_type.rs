//! Certificate type catalog repository.
//!
//! The catalog is append-only: issued certificates must always resolve their
//! type, so there is no delete operation. Fees are the only mutable field.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use nagorik_core::certificate::{CertificateError, CertificateKind};

use crate::entities::certificate_types;
use crate::repositories::certificate_err;

/// Input for adding a certificate type to the catalog.
#[derive(Debug, Clone)]
pub struct CreateCertificateTypeInput {
    /// Canonical kind selecting the payload variant.
    pub kind: CertificateKind,
    /// Display name (English).
    pub name_en: String,
    /// Display name (Bangla).
    pub name_bn: String,
    /// Issuance fee.
    pub fee: Decimal,
    /// Optional narrative template.
    pub template: Option<String>,
}

/// Certificate type repository.
#[derive(Debug, Clone)]
pub struct CertificateTypeRepository {
    db: DatabaseConnection,
}

impl CertificateTypeRepository {
    /// Creates a new certificate type repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a type to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank names or a negative fee.
    pub async fn create(
        &self,
        input: CreateCertificateTypeInput,
    ) -> Result<certificate_types::Model, CertificateError> {
        if input.name_en.trim().is_empty() {
            return Err(CertificateError::MissingField("name_en"));
        }
        if input.name_bn.trim().is_empty() {
            return Err(CertificateError::MissingField("name_bn"));
        }
        if input.fee < Decimal::ZERO {
            return Err(CertificateError::NegativeFee);
        }

        let now = Utc::now();
        let cert_type = certificate_types::ActiveModel {
            id: Set(Uuid::now_v7()),
            kind: Set(input.kind.as_str().to_string()),
            name_en: Set(input.name_en),
            name_bn: Set(input.name_bn),
            fee: Set(input.fee),
            template: Set(input.template),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = cert_type
            .insert(&self.db)
            .await
            .map_err(certificate_err)?;

        info!(type_id = %created.id, kind = %created.kind, "Certificate type added");
        Ok(created)
    }

    /// Updates a type's fee.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::TypeNotFound` for an unknown ID.
    pub async fn update_fee(
        &self,
        type_id: Uuid,
        fee: Decimal,
    ) -> Result<certificate_types::Model, CertificateError> {
        if fee < Decimal::ZERO {
            return Err(CertificateError::NegativeFee);
        }

        let cert_type = self.find_by_id(type_id).await?;

        let mut active: certificate_types::ActiveModel = cert_type.into();
        active.fee = Set(fee);
        active.updated_at = Set(Utc::now().into());

        active
            .update(&self.db)
            .await
            .map_err(certificate_err)
    }

    /// Finds a type by ID.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::TypeNotFound` for an unknown ID.
    pub async fn find_by_id(
        &self,
        type_id: Uuid,
    ) -> Result<certificate_types::Model, CertificateError> {
        certificate_types::Entity::find_by_id(type_id)
            .one(&self.db)
            .await
            .map_err(certificate_err)?
            .ok_or(CertificateError::TypeNotFound(type_id))
    }

    /// Lists the catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<certificate_types::Model>, CertificateError> {
        certificate_types::Entity::find()
            .order_by_asc(certificate_types::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(certificate_err)
    }
}
