//! One-time passcode repository.
//!
//! The replace on issuance runs delete-then-insert inside one transaction
//! against the unique email column, so two live tokens never coexist for the
//! same address. Expired tokens are reaped only by the next issuance; a
//! failed verification never deletes anything.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use nagorik_core::otp::{OtpError, OtpPurpose, OtpService, generate_code, hash_code};

use crate::entities::verification_tokens;
use crate::repositories::otp_err;

/// Passcode repository.
#[derive(Debug, Clone)]
pub struct OtpRepository {
    db: DatabaseConnection,
}

impl OtpRepository {
    /// Creates a new passcode repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a fresh passcode for an email, replacing any existing token.
    ///
    /// Returns the raw code for the caller to hand to the email transport;
    /// only its hash is stored.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::Database` if the replace fails.
    pub async fn issue(
        &self,
        email: &str,
        purpose: OtpPurpose,
        admin_id: Uuid,
        ttl_minutes: i64,
    ) -> Result<String, OtpError> {
        let code = generate_code();
        let now = Utc::now();
        let expires_at = OtpService::expiry_for(now, ttl_minutes);

        let txn = self
            .db
            .begin()
            .await
            .map_err(otp_err)?;

        verification_tokens::Entity::delete_many()
            .filter(verification_tokens::Column::Email.eq(email))
            .exec(&txn)
            .await
            .map_err(otp_err)?;

        let token = verification_tokens::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(email.to_string()),
            code_hash: Set(hash_code(&code)),
            purpose: Set(purpose.as_str().to_string()),
            admin_id: Set(admin_id),
            expires_at: Set(expires_at.into()),
            created_at: Set(now.into()),
        };

        token
            .insert(&txn)
            .await
            .map_err(otp_err)?;

        txn.commit()
            .await
            .map_err(otp_err)?;

        info!(email, purpose = %purpose, "One-time passcode issued");
        Ok(code)
    }

    /// Verifies a presented passcode.
    ///
    /// On success the token is consumed (single use) and its purpose and
    /// administrator returned. On any failure the token stays where it is.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::NoToken`, `OtpError::Mismatch`, or
    /// `OtpError::Expired`, all rendered identically to callers.
    pub async fn verify(&self, email: &str, code: &str) -> Result<(OtpPurpose, Uuid), OtpError> {
        let token = verification_tokens::Entity::find()
            .filter(verification_tokens::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(otp_err)?
            .ok_or(OtpError::NoToken)?;

        OtpService::check(&token.code_hash, token.expires_at.into(), code, Utc::now())?;

        let purpose = OtpPurpose::parse(&token.purpose)
            .ok_or_else(|| OtpError::Database(format!("corrupt token purpose {:?}", token.purpose)))?;
        let admin_id = token.admin_id;

        token
            .delete(&self.db)
            .await
            .map_err(otp_err)?;

        info!(email, purpose = %purpose, "One-time passcode verified");
        Ok((purpose, admin_id))
    }
}
