//! Citizen repository for registration, approval, and identification.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{info, warn};
use uuid::Uuid;

use nagorik_core::citizen::{Address, CitizenError, CitizenStatus, CitizenWorkflow, Gender, PersonName};

use crate::entities::{citizens, households};
use crate::repositories::notification::NotificationRepository;
use crate::repositories::{citizen_err, unique_violation};

/// Input for creating a citizen record.
#[derive(Debug, Clone)]
pub struct CreateCitizenInput {
    /// National ID, globally unique.
    pub nid: String,
    /// Citizen's name in both languages.
    pub name: PersonName,
    /// Father's name in both languages.
    pub father_name: PersonName,
    /// Mother's name in both languages.
    pub mother_name: PersonName,
    /// Contact phone number.
    pub phone: String,
    /// Date of birth; also drives the certificate number prefix.
    pub date_of_birth: NaiveDate,
    /// Gender.
    pub gender: Gender,
    /// Household code grouping citizens who share one taxable property.
    pub household_code: Option<String>,
    /// Residential address.
    pub address: Address,
}

impl CreateCitizenInput {
    fn validate(&self) -> Result<(), CitizenError> {
        if self.nid.trim().is_empty() {
            return Err(CitizenError::MissingField("nid"));
        }
        if !self.name.is_complete() {
            return Err(CitizenError::MissingField("name"));
        }
        if !self.father_name.is_complete() {
            return Err(CitizenError::MissingField("father_name"));
        }
        if !self.mother_name.is_complete() {
            return Err(CitizenError::MissingField("mother_name"));
        }
        if self.phone.trim().is_empty() {
            return Err(CitizenError::MissingField("phone"));
        }
        if self.address.village.trim().is_empty() {
            return Err(CitizenError::MissingField("address.village"));
        }
        if self.address.district.trim().is_empty() {
            return Err(CitizenError::MissingField("address.district"));
        }
        Ok(())
    }
}

/// Citizen repository for registration and workflow operations.
#[derive(Debug, Clone)]
pub struct CitizenRepository {
    db: DatabaseConnection,
}

impl CitizenRepository {
    /// Creates a new citizen repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a citizen through public self-application.
    ///
    /// The record starts `pending` and is released only after administrator
    /// approval.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::DuplicateNid` if the national ID is taken, or a
    /// validation error for incomplete input.
    pub async fn register(&self, input: CreateCitizenInput) -> Result<citizens::Model, CitizenError> {
        let citizen = self.insert(input, CitizenStatus::Pending).await?;

        info!(citizen_id = %citizen.id, "Citizen self-application received");
        self.notify_registration(&citizen).await;

        Ok(citizen)
    }

    /// Registers a citizen entered by an administrator.
    ///
    /// The record is created `approved` directly; no review step follows.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::DuplicateNid` if the national ID is taken, or a
    /// validation error for incomplete input.
    pub async fn admin_register(
        &self,
        input: CreateCitizenInput,
    ) -> Result<citizens::Model, CitizenError> {
        let citizen = self.insert(input, CitizenStatus::Approved).await?;
        info!(citizen_id = %citizen.id, "Citizen registered by administrator");
        Ok(citizen)
    }

    async fn insert(
        &self,
        input: CreateCitizenInput,
        status: CitizenStatus,
    ) -> Result<citizens::Model, CitizenError> {
        input.validate()?;

        let household_id = match &input.household_code {
            Some(code) => Some(self.find_or_create_household(code).await?),
            None => None,
        };

        let now = Utc::now();
        let citizen = citizens::ActiveModel {
            id: Set(Uuid::now_v7()),
            nid: Set(input.nid.trim().to_string()),
            name_en: Set(input.name.en),
            name_bn: Set(input.name.bn),
            father_name_en: Set(input.father_name.en),
            father_name_bn: Set(input.father_name.bn),
            mother_name_en: Set(input.mother_name.en),
            mother_name_bn: Set(input.mother_name.bn),
            phone: Set(input.phone),
            date_of_birth: Set(input.date_of_birth),
            gender: Set(input.gender.as_str().to_string()),
            household_id: Set(household_id),
            village: Set(input.address.village),
            post_office: Set(input.address.post_office),
            postal_code: Set(input.address.postal_code),
            district: Set(input.address.district),
            status: Set(status.as_str().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let nid = input.nid.trim().to_string();
        citizen.insert(&self.db).await.map_err(|e| {
            if unique_violation(&e).is_some() {
                CitizenError::DuplicateNid(nid)
            } else {
                citizen_err(e)
            }
        })
    }

    /// Resolves a household code, creating the household on first use.
    async fn find_or_create_household(&self, code: &str) -> Result<Uuid, CitizenError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CitizenError::MissingField("household_code"));
        }

        let existing = households::Entity::find()
            .filter(households::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(citizen_err)?;

        if let Some(household) = existing {
            return Ok(household.id);
        }

        let household = households::ActiveModel {
            id: Set(Uuid::now_v7()),
            code: Set(code.to_string()),
            created_at: Set(Utc::now().into()),
        };

        match household.insert(&self.db).await {
            Ok(h) => Ok(h.id),
            // Lost a create race; the row now exists
            Err(e) if unique_violation(&e).is_some() => {
                let h = households::Entity::find()
                    .filter(households::Column::Code.eq(code))
                    .one(&self.db)
                    .await
                    .map_err(citizen_err)?
                    .ok_or_else(|| CitizenError::UnknownHousehold(code.to_string()))?;
                Ok(h.id)
            }
            Err(e) => Err(citizen_err(e)),
        }
    }

    /// Sets a pending citizen's status to `approved` or `rejected`.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::InvalidTransition` for any other transition and
    /// `CitizenError::CitizenNotFound` for an unknown ID.
    pub async fn set_status(
        &self,
        citizen_id: Uuid,
        target: CitizenStatus,
    ) -> Result<citizens::Model, CitizenError> {
        let citizen = self.find_by_id(citizen_id).await?;

        let current = parse_status(&citizen.status)?;
        let next = CitizenWorkflow::set_status(current, target)?;

        let mut active: citizens::ActiveModel = citizen.into();
        active.status = Set(next.as_str().to_string());
        active.updated_at = Set(Utc::now().into());

        let updated = active
            .update(&self.db)
            .await
            .map_err(citizen_err)?;

        info!(citizen_id = %updated.id, status = %updated.status, "Citizen status changed");
        Ok(updated)
    }

    /// Identifies a citizen by national ID and date of birth.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::NoIdentityMatch` when nothing matches, and the
    /// policy refusals for pending/rejected records.
    pub async fn identify(
        &self,
        nid: &str,
        date_of_birth: NaiveDate,
    ) -> Result<citizens::Model, CitizenError> {
        let citizen = citizens::Entity::find()
            .filter(citizens::Column::Nid.eq(nid.trim()))
            .filter(citizens::Column::DateOfBirth.eq(date_of_birth))
            .one(&self.db)
            .await
            .map_err(citizen_err)?
            .ok_or(CitizenError::NoIdentityMatch)?;

        CitizenWorkflow::identify_gate(parse_status(&citizen.status)?)?;

        Ok(citizen)
    }

    /// Finds a citizen by ID.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::CitizenNotFound` for an unknown ID.
    pub async fn find_by_id(&self, citizen_id: Uuid) -> Result<citizens::Model, CitizenError> {
        citizens::Entity::find_by_id(citizen_id)
            .one(&self.db)
            .await
            .map_err(citizen_err)?
            .ok_or(CitizenError::CitizenNotFound(citizen_id))
    }

    async fn notify_registration(&self, citizen: &citizens::Model) {
        let notifications = NotificationRepository::new(self.db.clone());
        if let Err(e) = notifications
            .emit(
                "New citizen application",
                &format!("{} applied for registration (NID {})", citizen.name_en, citizen.nid),
                "info",
                Some(&format!("/citizens/{}", citizen.id)),
            )
            .await
        {
            warn!(error = %e, "Failed to write registration notification");
        }
    }
}

/// Parses a stored status string, treating anything unknown as data corruption.
fn parse_status(raw: &str) -> Result<CitizenStatus, CitizenError> {
    CitizenStatus::parse(raw)
        .ok_or_else(|| CitizenError::Database(format!("corrupt citizen status {raw:?}")))
}
