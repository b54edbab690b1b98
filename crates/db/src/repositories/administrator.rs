//! Administrator repository for account operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use nagorik_shared::RegistryError;

use crate::entities::administrators;
use crate::repositories::{registry_err, unique_violation};

/// Administrator repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AdministratorRepository {
    db: DatabaseConnection,
}

impl AdministratorRepository {
    /// Creates a new administrator repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an administrator by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<administrators::Model>, RegistryError> {
        administrators::Entity::find()
            .filter(administrators::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(registry_err)
    }

    /// Finds an administrator by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<administrators::Model>, RegistryError> {
        administrators::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(registry_err)
    }

    /// Finds the administrator a bound email belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<administrators::Model>, RegistryError> {
        administrators::Entity::find()
            .filter(administrators::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(registry_err)
    }

    /// Creates a new administrator.
    ///
    /// The password must already be an Argon2id PHC hash.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Conflict` if the username is taken.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        full_name: &str,
    ) -> Result<administrators::Model, RegistryError> {
        let now = chrono::Utc::now().into();
        let admin = administrators::ActiveModel {
            id: Set(Uuid::now_v7()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            full_name: Set(full_name.to_string()),
            email: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        admin.insert(&self.db).await.map_err(|e| {
            if unique_violation(&e).is_some() {
                RegistryError::Conflict(format!("username {username} is already taken"))
            } else {
                registry_err(e)
            }
        })
    }

    /// Binds a verified email to the administrator account.
    ///
    /// A bound email activates the one-time-passcode second factor on every
    /// subsequent login.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown administrator.
    pub async fn bind_email(
        &self,
        admin_id: Uuid,
        email: &str,
    ) -> Result<administrators::Model, RegistryError> {
        let admin = administrators::Entity::find_by_id(admin_id)
            .one(&self.db)
            .await
            .map_err(registry_err)?
            .ok_or_else(|| RegistryError::NotFound(format!("administrator {admin_id}")))?;

        let mut active: administrators::ActiveModel = admin.into();
        active.email = Set(Some(email.to_string()));
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await.map_err(registry_err)
    }
}
