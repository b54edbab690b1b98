//! Notification repository.
//!
//! Notifications are fire-and-forget: callers log a warning on failure and
//! never let it affect the primary operation.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::notifications;

/// Notification repository.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    db: DatabaseConnection,
}

impl NotificationRepository {
    /// Creates a new notification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a notification for the reporting surface to pick up.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; callers log and discard it.
    pub async fn emit(
        &self,
        title: &str,
        message: &str,
        severity: &str,
        link: Option<&str>,
    ) -> Result<notifications::Model, DbErr> {
        let notification = notifications::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            severity: Set(severity.to_string()),
            link: Set(link.map(ToString::to_string)),
            created_at: Set(Utc::now().into()),
        };

        notification.insert(&self.db).await
    }

    /// Lists notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<notifications::Model>, DbErr> {
        notifications::Entity::find()
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
