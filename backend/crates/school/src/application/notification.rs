//! Notification Service

use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::id::NotificationId;
use uuid::Uuid;

use crate::application::require_all;
use crate::domain::entity::Notification;
use crate::domain::repository::NotificationRepository;
use crate::error::{SchoolError, SchoolResult};

pub struct NotificationInput {
    /// Recipient id (student or teacher)
    pub user: String,
    pub message: String,
}

pub struct NotificationService<R>
where
    R: NotificationRepository,
{
    repo: Arc<R>,
}

impl<R> NotificationService<R>
where
    R: NotificationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NotificationInput) -> SchoolResult<Notification> {
        require_all(&[&input.user, &input.message])?;
        let user_id = parse_user_id(&input.user)?;

        let notification = Notification::new(user_id, input.message.trim().to_string());
        self.repo.create_notification(&notification).await?;

        Ok(notification)
    }

    pub async fn list(&self) -> SchoolResult<Vec<Notification>> {
        self.repo.list_notifications().await
    }

    pub async fn list_for_user(&self, user: &str) -> SchoolResult<Vec<Notification>> {
        let user_id = parse_user_id(user)?;
        self.repo.list_notifications_by_user(user_id).await
    }

    /// Marking an already read notification succeeds as well
    pub async fn mark_read(&self, notification_id: NotificationId) -> SchoolResult<Notification> {
        self.repo
            .mark_notification_read(&notification_id)
            .await?
            .ok_or(SchoolError::NotificationNotFound)
    }

    pub async fn delete(&self, notification_id: NotificationId) -> SchoolResult<()> {
        if !self.repo.delete_notification(&notification_id).await? {
            return Err(SchoolError::NotificationNotFound);
        }
        Ok(())
    }
}

fn parse_user_id(raw: &str) -> SchoolResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| AppError::bad_request("Invalid user id").with_source(e).into())
}
