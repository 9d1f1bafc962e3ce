//! Notification side effects
//!
//! Lifecycle use cases leave a notification for the other party. Delivery
//! is best-effort: a failure is logged and the request still succeeds.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entity::Notification;
use crate::domain::repository::NotificationRepository;
use crate::domain::value_object::appointment_date::DATE_FORMAT;

pub async fn notify<R>(repo: &R, user_id: Uuid, message: String)
where
    R: NotificationRepository + Sync,
{
    let notification = Notification::new(user_id, message);

    match repo.create_notification(&notification).await {
        Ok(()) => {
            tracing::debug!(
                user_id = %user_id,
                notification_id = %notification.notification_id,
                "Notification delivered"
            );
        }
        Err(e) => {
            tracing::warn!(user_id = %user_id, error = %e, "Failed to deliver notification");
        }
    }
}

/// "2025-03-14 at 10:30"
pub(crate) fn when(date: NaiveDate, time: &str) -> String {
    format!("{} at {}", date.format(DATE_FORMAT), time.trim())
}
