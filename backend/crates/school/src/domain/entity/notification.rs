//! Notification Entity

use chrono::{DateTime, Utc};
use kernel::id::NotificationId;
use uuid::Uuid;

/// A message addressed to a student or a teacher
#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_id: NotificationId,
    /// Student or teacher id; not checked against either table
    pub user_id: Uuid,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: Uuid, message: String) -> Self {
        let now = Utc::now();
        Self {
            notification_id: NotificationId::new(),
            user_id,
            message,
            read: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Idempotent
    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.updated_at = Utc::now();
        }
    }
}
