//! Student Entity

use chrono::{DateTime, Utc};
use kernel::id::StudentId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// A registered student
///
/// The password hash never leaves the crate through a response DTO.
#[derive(Debug, Clone)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    /// Unique, lower-cased
    pub email: Email,
    pub grade: Option<String>,
    pub password_hash: HashedPassword,
    /// `Student`, or `Admin` once promoted
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn new(
        name: String,
        email: Email,
        grade: Option<String>,
        password_hash: HashedPassword,
    ) -> Self {
        let now = Utc::now();
        Self {
            student_id: StudentId::new(),
            name,
            email,
            grade,
            password_hash,
            user_role: UserRole::Student,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    pub fn set_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn promote_to_admin(&mut self) {
        self.user_role = UserRole::Admin;
        self.updated_at = Utc::now();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
