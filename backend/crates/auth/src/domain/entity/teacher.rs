//! Teacher Entity

use chrono::{DateTime, Utc};
use kernel::id::TeacherId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};

/// A registered teacher
///
/// `user_name`, `email` and `phone` are each unique across teachers.
#[derive(Debug, Clone)]
pub struct Teacher {
    pub teacher_id: TeacherId,
    pub name: String,
    pub user_name: UserName,
    pub department: String,
    pub subject: String,
    pub email: Email,
    pub phone: String,
    pub password_hash: HashedPassword,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a teacher
pub struct NewTeacher {
    pub name: String,
    pub user_name: UserName,
    pub department: String,
    pub subject: String,
    pub email: Email,
    pub phone: String,
    pub password_hash: HashedPassword,
}

impl Teacher {
    pub fn new(fields: NewTeacher) -> Self {
        let now = Utc::now();
        Self {
            teacher_id: TeacherId::new(),
            name: fields.name,
            user_name: fields.user_name,
            department: fields.department,
            subject: fields.subject,
            email: fields.email,
            phone: fields.phone,
            password_hash: fields.password_hash,
            user_role: UserRole::Teacher,
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

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
