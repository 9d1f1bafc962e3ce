//! Authenticated Principal
//!
//! The actor behind a request: either a student or a teacher record.
//! Role checks read the explicit `user_role`, never the presence of fields.

use uuid::Uuid;

use crate::domain::entity::{student::Student, teacher::Teacher};
use crate::domain::value_object::{email::Email, user_role::UserRole};

#[derive(Debug, Clone)]
pub enum Principal {
    Student(Student),
    Teacher(Teacher),
}

impl Principal {
    /// Raw identifier (token subject)
    pub fn id(&self) -> Uuid {
        match self {
            Principal::Student(s) => s.student_id.into_uuid(),
            Principal::Teacher(t) => t.teacher_id.into_uuid(),
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Principal::Student(s) => s.user_role,
            Principal::Teacher(t) => t.user_role,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Principal::Student(s) => &s.name,
            Principal::Teacher(t) => &t.name,
        }
    }

    pub fn email(&self) -> &Email {
        match self {
            Principal::Student(s) => &s.email,
            Principal::Teacher(t) => &t.email,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Principal::Student(s) => Some(s),
            Principal::Teacher(_) => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Principal::Teacher(t) => Some(t),
            Principal::Student(_) => None,
        }
    }

    /// Whether this principal is the given account or an admin
    pub fn is_self_or_admin(&self, id: Uuid) -> bool {
        self.id() == id || self.is_admin()
    }
}

impl From<Student> for Principal {
    fn from(student: Student) -> Self {
        Principal::Student(student)
    }
}

impl From<Teacher> for Principal {
    fn from(teacher: Teacher) -> Self {
        Principal::Teacher(teacher)
    }
}
