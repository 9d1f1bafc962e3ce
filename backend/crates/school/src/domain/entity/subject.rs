//! Subject Entity

use chrono::{DateTime, Utc};
use kernel::id::{DepartmentId, SubjectId};

/// A subject taught within a department
#[derive(Debug, Clone)]
pub struct Subject {
    pub subject_id: SubjectId,
    pub name: String,
    pub description: Option<String>,
    pub department_id: DepartmentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    pub fn new(name: String, description: Option<String>, department_id: DepartmentId) -> Self {
        let now = Utc::now();
        Self {
            subject_id: SubjectId::new(),
            name,
            description,
            department_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
