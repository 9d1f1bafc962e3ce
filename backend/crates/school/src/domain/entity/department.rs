//! Department Entity

use chrono::{DateTime, Utc};
use kernel::id::DepartmentId;

#[derive(Debug, Clone)]
pub struct Department {
    pub department_id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            department_id: DepartmentId::new(),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
