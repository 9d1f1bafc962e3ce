//! Subject Service
//!
//! Subjects belong to a department, which must exist whenever the
//! reference is set.

use std::sync::Arc;

use kernel::id::{DepartmentId, SubjectId};

use crate::application::non_blank;
use crate::domain::entity::Subject;
use crate::domain::repository::{DepartmentRepository, SubjectRepository};
use crate::error::{SchoolError, SchoolResult};

#[derive(Debug, Clone, Default)]
pub struct SubjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Department id
    pub department: Option<String>,
}

pub struct SubjectService<R>
where
    R: SubjectRepository + DepartmentRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> SubjectService<R>
where
    R: SubjectRepository + DepartmentRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: SubjectInput) -> SchoolResult<Subject> {
        let (Some(name), Some(department)) = (non_blank(input.name), non_blank(input.department))
        else {
            return Err(SchoolError::MissingFields);
        };
        let department_id = self.existing_department(&department).await?;

        let subject = Subject::new(name, non_blank(input.description), department_id);
        self.repo.create_subject(&subject).await?;

        tracing::info!(
            subject_id = %subject.subject_id,
            department_id = %department_id,
            "Subject created"
        );

        Ok(subject)
    }

    pub async fn get(&self, subject_id: SubjectId) -> SchoolResult<Subject> {
        self.repo
            .find_subject(&subject_id)
            .await?
            .ok_or(SchoolError::SubjectNotFound)
    }

    pub async fn list(&self) -> SchoolResult<Vec<Subject>> {
        self.repo.list_subjects().await
    }

    pub async fn update(&self, subject_id: SubjectId, input: SubjectInput) -> SchoolResult<Subject> {
        let mut subject = self.get(subject_id).await?;

        if let Some(name) = non_blank(input.name) {
            subject.name = name;
        }
        if input.description.is_some() {
            subject.description = non_blank(input.description);
        }
        if let Some(department) = non_blank(input.department) {
            subject.department_id = self.existing_department(&department).await?;
        }
        subject.touch();

        self.repo.update_subject(&subject).await?;
        Ok(subject)
    }

    pub async fn delete(&self, subject_id: SubjectId) -> SchoolResult<()> {
        if !self.repo.delete_subject(&subject_id).await? {
            return Err(SchoolError::SubjectNotFound);
        }

        tracing::info!(subject_id = %subject_id, "Subject deleted");
        Ok(())
    }

    async fn existing_department(&self, raw: &str) -> SchoolResult<DepartmentId> {
        let department_id = DepartmentId::parse(raw, "department")?;
        self.repo
            .find_department(&department_id)
            .await?
            .ok_or(SchoolError::DepartmentNotFound)?;
        Ok(department_id)
    }
}
