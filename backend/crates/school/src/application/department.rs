//! Department Service

use std::sync::Arc;

use kernel::id::DepartmentId;

use crate::application::non_blank;
use crate::domain::entity::Department;
use crate::domain::repository::DepartmentRepository;
use crate::error::{SchoolError, SchoolResult};

/// Create body, and partial update body
#[derive(Debug, Clone, Default)]
pub struct DepartmentInput {
    pub name: Option<String>,
    /// On update, a blank value clears the description
    pub description: Option<String>,
}

pub struct DepartmentService<R>
where
    R: DepartmentRepository,
{
    repo: Arc<R>,
}

impl<R> DepartmentService<R>
where
    R: DepartmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: DepartmentInput) -> SchoolResult<Department> {
        let name = non_blank(input.name).ok_or(SchoolError::Required("Department name"))?;

        let department = Department::new(name, non_blank(input.description));
        self.repo.create_department(&department).await?;

        tracing::info!(department_id = %department.department_id, "Department created");

        Ok(department)
    }

    pub async fn get(&self, department_id: DepartmentId) -> SchoolResult<Department> {
        self.repo
            .find_department(&department_id)
            .await?
            .ok_or(SchoolError::DepartmentNotFound)
    }

    pub async fn list(&self) -> SchoolResult<Vec<Department>> {
        self.repo.list_departments().await
    }

    pub async fn update(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> SchoolResult<Department> {
        let mut department = self.get(department_id).await?;

        if let Some(name) = non_blank(input.name) {
            department.name = name;
        }
        if input.description.is_some() {
            department.description = non_blank(input.description);
        }
        department.touch();

        self.repo.update_department(&department).await?;
        Ok(department)
    }

    pub async fn delete(&self, department_id: DepartmentId) -> SchoolResult<()> {
        if !self.repo.delete_department(&department_id).await? {
            return Err(SchoolError::DepartmentNotFound);
        }

        tracing::info!(department_id = %department_id, "Department deleted");
        Ok(())
    }
}
