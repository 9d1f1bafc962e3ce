//! Account Removal and Promotion

use std::sync::Arc;

use kernel::id::{StudentId, TeacherId};

use crate::domain::entity::{principal::Principal, student::Student};
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::error::{AuthError, AuthResult};

pub struct DeleteStudentUseCase<R>
where
    R: StudentRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteStudentUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A student may remove only their own account; admins may remove any
    pub async fn execute(&self, principal: &Principal, student_id: StudentId) -> AuthResult<()> {
        if !principal.is_self_or_admin(student_id.into_uuid()) {
            return Err(AuthError::Forbidden(
                "You are not authorized to delete this student",
            ));
        }

        if !self.repo.delete_student(&student_id).await? {
            return Err(AuthError::StudentNotFound);
        }

        tracing::info!(student_id = %student_id, deleted_by = %principal.id(), "Student deleted");

        Ok(())
    }
}

/// Authorization is left to the route: the teacher themself or the admin gate
pub struct DeleteTeacherUseCase<R>
where
    R: TeacherRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTeacherUseCase<R>
where
    R: TeacherRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, teacher_id: TeacherId) -> AuthResult<()> {
        if !self.repo.delete_teacher(&teacher_id).await? {
            return Err(AuthError::TeacherNotFound);
        }

        tracing::info!(teacher_id = %teacher_id, "Teacher deleted");

        Ok(())
    }
}

pub struct PromoteStudentUseCase<R>
where
    R: StudentRepository,
{
    repo: Arc<R>,
}

impl<R> PromoteStudentUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Grants the admin role; promoting an admin again is a no-op
    pub async fn execute(&self, student_id: StudentId) -> AuthResult<Student> {
        let mut student = self
            .repo
            .find_student_by_id(&student_id)
            .await?
            .ok_or(AuthError::StudentNotFound)?;

        if !student.is_admin() {
            student.promote_to_admin();
            self.repo.update_student(&student).await?;
            tracing::info!(student_id = %student_id, "Student promoted to admin");
        }

        Ok(student)
    }
}
