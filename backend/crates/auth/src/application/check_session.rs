//! Check Session Use Case
//!
//! Resolves a session token to the principal it was issued for.

use std::sync::Arc;

use kernel::id::{StudentId, TeacherId};

use crate::application::config::AuthConfig;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::error::{AuthError, AuthResult};

pub struct CheckSessionUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CheckSessionUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Verify the token, then look the subject up among students first
    /// and teachers second
    pub async fn execute(&self, token: &str) -> AuthResult<Principal> {
        let subject = self.config.verify_token(token)?;

        if let Some(student) = self
            .repo
            .find_student_by_id(&StudentId::from_uuid(subject))
            .await?
        {
            return Ok(Principal::Student(student));
        }

        if let Some(teacher) = self
            .repo
            .find_teacher_by_id(&TeacherId::from_uuid(subject))
            .await?
        {
            return Ok(Principal::Teacher(teacher));
        }

        tracing::debug!(subject = %subject, "Token subject no longer exists");
        Err(AuthError::PrincipalNotFound)
    }
}
