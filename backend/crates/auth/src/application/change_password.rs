//! Change Password Use Case

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::require_all;
use crate::application::sign_in::password_hash;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::error::{AuthError, AuthResult};

pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

pub struct ChangePasswordUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Confirmation is checked before the old password is verified
    pub async fn execute(&self, principal: &Principal, input: ChangePasswordInput) -> AuthResult<()> {
        require_all(&[
            &input.old_password,
            &input.new_password,
            &input.confirm_new_password,
        ])?;

        if input.new_password != input.confirm_new_password {
            return Err(AuthError::PasswordMismatch);
        }

        let old = ClearTextPassword::for_verification(input.old_password);
        if !password_hash(principal).verify(&old, self.config.pepper()) {
            return Err(AuthError::InvalidOldPassword);
        }

        let new_hash = ClearTextPassword::new(input.new_password)?.hash(self.config.pepper())?;

        match principal.clone() {
            Principal::Student(mut student) => {
                student.set_password(new_hash);
                self.repo.update_student(&student).await?;
            }
            Principal::Teacher(mut teacher) => {
                teacher.set_password(new_hash);
                self.repo.update_teacher(&teacher).await?;
            }
        }

        tracing::info!(principal_id = %principal.id(), "Password changed");

        Ok(())
    }
}
