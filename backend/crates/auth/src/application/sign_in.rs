//! Sign In Use Case
//!
//! Checks email and password against the student or teacher store and
//! issues a session token for the matching principal.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::application::require_all;
use crate::domain::entity::principal::Principal;
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Which store a login is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    Student,
    Teacher,
}

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInOutput {
    pub principal: Principal,
    /// Signed session token, set as a cookie and returned in the body
    pub token: String,
}

pub struct SignInUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: StudentRepository + TeacherRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, kind: PrincipalKind, input: SignInInput) -> AuthResult<SignInOutput> {
        require_all(&[&input.email, &input.password])?;

        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let principal: Principal = match kind {
            PrincipalKind::Student => self
                .repo
                .find_student_by_email(&email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?
                .into(),
            PrincipalKind::Teacher => self
                .repo
                .find_teacher_by_email(&email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?
                .into(),
        };

        let password = ClearTextPassword::for_verification(input.password);
        if !password_hash(&principal).verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.config.issue_token(principal.id())?;

        tracing::info!(
            principal_id = %principal.id(),
            role = %principal.role(),
            "Principal signed in"
        );

        Ok(SignInOutput { principal, token })
    }
}

pub(crate) fn password_hash(principal: &Principal) -> &HashedPassword {
    match principal {
        Principal::Student(s) => &s.password_hash,
        Principal::Teacher(t) => &t.password_hash,
    }
}
