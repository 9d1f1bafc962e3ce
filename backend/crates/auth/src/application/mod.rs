//! Application Layer
//!
//! Use cases and application services.

pub mod account;
pub mod change_password;
pub mod check_session;
pub mod config;
pub mod profile;
pub mod register;
pub mod sign_in;

// Re-exports
pub use account::{DeleteStudentUseCase, DeleteTeacherUseCase, PromoteStudentUseCase};
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use profile::{
    AdminUpdateTeacherUseCase, StudentPatch, TeacherDetailsInput, TeacherPatch,
    UpdateStudentUseCase, UpdateTeacherDetailsUseCase,
};
pub use register::{
    RegisterStudentInput, RegisterStudentUseCase, RegisterTeacherInput, RegisterTeacherUseCase,
};
pub use sign_in::{PrincipalKind, SignInInput, SignInOutput, SignInUseCase};

use crate::error::{AuthError, AuthResult};

/// Every value must contain something other than whitespace
pub(crate) fn require_all(values: &[&str]) -> AuthResult<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Trimmed value, or `None` when absent or blank
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
