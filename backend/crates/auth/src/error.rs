//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,

    /// No token in the cookie or `Authorization` header
    #[error("Not authorized, no token")]
    NoToken,

    /// Bad signature, malformed or expired
    #[error("Not authorized, token failed")]
    TokenFailed,

    /// Token is valid but its subject no longer exists
    #[error("Not authorized, user not found")]
    PrincipalNotFound,

    #[error("Not authorized as an admin")]
    NotAdmin,

    #[error("Not authorized as a teacher")]
    NotTeacher,

    #[error("Not authorized as a student")]
    NotStudent,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid old password")]
    InvalidOldPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("{0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("Student already exists")]
    StudentExists,

    #[error("Username, email or phone already exists")]
    TeacherExists,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("{0}")]
    Forbidden(&'static str),

    /// Validation failure raised by a value object
    #[error(transparent)]
    Rejected(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::PasswordMismatch
            | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::NoToken
            | AuthError::TokenFailed
            | AuthError::PrincipalNotFound
            | AuthError::NotAdmin
            | AuthError::NotTeacher
            | AuthError::NotStudent
            | AuthError::InvalidCredentials
            | AuthError::InvalidOldPassword => ErrorKind::Unauthorized,
            AuthError::Forbidden(_) => ErrorKind::Forbidden,
            AuthError::StudentExists | AuthError::TeacherExists | AuthError::EmailTaken => {
                ErrorKind::Conflict
            }
            AuthError::StudentNotFound | AuthError::TeacherNotFound => ErrorKind::NotFound,
            AuthError::Rejected(e) => e.kind(),
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping the database classification
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Rejected(e) => e,
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenFailed => {
                tracing::warn!("Rejected session token");
            }
            AuthError::InvalidOldPassword => {
                tracing::warn!("Password change with wrong old password");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Encode => AuthError::Internal(err.to_string()),
            _ => AuthError::TokenFailed,
        }
    }
}
