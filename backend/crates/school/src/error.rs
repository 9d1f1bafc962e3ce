//! School Error Types
//!
//! Domain failures of the school crate. They render through
//! `kernel::error::AppError`, so every failure uses the response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::appointment_status::AppointmentStatus;

pub type SchoolResult<T> = Result<T, SchoolError>;

#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("All fields are required")]
    MissingFields,

    /// A single required field, e.g. `Required("Department name")`
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("Date must be formatted as YYYY-MM-DD")]
    InvalidDate,

    #[error("Invalid appointment status: {0}")]
    InvalidStatus(String),

    /// Feedback names a student or teacher other than the appointment's
    #[error("Student and teacher must match the appointment")]
    FeedbackParties,

    #[error("Not authorized as a student")]
    NotStudent,

    #[error("{0}")]
    Forbidden(String),

    #[error("Cannot {action} an appointment that is {status}")]
    InvalidTransition {
        action: &'static str,
        status: AppointmentStatus,
    },

    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Department not found")]
    DepartmentNotFound,

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Feedback not found")]
    FeedbackNotFound,

    #[error("Notification not found")]
    NotificationNotFound,

    /// Already classified failure, e.g. a malformed path id
    #[error(transparent)]
    Rejected(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchoolError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SchoolError::MissingFields
            | SchoolError::Required(_)
            | SchoolError::InvalidRating
            | SchoolError::InvalidDate
            | SchoolError::InvalidStatus(_)
            | SchoolError::FeedbackParties => ErrorKind::BadRequest,
            SchoolError::NotStudent => ErrorKind::Unauthorized,
            SchoolError::Forbidden(_) => ErrorKind::Forbidden,
            SchoolError::InvalidTransition { .. } => ErrorKind::Conflict,
            SchoolError::AppointmentNotFound
            | SchoolError::StudentNotFound
            | SchoolError::TeacherNotFound
            | SchoolError::DepartmentNotFound
            | SchoolError::SubjectNotFound
            | SchoolError::FeedbackNotFound
            | SchoolError::NotificationNotFound => ErrorKind::NotFound,
            SchoolError::Rejected(e) => e.kind(),
            SchoolError::Database(_) | SchoolError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping the database classification
    pub fn into_app_error(self) -> AppError {
        match self {
            SchoolError::Rejected(e) => e,
            SchoolError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            SchoolError::Database(e) => {
                tracing::error!(error = %e, "School database error");
            }
            SchoolError::Internal(msg) => {
                tracing::error!(message = %msg, "School internal error");
            }
            SchoolError::Forbidden(msg) => {
                tracing::warn!(reason = %msg, "Forbidden school operation");
            }
            _ => {
                tracing::debug!(error = %self, "School error");
            }
        }
    }
}

impl IntoResponse for SchoolError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
