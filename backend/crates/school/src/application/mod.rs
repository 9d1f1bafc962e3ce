//! Application Layer
//!
//! Use cases for the appointment lifecycle and services for the plain
//! CRUD records (departments, subjects, feedback, notifications).

pub mod appointment;
pub mod department;
pub mod feedback;
pub mod notification;
pub mod notify;
pub mod subject;

pub use appointment::{
    AppointmentView, BookAppointmentInput, BookAppointmentUseCase, ChangeAppointmentStatusUseCase,
    CreateAppointmentInput, CreateAppointmentUseCase, ListAppointmentsUseCase,
    OverrideAppointmentStatusUseCase, ScheduleAppointmentInput, ScheduleAppointmentUseCase,
};
pub use department::{DepartmentInput, DepartmentService};
pub use feedback::{FeedbackInput, FeedbackPatch, FeedbackService};
pub use notification::{NotificationInput, NotificationService};
pub use subject::{SubjectInput, SubjectService};

use crate::error::{SchoolError, SchoolResult};

/// Every value must contain something other than whitespace
pub(crate) fn require_all(values: &[&str]) -> SchoolResult<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(SchoolError::MissingFields);
    }
    Ok(())
}

/// Trimmed value, or `None` when absent or blank
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
