//! Repository Traits
//!
//! Interfaces for school persistence. Implementations live in `infra`.

use kernel::id::{AppointmentId, DepartmentId, FeedbackId, NotificationId, StudentId, SubjectId, TeacherId};
use uuid::Uuid;

use crate::domain::entity::{
    Appointment, Department, Feedback, Notification, StudentSummary, Subject, TeacherSummary,
};
use crate::domain::value_object::AppointmentStatus;
use crate::error::SchoolResult;

/// Appointment repository trait
#[trait_variant::make(AppointmentRepository: Send)]
pub trait LocalAppointmentRepository {
    async fn create_appointment(&self, appointment: &Appointment) -> SchoolResult<()>;

    async fn find_appointment(
        &self,
        appointment_id: &AppointmentId,
    ) -> SchoolResult<Option<Appointment>>;

    /// Persist `status` and `updated_at`; the other columns never change.
    ///
    /// With `expected` set, the row is only written while its stored status
    /// still equals it. Returns `false` when nothing was written.
    async fn update_appointment_status(
        &self,
        appointment: &Appointment,
        expected: Option<AppointmentStatus>,
    ) -> SchoolResult<bool>;

    /// Newest first
    async fn list_appointments(&self) -> SchoolResult<Vec<Appointment>>;

    async fn list_appointments_by_student(
        &self,
        student_id: &StudentId,
    ) -> SchoolResult<Vec<Appointment>>;

    async fn list_appointments_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> SchoolResult<Vec<Appointment>>;
}

/// Lookups of the principals appointments refer to
#[trait_variant::make(ParticipantRepository: Send)]
pub trait LocalParticipantRepository {
    async fn find_student_summary(
        &self,
        student_id: &StudentId,
    ) -> SchoolResult<Option<StudentSummary>>;

    async fn find_teacher_summary(
        &self,
        teacher_id: &TeacherId,
    ) -> SchoolResult<Option<TeacherSummary>>;
}

/// Department repository trait
#[trait_variant::make(DepartmentRepository: Send)]
pub trait LocalDepartmentRepository {
    async fn create_department(&self, department: &Department) -> SchoolResult<()>;

    async fn find_department(
        &self,
        department_id: &DepartmentId,
    ) -> SchoolResult<Option<Department>>;

    async fn list_departments(&self) -> SchoolResult<Vec<Department>>;

    async fn update_department(&self, department: &Department) -> SchoolResult<()>;

    /// Returns `false` when no row matched
    async fn delete_department(&self, department_id: &DepartmentId) -> SchoolResult<bool>;
}

/// Subject repository trait
#[trait_variant::make(SubjectRepository: Send)]
pub trait LocalSubjectRepository {
    async fn create_subject(&self, subject: &Subject) -> SchoolResult<()>;

    async fn find_subject(&self, subject_id: &SubjectId) -> SchoolResult<Option<Subject>>;

    async fn list_subjects(&self) -> SchoolResult<Vec<Subject>>;

    async fn update_subject(&self, subject: &Subject) -> SchoolResult<()>;

    async fn delete_subject(&self, subject_id: &SubjectId) -> SchoolResult<bool>;
}

/// Feedback repository trait
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    async fn create_feedback(&self, feedback: &Feedback) -> SchoolResult<()>;

    async fn find_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<Option<Feedback>>;

    async fn list_feedback(&self) -> SchoolResult<Vec<Feedback>>;

    async fn update_feedback(&self, feedback: &Feedback) -> SchoolResult<()>;

    async fn delete_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<bool>;
}

/// Notification repository trait
#[trait_variant::make(NotificationRepository: Send)]
pub trait LocalNotificationRepository {
    async fn create_notification(&self, notification: &Notification) -> SchoolResult<()>;

    async fn list_notifications(&self) -> SchoolResult<Vec<Notification>>;

    async fn list_notifications_by_user(&self, user_id: Uuid) -> SchoolResult<Vec<Notification>>;

    /// Set the read flag and return the updated row, `None` when absent
    async fn mark_notification_read(
        &self,
        notification_id: &NotificationId,
    ) -> SchoolResult<Option<Notification>>;

    async fn delete_notification(&self, notification_id: &NotificationId) -> SchoolResult<bool>;
}

/// Storage for every school record, as needed by the HTTP layer
pub trait SchoolStore:
    AppointmentRepository
    + ParticipantRepository
    + DepartmentRepository
    + SubjectRepository
    + FeedbackRepository
    + NotificationRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> SchoolStore for T where
    T: AppointmentRepository
        + ParticipantRepository
        + DepartmentRepository
        + SubjectRepository
        + FeedbackRepository
        + NotificationRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
