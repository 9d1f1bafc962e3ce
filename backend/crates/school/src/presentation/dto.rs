//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that missing values reach the use case
//! and fail with its own message. Ids in request bodies stay strings until
//! the use case parses them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    AppointmentView, BookAppointmentInput, CreateAppointmentInput, DepartmentInput, FeedbackInput,
    FeedbackPatch, NotificationInput, ScheduleAppointmentInput, SubjectInput,
};
use crate::domain::entity::{
    Appointment, Department, Feedback, Notification, StudentSummary, Subject, TeacherSummary,
};
use crate::domain::value_object::appointment_status::AppointmentStatus;

// ============================================================================
// Appointment requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    #[serde(alias = "teacher")]
    pub teacher_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(alias = "subject")]
    pub purpose: Option<String>,
}

impl From<BookAppointmentRequest> for BookAppointmentInput {
    fn from(req: BookAppointmentRequest) -> Self {
        Self {
            teacher_id: req.teacher_id.unwrap_or_default(),
            purpose: req.purpose.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            time: req.time.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentRequest {
    #[serde(alias = "student")]
    pub student_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(alias = "subject")]
    pub purpose: Option<String>,
}

impl From<ScheduleAppointmentRequest> for ScheduleAppointmentInput {
    fn from(req: ScheduleAppointmentRequest) -> Self {
        Self {
            student_id: req.student_id.unwrap_or_default(),
            purpose: req.purpose.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            time: req.time.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(alias = "studentId")]
    pub student: Option<String>,
    #[serde(alias = "teacherId")]
    pub teacher: Option<String>,
    #[serde(alias = "subject")]
    pub purpose: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl From<CreateAppointmentRequest> for CreateAppointmentInput {
    fn from(req: CreateAppointmentRequest) -> Self {
        Self {
            student_id: req.student.unwrap_or_default(),
            teacher_id: req.teacher.unwrap_or_default(),
            purpose: req.purpose.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            time: req.time.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentStatusRequest {
    pub status: Option<String>,
}

// ============================================================================
// Appointment responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub student: Uuid,
    pub teacher: Uuid,
    pub purpose: String,
    /// `YYYY-MM-DD`
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.appointment_id.into_uuid(),
            student: a.student_id.into_uuid(),
            teacher: a.teacher_id.into_uuid(),
            purpose: a.purpose.clone(),
            date: a.date,
            time: a.time.clone(),
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Name and email of the other party
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&TeacherSummary> for ParticipantResponse {
    fn from(t: &TeacherSummary) -> Self {
        Self {
            id: t.teacher_id.into_uuid(),
            name: t.name.clone(),
            email: t.email.clone(),
        }
    }
}

impl From<&StudentSummary> for ParticipantResponse {
    fn from(s: &StudentSummary) -> Self {
        Self {
            id: s.student_id.into_uuid(),
            name: s.name.clone(),
            email: s.email.clone(),
        }
    }
}

/// Student listing entry; `teacherInfo` is null when the teacher is gone
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAppointmentResponse {
    #[serde(flatten)]
    pub appointment: AppointmentResponse,
    pub teacher_info: Option<ParticipantResponse>,
}

impl From<&AppointmentView<TeacherSummary>> for StudentAppointmentResponse {
    fn from(view: &AppointmentView<TeacherSummary>) -> Self {
        Self {
            appointment: (&view.appointment).into(),
            teacher_info: view.counterpart.as_ref().map(Into::into),
        }
    }
}

/// Teacher listing entry; `studentInfo` is null when the student is gone
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAppointmentResponse {
    #[serde(flatten)]
    pub appointment: AppointmentResponse,
    pub student_info: Option<ParticipantResponse>,
}

impl From<&AppointmentView<StudentSummary>> for TeacherAppointmentResponse {
    fn from(view: &AppointmentView<StudentSummary>) -> Self {
        Self {
            appointment: (&view.appointment).into(),
            student_info: view.counterpart.as_ref().map(Into::into),
        }
    }
}

// ============================================================================
// Departments and subjects
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<DepartmentRequest> for DepartmentInput {
    fn from(req: DepartmentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Department> for DepartmentResponse {
    fn from(d: &Department) -> Self {
        Self {
            id: d.department_id.into_uuid(),
            name: d.name.clone(),
            description: d.description.clone(),
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "departmentId")]
    pub department: Option<String>,
}

impl From<SubjectRequest> for SubjectInput {
    fn from(req: SubjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            department: req.department,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub department: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Subject> for SubjectResponse {
    fn from(s: &Subject) -> Self {
        Self {
            id: s.subject_id.into_uuid(),
            name: s.name.clone(),
            description: s.description.clone(),
            department: s.department_id.into_uuid(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    pub appointment: Option<String>,
    pub student: Option<String>,
    pub teacher: Option<String>,
    pub rating: Option<i64>,
    pub comments: Option<String>,
}

impl From<FeedbackRequest> for FeedbackInput {
    fn from(req: FeedbackRequest) -> Self {
        Self {
            appointment: req.appointment.unwrap_or_default(),
            student: req.student.unwrap_or_default(),
            teacher: req.teacher.unwrap_or_default(),
            rating: req.rating,
            comments: req.comments,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackPatchRequest {
    pub rating: Option<i64>,
    pub comments: Option<String>,
}

impl From<FeedbackPatchRequest> for FeedbackPatch {
    fn from(req: FeedbackPatchRequest) -> Self {
        Self {
            rating: req.rating,
            comments: req.comments,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub appointment: Uuid,
    pub student: Uuid,
    pub teacher: Uuid,
    pub rating: u8,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(f: &Feedback) -> Self {
        Self {
            id: f.feedback_id.into_uuid(),
            appointment: f.appointment_id.into_uuid(),
            student: f.student_id.into_uuid(),
            teacher: f.teacher_id.into_uuid(),
            rating: f.rating.value(),
            comments: f.comments.clone(),
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    #[serde(alias = "userId")]
    pub user: Option<String>,
    pub message: Option<String>,
}

impl From<NotificationRequest> for NotificationInput {
    fn from(req: NotificationRequest) -> Self {
        Self {
            user: req.user.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user: Uuid,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Notification> for NotificationResponse {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.notification_id.into_uuid(),
            user: n.user_id,
            message: n.message.clone(),
            read: n.read,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}
