//! HTTP Handlers

use auth::middleware::CurrentPrincipal;
use axum::extract::{Path, State};
use kernel::id::{AppointmentId, DepartmentId, FeedbackId, NotificationId, SubjectId};
use kernel::response::{ApiResponse, Payload};
use std::sync::Arc;

use crate::application::{
    BookAppointmentUseCase, ChangeAppointmentStatusUseCase, CreateAppointmentUseCase,
    DepartmentService, FeedbackService, ListAppointmentsUseCase, NotificationService,
    OverrideAppointmentStatusUseCase, ScheduleAppointmentUseCase, SubjectService,
};
use crate::domain::repository::SchoolStore;
use crate::domain::value_object::appointment_status::AppointmentAction;
use crate::error::{SchoolError, SchoolResult};
use crate::presentation::dto::{
    AppointmentResponse, AppointmentStatusRequest, BookAppointmentRequest,
    CreateAppointmentRequest, DepartmentRequest, DepartmentResponse, FeedbackPatchRequest,
    FeedbackRequest, FeedbackResponse, NotificationRequest, NotificationResponse,
    ScheduleAppointmentRequest, StudentAppointmentResponse, SubjectRequest, SubjectResponse,
    TeacherAppointmentResponse,
};

/// Shared state for school handlers
#[derive(Clone)]
pub struct SchoolAppState<S>
where
    S: SchoolStore,
{
    pub repo: Arc<S>,
}

// ============================================================================
// Student appointments
// ============================================================================

/// POST /student/book-appointment
pub async fn book_appointment<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Payload(req): Payload<BookAppointmentRequest>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    let use_case = BookAppointmentUseCase::new(state.repo.clone());
    let appointment = use_case.execute(&principal, req.into()).await?;

    Ok(ApiResponse::created(
        (&appointment).into(),
        "Appointment booked successfully",
    ))
}

/// GET /student/appointments
pub async fn student_appointments<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> SchoolResult<ApiResponse<Vec<StudentAppointmentResponse>>>
where
    S: SchoolStore,
{
    let student = principal.as_student().ok_or(SchoolError::NotStudent)?;

    let use_case = ListAppointmentsUseCase::new(state.repo.clone());
    let views = use_case.for_student(&student.student_id).await?;

    Ok(ApiResponse::ok(
        views.iter().map(Into::into).collect(),
        "Appointments fetched successfully",
    ))
}

// ============================================================================
// Teacher appointments
// ============================================================================

/// POST /teacher/schedule-appointment
pub async fn schedule_appointment<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Payload(req): Payload<ScheduleAppointmentRequest>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    let use_case = ScheduleAppointmentUseCase::new(state.repo.clone());
    let appointment = use_case.execute(&principal, req.into()).await?;

    Ok(ApiResponse::created(
        (&appointment).into(),
        "Appointment scheduled successfully",
    ))
}

/// GET /teacher/appointments
pub async fn teacher_appointments<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> SchoolResult<ApiResponse<Vec<TeacherAppointmentResponse>>>
where
    S: SchoolStore,
{
    let teacher = principal.as_teacher().ok_or_else(|| {
        SchoolError::Forbidden("Only teachers have teacher appointments".to_string())
    })?;

    let use_case = ListAppointmentsUseCase::new(state.repo.clone());
    let views = use_case.for_teacher(&teacher.teacher_id).await?;

    Ok(ApiResponse::ok(
        views.iter().map(Into::into).collect(),
        "Appointments fetched successfully",
    ))
}

/// PUT /teacher/appointments/approve/{id}
pub async fn approve_appointment<S>(
    state: State<SchoolAppState<S>>,
    principal: CurrentPrincipal,
    id: Path<String>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    change_status(state, principal, id, AppointmentAction::Approve).await
}

/// PUT /teacher/appointments/cancel/{id}
pub async fn cancel_appointment<S>(
    state: State<SchoolAppState<S>>,
    principal: CurrentPrincipal,
    id: Path<String>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    change_status(state, principal, id, AppointmentAction::Cancel).await
}

/// PUT /teacher/appointments/reject/{id}
pub async fn reject_appointment<S>(
    state: State<SchoolAppState<S>>,
    principal: CurrentPrincipal,
    id: Path<String>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    change_status(state, principal, id, AppointmentAction::Reject).await
}

/// PUT /teacher/appointments/complete/{id}
pub async fn complete_appointment<S>(
    state: State<SchoolAppState<S>>,
    principal: CurrentPrincipal,
    id: Path<String>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    change_status(state, principal, id, AppointmentAction::Complete).await
}

// ============================================================================
// Appointment resource
// ============================================================================

/// POST /appointment/appointments
pub async fn create_appointment<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Payload(req): Payload<CreateAppointmentRequest>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    let use_case = CreateAppointmentUseCase::new(state.repo.clone());
    let appointment = use_case.execute(&principal, req.into()).await?;

    Ok(ApiResponse::created(
        (&appointment).into(),
        "Appointment created successfully",
    ))
}

/// GET /appointment/appointments (admin)
pub async fn list_appointments<S>(
    State(state): State<SchoolAppState<S>>,
) -> SchoolResult<ApiResponse<Vec<AppointmentResponse>>>
where
    S: SchoolStore,
{
    let use_case = ListAppointmentsUseCase::new(state.repo.clone());
    let appointments = use_case.all().await?;

    Ok(ApiResponse::ok(
        appointments.iter().map(Into::into).collect(),
        "All appointments retrieved successfully",
    ))
}

/// PATCH /appointment/appointments/{id} (admin)
pub async fn override_appointment_status<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
    Payload(req): Payload<AppointmentStatusRequest>,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    let appointment_id = AppointmentId::parse(&id, "appointment")?;

    let use_case = OverrideAppointmentStatusUseCase::new(state.repo.clone());
    let appointment = use_case
        .execute(appointment_id, req.status.as_deref().unwrap_or_default())
        .await?;

    Ok(ApiResponse::ok(
        (&appointment).into(),
        "Appointment updated successfully",
    ))
}

// ============================================================================
// Departments
// ============================================================================

/// POST /department/departments
pub async fn create_department<S>(
    State(state): State<SchoolAppState<S>>,
    Payload(req): Payload<DepartmentRequest>,
) -> SchoolResult<ApiResponse<DepartmentResponse>>
where
    S: SchoolStore,
{
    let department = DepartmentService::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(ApiResponse::created(
        (&department).into(),
        "Department created successfully",
    ))
}

/// GET /department/departments
pub async fn list_departments<S>(
    State(state): State<SchoolAppState<S>>,
) -> SchoolResult<ApiResponse<Vec<DepartmentResponse>>>
where
    S: SchoolStore,
{
    let departments = DepartmentService::new(state.repo.clone()).list().await?;

    Ok(ApiResponse::ok(
        departments.iter().map(Into::into).collect(),
        "All departments fetched successfully",
    ))
}

/// GET /department/departments/{id}
pub async fn get_department<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<DepartmentResponse>>
where
    S: SchoolStore,
{
    let department_id = DepartmentId::parse(&id, "department")?;
    let department = DepartmentService::new(state.repo.clone())
        .get(department_id)
        .await?;

    Ok(ApiResponse::ok(
        (&department).into(),
        "Department fetched successfully",
    ))
}

/// PUT /department/departments/{id}
pub async fn update_department<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
    Payload(req): Payload<DepartmentRequest>,
) -> SchoolResult<ApiResponse<DepartmentResponse>>
where
    S: SchoolStore,
{
    let department_id = DepartmentId::parse(&id, "department")?;
    let department = DepartmentService::new(state.repo.clone())
        .update(department_id, req.into())
        .await?;

    Ok(ApiResponse::ok(
        (&department).into(),
        "Department updated successfully",
    ))
}

/// DELETE /department/departments/{id}
pub async fn delete_department<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<()>>
where
    S: SchoolStore,
{
    let department_id = DepartmentId::parse(&id, "department")?;
    DepartmentService::new(state.repo.clone())
        .delete(department_id)
        .await?;

    Ok(ApiResponse::ok((), "Department deleted successfully"))
}

// ============================================================================
// Subjects
// ============================================================================

/// POST /subject/subjects
pub async fn create_subject<S>(
    State(state): State<SchoolAppState<S>>,
    Payload(req): Payload<SubjectRequest>,
) -> SchoolResult<ApiResponse<SubjectResponse>>
where
    S: SchoolStore,
{
    let subject = SubjectService::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(ApiResponse::created(
        (&subject).into(),
        "Subject created successfully",
    ))
}

/// GET /subject/subjects
pub async fn list_subjects<S>(
    State(state): State<SchoolAppState<S>>,
) -> SchoolResult<ApiResponse<Vec<SubjectResponse>>>
where
    S: SchoolStore,
{
    let subjects = SubjectService::new(state.repo.clone()).list().await?;

    Ok(ApiResponse::ok(
        subjects.iter().map(Into::into).collect(),
        "All subjects fetched successfully",
    ))
}

/// GET /subject/subjects/{id}
pub async fn get_subject<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<SubjectResponse>>
where
    S: SchoolStore,
{
    let subject_id = SubjectId::parse(&id, "subject")?;
    let subject = SubjectService::new(state.repo.clone()).get(subject_id).await?;

    Ok(ApiResponse::ok((&subject).into(), "Subject fetched successfully"))
}

/// PUT /subject/subjects/{id}
pub async fn update_subject<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
    Payload(req): Payload<SubjectRequest>,
) -> SchoolResult<ApiResponse<SubjectResponse>>
where
    S: SchoolStore,
{
    let subject_id = SubjectId::parse(&id, "subject")?;
    let subject = SubjectService::new(state.repo.clone())
        .update(subject_id, req.into())
        .await?;

    Ok(ApiResponse::ok((&subject).into(), "Subject updated successfully"))
}

/// DELETE /subject/subjects/{id}
pub async fn delete_subject<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<()>>
where
    S: SchoolStore,
{
    let subject_id = SubjectId::parse(&id, "subject")?;
    SubjectService::new(state.repo.clone())
        .delete(subject_id)
        .await?;

    Ok(ApiResponse::ok((), "Subject deleted successfully"))
}

// ============================================================================
// Feedback
// ============================================================================

/// POST /feedback/feedbacks
pub async fn create_feedback<S>(
    State(state): State<SchoolAppState<S>>,
    Payload(req): Payload<FeedbackRequest>,
) -> SchoolResult<ApiResponse<FeedbackResponse>>
where
    S: SchoolStore,
{
    let feedback = FeedbackService::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(ApiResponse::created(
        (&feedback).into(),
        "Feedback created successfully",
    ))
}

/// GET /feedback/feedbacks
pub async fn list_feedback<S>(
    State(state): State<SchoolAppState<S>>,
) -> SchoolResult<ApiResponse<Vec<FeedbackResponse>>>
where
    S: SchoolStore,
{
    let feedback = FeedbackService::new(state.repo.clone()).list().await?;

    Ok(ApiResponse::ok(
        feedback.iter().map(Into::into).collect(),
        "All feedbacks fetched successfully",
    ))
}

/// GET /feedback/feedbacks/{id}
pub async fn get_feedback<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<FeedbackResponse>>
where
    S: SchoolStore,
{
    let feedback_id = FeedbackId::parse(&id, "feedback")?;
    let feedback = FeedbackService::new(state.repo.clone())
        .get(feedback_id)
        .await?;

    Ok(ApiResponse::ok(
        (&feedback).into(),
        "Feedback fetched successfully",
    ))
}

/// PUT /feedback/feedbacks/{id}
pub async fn update_feedback<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
    Payload(req): Payload<FeedbackPatchRequest>,
) -> SchoolResult<ApiResponse<FeedbackResponse>>
where
    S: SchoolStore,
{
    let feedback_id = FeedbackId::parse(&id, "feedback")?;
    let feedback = FeedbackService::new(state.repo.clone())
        .update(feedback_id, req.into())
        .await?;

    Ok(ApiResponse::ok(
        (&feedback).into(),
        "Feedback updated successfully",
    ))
}

/// DELETE /feedback/feedbacks/{id}
pub async fn delete_feedback<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<()>>
where
    S: SchoolStore,
{
    let feedback_id = FeedbackId::parse(&id, "feedback")?;
    FeedbackService::new(state.repo.clone())
        .delete(feedback_id)
        .await?;

    Ok(ApiResponse::ok((), "Feedback deleted successfully"))
}

// ============================================================================
// Notifications
// ============================================================================

/// POST /notification/notifications
pub async fn create_notification<S>(
    State(state): State<SchoolAppState<S>>,
    Payload(req): Payload<NotificationRequest>,
) -> SchoolResult<ApiResponse<NotificationResponse>>
where
    S: SchoolStore,
{
    let notification = NotificationService::new(state.repo.clone())
        .create(req.into())
        .await?;

    Ok(ApiResponse::created(
        (&notification).into(),
        "Notification created successfully",
    ))
}

/// GET /notification/notifications
pub async fn list_notifications<S>(
    State(state): State<SchoolAppState<S>>,
) -> SchoolResult<ApiResponse<Vec<NotificationResponse>>>
where
    S: SchoolStore,
{
    let notifications = NotificationService::new(state.repo.clone()).list().await?;

    Ok(ApiResponse::ok(
        notifications.iter().map(Into::into).collect(),
        "All notifications fetched successfully",
    ))
}

/// GET /notification/notifications/{userId}
///
/// The segment is a user id here, while PUT/DELETE on the same path take a
/// notification id.
pub async fn user_notifications<S>(
    State(state): State<SchoolAppState<S>>,
    Path(user_id): Path<String>,
) -> SchoolResult<ApiResponse<Vec<NotificationResponse>>>
where
    S: SchoolStore,
{
    let notifications = NotificationService::new(state.repo.clone())
        .list_for_user(&user_id)
        .await?;

    Ok(ApiResponse::ok(
        notifications.iter().map(Into::into).collect(),
        "Notifications fetched successfully",
    ))
}

/// PUT /notification/notifications/{id}/read
pub async fn mark_notification_read<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<NotificationResponse>>
where
    S: SchoolStore,
{
    let notification_id = NotificationId::parse(&id, "notification")?;
    let notification = NotificationService::new(state.repo.clone())
        .mark_read(notification_id)
        .await?;

    Ok(ApiResponse::ok(
        (&notification).into(),
        "Notification marked as read",
    ))
}

/// DELETE /notification/notifications/{id}
pub async fn delete_notification<S>(
    State(state): State<SchoolAppState<S>>,
    Path(id): Path<String>,
) -> SchoolResult<ApiResponse<()>>
where
    S: SchoolStore,
{
    let notification_id = NotificationId::parse(&id, "notification")?;
    NotificationService::new(state.repo.clone())
        .delete(notification_id)
        .await?;

    Ok(ApiResponse::ok((), "Notification deleted successfully"))
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn change_status<S>(
    State(state): State<SchoolAppState<S>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
    action: AppointmentAction,
) -> SchoolResult<ApiResponse<AppointmentResponse>>
where
    S: SchoolStore,
{
    let appointment_id = AppointmentId::parse(&id, "appointment")?;

    let use_case = ChangeAppointmentStatusUseCase::new(state.repo.clone());
    let appointment = use_case.execute(&principal, appointment_id, action).await?;

    let message = match action {
        AppointmentAction::Approve => "Appointment approved successfully",
        AppointmentAction::Reject => "Appointment rejected successfully",
        AppointmentAction::Cancel => "Appointment canceled successfully",
        AppointmentAction::Complete => "Appointment completed successfully",
    };

    Ok(ApiResponse::ok((&appointment).into(), message))
}
