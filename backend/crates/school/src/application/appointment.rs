//! Appointment Use Cases
//!
//! Creation (booking by a student, scheduling by a teacher, direct creation),
//! the teacher-side lifecycle actions, the admin override and the scoped
//! listings.

use std::collections::HashMap;
use std::sync::Arc;

use auth::Principal;
use chrono::NaiveDate;
use kernel::id::{AppointmentId, StudentId, TeacherId};

use crate::application::notify::{notify, when};
use crate::application::require_all;
use crate::domain::entity::{Appointment, StudentSummary, TeacherSummary};
use crate::domain::repository::{
    AppointmentRepository, NotificationRepository, ParticipantRepository,
};
use crate::domain::value_object::{
    appointment_date::parse_date,
    appointment_status::{AppointmentAction, AppointmentStatus},
};
use crate::error::{SchoolError, SchoolResult};

/// Validated purpose, date and time
struct Details {
    purpose: String,
    date: NaiveDate,
    time: String,
}

fn details(purpose: String, date: &str, time: String) -> SchoolResult<Details> {
    Ok(Details {
        purpose,
        date: parse_date(date)?,
        time,
    })
}

// ============================================================================
// Booking (student)
// ============================================================================

pub struct BookAppointmentInput {
    pub teacher_id: String,
    pub purpose: String,
    pub date: String,
    pub time: String,
}

pub struct BookAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> BookAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: BookAppointmentInput,
    ) -> SchoolResult<Appointment> {
        let student = principal.as_student().ok_or(SchoolError::NotStudent)?;

        require_all(&[&input.teacher_id, &input.purpose, &input.date, &input.time])?;
        let teacher_id = TeacherId::parse(&input.teacher_id, "teacher")?;
        let details = details(input.purpose, &input.date, input.time)?;

        let teacher = self
            .repo
            .find_teacher_summary(&teacher_id)
            .await?
            .ok_or(SchoolError::TeacherNotFound)?;

        let appointment = Appointment::new(
            student.student_id,
            teacher.teacher_id,
            details.purpose,
            details.date,
            details.time,
        );
        self.repo.create_appointment(&appointment).await?;

        tracing::info!(
            appointment_id = %appointment.appointment_id,
            student_id = %appointment.student_id,
            teacher_id = %appointment.teacher_id,
            "Appointment booked"
        );

        notify(
            self.repo.as_ref(),
            teacher.teacher_id.into_uuid(),
            format!(
                "New appointment request from {} on {}",
                student.name,
                when(appointment.date, &appointment.time)
            ),
        )
        .await;

        Ok(appointment)
    }
}

// ============================================================================
// Scheduling (teacher)
// ============================================================================

pub struct ScheduleAppointmentInput {
    pub student_id: String,
    pub purpose: String,
    pub date: String,
    pub time: String,
}

pub struct ScheduleAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> ScheduleAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: ScheduleAppointmentInput,
    ) -> SchoolResult<Appointment> {
        let teacher = principal.as_teacher().ok_or_else(|| {
            SchoolError::Forbidden("Only teachers can schedule appointments".to_string())
        })?;

        require_all(&[&input.student_id, &input.purpose, &input.date, &input.time])?;
        let student_id = StudentId::parse(&input.student_id, "student")?;
        let details = details(input.purpose, &input.date, input.time)?;

        let student = self
            .repo
            .find_student_summary(&student_id)
            .await?
            .ok_or(SchoolError::StudentNotFound)?;

        let appointment = Appointment::new(
            student.student_id,
            teacher.teacher_id,
            details.purpose,
            details.date,
            details.time,
        );
        self.repo.create_appointment(&appointment).await?;

        tracing::info!(
            appointment_id = %appointment.appointment_id,
            student_id = %appointment.student_id,
            teacher_id = %appointment.teacher_id,
            "Appointment scheduled"
        );

        notify(
            self.repo.as_ref(),
            student.student_id.into_uuid(),
            format!(
                "{} scheduled an appointment with you on {}",
                teacher.name,
                when(appointment.date, &appointment.time)
            ),
        )
        .await;

        Ok(appointment)
    }
}

// ============================================================================
// Direct creation (either party or an admin)
// ============================================================================

pub struct CreateAppointmentInput {
    pub student_id: String,
    pub teacher_id: String,
    pub purpose: String,
    pub date: String,
    pub time: String,
}

pub struct CreateAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> CreateAppointmentUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + NotificationRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateAppointmentInput,
    ) -> SchoolResult<Appointment> {
        require_all(&[
            &input.student_id,
            &input.teacher_id,
            &input.purpose,
            &input.date,
            &input.time,
        ])?;
        let student_id = StudentId::parse(&input.student_id, "student")?;
        let teacher_id = TeacherId::parse(&input.teacher_id, "teacher")?;
        let details = details(input.purpose, &input.date, input.time)?;

        let caller = principal.id();
        if !principal.is_admin()
            && caller != student_id.into_uuid()
            && caller != teacher_id.into_uuid()
        {
            return Err(SchoolError::Forbidden(
                "You are not authorized to create this appointment".to_string(),
            ));
        }

        let student = self
            .repo
            .find_student_summary(&student_id)
            .await?
            .ok_or(SchoolError::StudentNotFound)?;
        self.repo
            .find_teacher_summary(&teacher_id)
            .await?
            .ok_or(SchoolError::TeacherNotFound)?;

        let appointment = Appointment::new(
            student_id,
            teacher_id,
            details.purpose,
            details.date,
            details.time,
        );
        self.repo.create_appointment(&appointment).await?;

        tracing::info!(
            appointment_id = %appointment.appointment_id,
            created_by = %caller,
            "Appointment created"
        );

        notify(
            self.repo.as_ref(),
            teacher_id.into_uuid(),
            format!(
                "New appointment with {} on {}",
                student.name,
                when(appointment.date, &appointment.time)
            ),
        )
        .await;

        Ok(appointment)
    }
}

// ============================================================================
// Lifecycle actions (teacher party or admin)
// ============================================================================

pub struct ChangeAppointmentStatusUseCase<R>
where
    R: AppointmentRepository + NotificationRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> ChangeAppointmentStatusUseCase<R>
where
    R: AppointmentRepository + NotificationRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Approve, reject, cancel or complete
    ///
    /// Only the appointment's own teacher (or an admin) may act, and only
    /// along the lifecycle edges.
    pub async fn execute(
        &self,
        principal: &Principal,
        appointment_id: AppointmentId,
        action: AppointmentAction,
    ) -> SchoolResult<Appointment> {
        let mut appointment = self
            .repo
            .find_appointment(&appointment_id)
            .await?
            .ok_or(SchoolError::AppointmentNotFound)?;

        if !principal.is_admin() && !appointment.is_teacher(principal.id()) {
            return Err(SchoolError::Forbidden(format!(
                "You are not authorized to {} this appointment",
                action.verb()
            )));
        }

        let previous = appointment.status;
        let status = appointment.transition(action)?;
        if !self
            .repo
            .update_appointment_status(&appointment, Some(previous))
            .await?
        {
            // Someone else moved the appointment between our read and write
            let current = self
                .repo
                .find_appointment(&appointment_id)
                .await?
                .ok_or(SchoolError::AppointmentNotFound)?;
            return Err(SchoolError::InvalidTransition {
                action: action.verb(),
                status: current.status,
            });
        }

        tracing::info!(
            appointment_id = %appointment.appointment_id,
            status = %status,
            by = %principal.id(),
            "Appointment status changed"
        );

        notify(
            self.repo.as_ref(),
            appointment.student_id.into_uuid(),
            format!(
                "Your appointment on {} was {}",
                when(appointment.date, &appointment.time),
                status
            ),
        )
        .await;

        Ok(appointment)
    }
}

// ============================================================================
// Admin override
// ============================================================================

pub struct OverrideAppointmentStatusUseCase<R>
where
    R: AppointmentRepository + NotificationRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> OverrideAppointmentStatusUseCase<R>
where
    R: AppointmentRepository + NotificationRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Set any status, regardless of the current one
    pub async fn execute(
        &self,
        appointment_id: AppointmentId,
        status: &str,
    ) -> SchoolResult<Appointment> {
        if status.trim().is_empty() {
            return Err(SchoolError::Required("Status"));
        }
        let status: AppointmentStatus = status.parse()?;

        let mut appointment = self
            .repo
            .find_appointment(&appointment_id)
            .await?
            .ok_or(SchoolError::AppointmentNotFound)?;

        let previous = appointment.status;
        appointment.override_status(status);
        if !self
            .repo
            .update_appointment_status(&appointment, None)
            .await?
        {
            return Err(SchoolError::AppointmentNotFound);
        }

        tracing::info!(
            appointment_id = %appointment.appointment_id,
            from = %previous,
            to = %status,
            "Appointment status overridden"
        );

        if previous != status {
            notify(
                self.repo.as_ref(),
                appointment.student_id.into_uuid(),
                format!(
                    "Your appointment on {} is now {}",
                    when(appointment.date, &appointment.time),
                    status
                ),
            )
            .await;
        }

        Ok(appointment)
    }
}

// ============================================================================
// Listings
// ============================================================================

/// An appointment together with the other party, when it still exists
#[derive(Debug, Clone)]
pub struct AppointmentView<P> {
    pub appointment: Appointment,
    pub counterpart: Option<P>,
}

pub struct ListAppointmentsUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> ListAppointmentsUseCase<R>
where
    R: AppointmentRepository + ParticipantRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The student's own appointments, each with its teacher
    pub async fn for_student(
        &self,
        student_id: &StudentId,
    ) -> SchoolResult<Vec<AppointmentView<TeacherSummary>>> {
        let appointments = self.repo.list_appointments_by_student(student_id).await?;

        let mut teachers: HashMap<TeacherId, Option<TeacherSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            if !teachers.contains_key(&appointment.teacher_id) {
                let summary = self.repo.find_teacher_summary(&appointment.teacher_id).await?;
                teachers.insert(appointment.teacher_id, summary);
            }
            let counterpart = teachers.get(&appointment.teacher_id).cloned().flatten();
            views.push(AppointmentView {
                appointment,
                counterpart,
            });
        }

        Ok(views)
    }

    /// The teacher's own appointments, each with its student
    pub async fn for_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> SchoolResult<Vec<AppointmentView<StudentSummary>>> {
        let appointments = self.repo.list_appointments_by_teacher(teacher_id).await?;

        let mut students: HashMap<StudentId, Option<StudentSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            if !students.contains_key(&appointment.student_id) {
                let summary = self.repo.find_student_summary(&appointment.student_id).await?;
                students.insert(appointment.student_id, summary);
            }
            let counterpart = students.get(&appointment.student_id).cloned().flatten();
            views.push(AppointmentView {
                appointment,
                counterpart,
            });
        }

        Ok(views)
    }

    /// Every appointment (admin)
    pub async fn all(&self) -> SchoolResult<Vec<Appointment>> {
        self.repo.list_appointments().await
    }
}
