//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{
    AppointmentId, DepartmentId, FeedbackId, NotificationId, StudentId, SubjectId, TeacherId,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    Appointment, Department, Feedback, Notification, StudentSummary, Subject, TeacherSummary,
};
use crate::domain::repository::{
    AppointmentRepository, DepartmentRepository, FeedbackRepository, NotificationRepository,
    ParticipantRepository, SubjectRepository,
};
use crate::domain::value_object::{appointment_status::AppointmentStatus, rating::Rating};
use crate::error::{SchoolError, SchoolResult};

/// PostgreSQL-backed school repository
#[derive(Clone)]
pub struct PgSchoolRepository {
    pool: PgPool,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Appointment Repository Implementation
// ============================================================================

const APPOINTMENT_COLUMNS: &str = r#"
    appointment_id,
    student_id,
    teacher_id,
    purpose,
    appointment_date,
    appointment_time,
    status,
    created_at,
    updated_at
"#;

impl AppointmentRepository for PgSchoolRepository {
    async fn create_appointment(&self, appointment: &Appointment) -> SchoolResult<()> {
        sqlx::query(
            r#"
            INSERT INTO appointments (
                appointment_id,
                student_id,
                teacher_id,
                purpose,
                appointment_date,
                appointment_time,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(appointment.appointment_id.as_uuid())
        .bind(appointment.student_id.as_uuid())
        .bind(appointment.teacher_id.as_uuid())
        .bind(&appointment.purpose)
        .bind(appointment.date)
        .bind(&appointment.time)
        .bind(appointment.status.as_str())
        .bind(appointment.created_at)
        .bind(appointment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_appointment(
        &self,
        appointment_id: &AppointmentId,
    ) -> SchoolResult<Option<Appointment>> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE appointment_id = $1"
        ))
        .bind(appointment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AppointmentRow::into_appointment).transpose()
    }

    async fn update_appointment_status(
        &self,
        appointment: &Appointment,
        expected: Option<AppointmentStatus>,
    ) -> SchoolResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE appointments SET status = $2, updated_at = $3
            WHERE appointment_id = $1 AND ($4::text IS NULL OR status = $4)
            "#,
        )
        .bind(appointment.appointment_id.as_uuid())
        .bind(appointment.status.as_str())
        .bind(appointment.updated_at)
        .bind(expected.map(|status| status.as_str()))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn list_appointments(&self) -> SchoolResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AppointmentRow::into_appointment).collect()
    }

    async fn list_appointments_by_student(
        &self,
        student_id: &StudentId,
    ) -> SchoolResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AppointmentRow::into_appointment).collect()
    }

    async fn list_appointments_by_teacher(
        &self,
        teacher_id: &TeacherId,
    ) -> SchoolResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE teacher_id = $1 ORDER BY created_at DESC"
        ))
        .bind(teacher_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AppointmentRow::into_appointment).collect()
    }
}

// ============================================================================
// Participant Repository Implementation
// ============================================================================

impl ParticipantRepository for PgSchoolRepository {
    async fn find_student_summary(
        &self,
        student_id: &StudentId,
    ) -> SchoolResult<Option<StudentSummary>> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            "SELECT student_id AS id, name, email FROM students WHERE student_id = $1",
        )
        .bind(student_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StudentSummary {
            student_id: StudentId::from_uuid(r.id),
            name: r.name,
            email: r.email,
        }))
    }

    async fn find_teacher_summary(
        &self,
        teacher_id: &TeacherId,
    ) -> SchoolResult<Option<TeacherSummary>> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            "SELECT teacher_id AS id, name, email FROM teachers WHERE teacher_id = $1",
        )
        .bind(teacher_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| TeacherSummary {
            teacher_id: TeacherId::from_uuid(r.id),
            name: r.name,
            email: r.email,
        }))
    }
}

// ============================================================================
// Department Repository Implementation
// ============================================================================

impl DepartmentRepository for PgSchoolRepository {
    async fn create_department(&self, department: &Department) -> SchoolResult<()> {
        sqlx::query(
            r#"
            INSERT INTO departments (department_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(department.department_id.as_uuid())
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.created_at)
        .bind(department.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_department(
        &self,
        department_id: &DepartmentId,
    ) -> SchoolResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT department_id, name, description, created_at, updated_at
            FROM departments
            WHERE department_id = $1
            "#,
        )
        .bind(department_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DepartmentRow::into_department))
    }

    async fn list_departments(&self) -> SchoolResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT department_id, name, description, created_at, updated_at
            FROM departments
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DepartmentRow::into_department).collect())
    }

    async fn update_department(&self, department: &Department) -> SchoolResult<()> {
        sqlx::query(
            r#"
            UPDATE departments SET name = $2, description = $3, updated_at = $4
            WHERE department_id = $1
            "#,
        )
        .bind(department.department_id.as_uuid())
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_department(&self, department_id: &DepartmentId) -> SchoolResult<bool> {
        let deleted = sqlx::query("DELETE FROM departments WHERE department_id = $1")
            .bind(department_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Subject Repository Implementation
// ============================================================================

const SUBJECT_COLUMNS: &str = r#"
    subject_id,
    name,
    description,
    department_id,
    created_at,
    updated_at
"#;

impl SubjectRepository for PgSchoolRepository {
    async fn create_subject(&self, subject: &Subject) -> SchoolResult<()> {
        sqlx::query(
            r#"
            INSERT INTO subjects (
                subject_id,
                name,
                description,
                department_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(subject.subject_id.as_uuid())
        .bind(&subject.name)
        .bind(&subject.description)
        .bind(subject.department_id.as_uuid())
        .bind(subject.created_at)
        .bind(subject.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_subject(&self, subject_id: &SubjectId) -> SchoolResult<Option<Subject>> {
        let row = sqlx::query_as::<_, SubjectRow>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE subject_id = $1"
        ))
        .bind(subject_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SubjectRow::into_subject))
    }

    async fn list_subjects(&self) -> SchoolResult<Vec<Subject>> {
        let rows = sqlx::query_as::<_, SubjectRow>(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubjectRow::into_subject).collect())
    }

    async fn update_subject(&self, subject: &Subject) -> SchoolResult<()> {
        sqlx::query(
            r#"
            UPDATE subjects SET
                name = $2,
                description = $3,
                department_id = $4,
                updated_at = $5
            WHERE subject_id = $1
            "#,
        )
        .bind(subject.subject_id.as_uuid())
        .bind(&subject.name)
        .bind(&subject.description)
        .bind(subject.department_id.as_uuid())
        .bind(subject.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_subject(&self, subject_id: &SubjectId) -> SchoolResult<bool> {
        let deleted = sqlx::query("DELETE FROM subjects WHERE subject_id = $1")
            .bind(subject_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

const FEEDBACK_COLUMNS: &str = r#"
    feedback_id,
    appointment_id,
    student_id,
    teacher_id,
    rating,
    comments,
    created_at,
    updated_at
"#;

impl FeedbackRepository for PgSchoolRepository {
    async fn create_feedback(&self, feedback: &Feedback) -> SchoolResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                feedback_id,
                appointment_id,
                student_id,
                teacher_id,
                rating,
                comments,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(feedback.feedback_id.as_uuid())
        .bind(feedback.appointment_id.as_uuid())
        .bind(feedback.student_id.as_uuid())
        .bind(feedback.teacher_id.as_uuid())
        .bind(i16::from(feedback.rating))
        .bind(&feedback.comments)
        .bind(feedback.created_at)
        .bind(feedback.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<Option<Feedback>> {
        let row = sqlx::query_as::<_, FeedbackRow>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE feedback_id = $1"
        ))
        .bind(feedback_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(FeedbackRow::into_feedback).transpose()
    }

    async fn list_feedback(&self) -> SchoolResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(FeedbackRow::into_feedback).collect()
    }

    async fn update_feedback(&self, feedback: &Feedback) -> SchoolResult<()> {
        sqlx::query(
            r#"
            UPDATE feedback SET rating = $2, comments = $3, updated_at = $4
            WHERE feedback_id = $1
            "#,
        )
        .bind(feedback.feedback_id.as_uuid())
        .bind(i16::from(feedback.rating))
        .bind(&feedback.comments)
        .bind(feedback.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_feedback(&self, feedback_id: &FeedbackId) -> SchoolResult<bool> {
        let deleted = sqlx::query("DELETE FROM feedback WHERE feedback_id = $1")
            .bind(feedback_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Notification Repository Implementation
// ============================================================================

const NOTIFICATION_COLUMNS: &str = r#"
    notification_id,
    user_id,
    message,
    is_read,
    created_at,
    updated_at
"#;

impl NotificationRepository for PgSchoolRepository {
    async fn create_notification(&self, notification: &Notification) -> SchoolResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                notification_id,
                user_id,
                message,
                is_read,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.notification_id.as_uuid())
        .bind(notification.user_id)
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created_at)
        .bind(notification.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_notifications(&self) -> SchoolResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NotificationRow::into_notification).collect())
    }

    async fn list_notifications_by_user(&self, user_id: Uuid) -> SchoolResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NotificationRow::into_notification).collect())
    }

    async fn mark_notification_read(
        &self,
        notification_id: &NotificationId,
    ) -> SchoolResult<Option<Notification>> {
        // updated_at only moves on the first read
        let row = sqlx::query_as::<_, NotificationRow>(&format!(
            r#"
            UPDATE notifications SET
                updated_at = CASE WHEN is_read THEN updated_at ELSE now() END,
                is_read = TRUE
            WHERE notification_id = $1
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(notification_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NotificationRow::into_notification))
    }

    async fn delete_notification(&self, notification_id: &NotificationId) -> SchoolResult<bool> {
        let deleted = sqlx::query("DELETE FROM notifications WHERE notification_id = $1")
            .bind(notification_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    appointment_id: Uuid,
    student_id: Uuid,
    teacher_id: Uuid,
    purpose: String,
    appointment_date: NaiveDate,
    appointment_time: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AppointmentRow {
    fn into_appointment(self) -> SchoolResult<Appointment> {
        let status: AppointmentStatus = self
            .status
            .parse()
            .map_err(|_| SchoolError::Internal(format!("Invalid status: {}", self.status)))?;

        Ok(Appointment {
            appointment_id: AppointmentId::from_uuid(self.appointment_id),
            student_id: StudentId::from_uuid(self.student_id),
            teacher_id: TeacherId::from_uuid(self.teacher_id),
            purpose: self.purpose,
            date: self.appointment_date,
            time: self.appointment_time,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: Uuid,
    name: String,
    email: String,
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    department_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DepartmentRow {
    fn into_department(self) -> Department {
        Department {
            department_id: DepartmentId::from_uuid(self.department_id),
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubjectRow {
    subject_id: Uuid,
    name: String,
    description: Option<String>,
    department_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubjectRow {
    fn into_subject(self) -> Subject {
        Subject {
            subject_id: SubjectId::from_uuid(self.subject_id),
            name: self.name,
            description: self.description,
            department_id: DepartmentId::from_uuid(self.department_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    feedback_id: Uuid,
    appointment_id: Uuid,
    student_id: Uuid,
    teacher_id: Uuid,
    rating: i16,
    comments: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn into_feedback(self) -> SchoolResult<Feedback> {
        let rating = Rating::new(i64::from(self.rating))
            .map_err(|_| SchoolError::Internal(format!("Invalid rating: {}", self.rating)))?;

        Ok(Feedback {
            feedback_id: FeedbackId::from_uuid(self.feedback_id),
            appointment_id: AppointmentId::from_uuid(self.appointment_id),
            student_id: StudentId::from_uuid(self.student_id),
            teacher_id: TeacherId::from_uuid(self.teacher_id),
            rating,
            comments: self.comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    notification_id: Uuid,
    user_id: Uuid,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NotificationRow {
    fn into_notification(self) -> Notification {
        Notification {
            notification_id: NotificationId::from_uuid(self.notification_id),
            user_id: self.user_id,
            message: self.message,
            read: self.is_read,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
