//! Appointment Entity
//!
//! The join between one student and one teacher.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{AppointmentId, StudentId, TeacherId};
use uuid::Uuid;

use crate::domain::value_object::appointment_status::{AppointmentAction, AppointmentStatus};
use crate::error::{SchoolError, SchoolResult};

#[derive(Debug, Clone)]
pub struct Appointment {
    pub appointment_id: AppointmentId,
    pub student_id: StudentId,
    pub teacher_id: TeacherId,
    pub purpose: String,
    pub date: NaiveDate,
    /// Free text, returned as given ("10:30", "after lunch")
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// New appointments always start out pending
    pub fn new(
        student_id: StudentId,
        teacher_id: TeacherId,
        purpose: String,
        date: NaiveDate,
        time: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            appointment_id: AppointmentId::new(),
            student_id,
            teacher_id,
            purpose,
            date,
            time,
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `principal_id` is the student or the teacher of this appointment
    pub fn involves(&self, principal_id: Uuid) -> bool {
        *self.student_id.as_uuid() == principal_id || *self.teacher_id.as_uuid() == principal_id
    }

    pub fn is_teacher(&self, principal_id: Uuid) -> bool {
        *self.teacher_id.as_uuid() == principal_id
    }

    /// Follow a lifecycle edge
    pub fn transition(&mut self, action: AppointmentAction) -> SchoolResult<AppointmentStatus> {
        let next = self
            .status
            .apply(action)
            .ok_or(SchoolError::InvalidTransition {
                action: action.verb(),
                status: self.status,
            })?;

        self.status = next;
        self.updated_at = Utc::now();
        Ok(next)
    }

    /// Administrative overwrite, not bound to the lifecycle edges
    pub fn override_status(&mut self, status: AppointmentStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment() -> Appointment {
        Appointment::new(
            StudentId::new(),
            TeacherId::new(),
            "Essay review".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            "10:30".to_string(),
        )
    }

    #[test]
    fn test_starts_pending() {
        assert_eq!(appointment().status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_transition_follows_edges() {
        let mut a = appointment();
        assert_eq!(
            a.transition(AppointmentAction::Approve).unwrap(),
            AppointmentStatus::Approved
        );
        assert_eq!(
            a.transition(AppointmentAction::Complete).unwrap(),
            AppointmentStatus::Completed
        );

        let err = a.transition(AppointmentAction::Cancel).unwrap_err();
        assert!(matches!(
            err,
            SchoolError::InvalidTransition {
                action: "cancel",
                status: AppointmentStatus::Completed
            }
        ));
        assert_eq!(a.status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_override_ignores_edges() {
        let mut a = appointment();
        a.transition(AppointmentAction::Reject).unwrap();
        a.override_status(AppointmentStatus::Pending);
        assert_eq!(a.status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_involves() {
        let a = appointment();
        assert!(a.involves(*a.student_id.as_uuid()));
        assert!(a.involves(*a.teacher_id.as_uuid()));
        assert!(a.is_teacher(*a.teacher_id.as_uuid()));
        assert!(!a.is_teacher(*a.student_id.as_uuid()));
        assert!(!a.involves(Uuid::new_v4()));
    }
}
