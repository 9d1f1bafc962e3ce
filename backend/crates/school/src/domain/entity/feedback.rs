//! Feedback Entity

use chrono::{DateTime, Utc};
use kernel::id::{AppointmentId, FeedbackId, StudentId, TeacherId};

use crate::domain::value_object::rating::Rating;

/// A rating left for an appointment
#[derive(Debug, Clone)]
pub struct Feedback {
    pub feedback_id: FeedbackId,
    pub appointment_id: AppointmentId,
    pub student_id: StudentId,
    pub teacher_id: TeacherId,
    pub rating: Rating,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewFeedback {
    pub appointment_id: AppointmentId,
    pub student_id: StudentId,
    pub teacher_id: TeacherId,
    pub rating: Rating,
    pub comments: Option<String>,
}

impl Feedback {
    pub fn new(fields: NewFeedback) -> Self {
        let now = Utc::now();
        Self {
            feedback_id: FeedbackId::new(),
            appointment_id: fields.appointment_id,
            student_id: fields.student_id,
            teacher_id: fields.teacher_id,
            rating: fields.rating,
            comments: fields.comments,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
