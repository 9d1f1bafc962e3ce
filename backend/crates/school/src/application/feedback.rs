//! Feedback Service

use std::sync::Arc;

use kernel::id::{AppointmentId, FeedbackId, StudentId, TeacherId};

use crate::application::{non_blank, require_all};
use crate::domain::entity::{Feedback, NewFeedback};
use crate::domain::repository::{AppointmentRepository, FeedbackRepository};
use crate::domain::value_object::rating::Rating;
use crate::error::{SchoolError, SchoolResult};

pub struct FeedbackInput {
    pub appointment: String,
    pub student: String,
    pub teacher: String,
    pub rating: Option<i64>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackPatch {
    pub rating: Option<i64>,
    pub comments: Option<String>,
}

pub struct FeedbackService<R>
where
    R: FeedbackRepository + AppointmentRepository + Sync,
{
    repo: Arc<R>,
}

impl<R> FeedbackService<R>
where
    R: FeedbackRepository + AppointmentRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: FeedbackInput) -> SchoolResult<Feedback> {
        require_all(&[&input.appointment, &input.student, &input.teacher])?;
        let rating = Rating::new(input.rating.ok_or(SchoolError::MissingFields)?)?;

        let appointment_id = AppointmentId::parse(&input.appointment, "appointment")?;
        let student_id = StudentId::parse(&input.student, "student")?;
        let teacher_id = TeacherId::parse(&input.teacher, "teacher")?;

        let appointment = self
            .repo
            .find_appointment(&appointment_id)
            .await?
            .ok_or(SchoolError::AppointmentNotFound)?;
        if appointment.student_id != student_id || appointment.teacher_id != teacher_id {
            return Err(SchoolError::FeedbackParties);
        }

        let feedback = Feedback::new(NewFeedback {
            appointment_id,
            student_id,
            teacher_id,
            rating,
            comments: non_blank(input.comments),
        });
        self.repo.create_feedback(&feedback).await?;

        tracing::info!(
            feedback_id = %feedback.feedback_id,
            appointment_id = %appointment_id,
            rating = rating.value(),
            "Feedback created"
        );

        Ok(feedback)
    }

    pub async fn get(&self, feedback_id: FeedbackId) -> SchoolResult<Feedback> {
        self.repo
            .find_feedback(&feedback_id)
            .await?
            .ok_or(SchoolError::FeedbackNotFound)
    }

    pub async fn list(&self) -> SchoolResult<Vec<Feedback>> {
        self.repo.list_feedback().await
    }

    /// Rating and comments only; the references are fixed
    pub async fn update(&self, feedback_id: FeedbackId, patch: FeedbackPatch) -> SchoolResult<Feedback> {
        let rating = patch.rating.map(Rating::new).transpose()?;

        let mut feedback = self.get(feedback_id).await?;
        if let Some(rating) = rating {
            feedback.rating = rating;
        }
        if patch.comments.is_some() {
            feedback.comments = non_blank(patch.comments);
        }
        feedback.touch();

        self.repo.update_feedback(&feedback).await?;
        Ok(feedback)
    }

    pub async fn delete(&self, feedback_id: FeedbackId) -> SchoolResult<()> {
        if !self.repo.delete_feedback(&feedback_id).await? {
            return Err(SchoolError::FeedbackNotFound);
        }
        Ok(())
    }
}
