//! Participant Summaries
//!
//! Read-only views of the students and teachers that appointments point
//! at. The principals themselves belong to the `auth` crate.

use kernel::id::{StudentId, TeacherId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub student_id: StudentId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSummary {
    pub teacher_id: TeacherId,
    pub name: String,
    pub email: String,
}
