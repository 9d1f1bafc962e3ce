//! Profile Update Use Cases
//!
//! None of these touch the password hash.

use std::sync::Arc;

use kernel::id::{StudentId, TeacherId};

use crate::application::{non_blank, require_all};
use crate::domain::entity::{principal::Principal, student::Student, teacher::Teacher};
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Teacher: own details
// ============================================================================

pub struct TeacherDetailsInput {
    pub name: String,
    pub department: String,
    pub subject: String,
    pub email: String,
}

/// `PUT /teacher/update-details`: every field is required
pub struct UpdateTeacherDetailsUseCase<R>
where
    R: TeacherRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTeacherDetailsUseCase<R>
where
    R: TeacherRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, current: &Teacher, input: TeacherDetailsInput) -> AuthResult<Teacher> {
        require_all(&[&input.name, &input.department, &input.subject, &input.email])?;

        let email = Email::new(&input.email)?;
        ensure_teacher_email_free(self.repo.as_ref(), current.teacher_id, &email).await?;

        let mut teacher = current.clone();
        teacher.name = input.name.trim().to_string();
        teacher.department = input.department.trim().to_string();
        teacher.subject = input.subject.trim().to_string();
        teacher.email = email;
        teacher.touch();

        self.repo.update_teacher(&teacher).await?;

        tracing::info!(teacher_id = %teacher.teacher_id, "Teacher details updated");

        Ok(teacher)
    }
}

// ============================================================================
// Teacher: admin partial update
// ============================================================================

/// Fields left `None` (or blank) keep their current value
#[derive(Default)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
}

pub struct AdminUpdateTeacherUseCase<R>
where
    R: TeacherRepository,
{
    repo: Arc<R>,
}

impl<R> AdminUpdateTeacherUseCase<R>
where
    R: TeacherRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, teacher_id: TeacherId, patch: TeacherPatch) -> AuthResult<Teacher> {
        let mut teacher = self
            .repo
            .find_teacher_by_id(&teacher_id)
            .await?
            .ok_or(AuthError::TeacherNotFound)?;

        if let Some(email) = non_blank(patch.email) {
            let email = Email::new(email)?;
            ensure_teacher_email_free(self.repo.as_ref(), teacher_id, &email).await?;
            teacher.email = email;
        }
        if let Some(name) = non_blank(patch.name) {
            teacher.name = name;
        }
        if let Some(department) = non_blank(patch.department) {
            teacher.department = department;
        }
        if let Some(subject) = non_blank(patch.subject) {
            teacher.subject = subject;
        }
        teacher.touch();

        self.repo.update_teacher(&teacher).await?;

        tracing::info!(teacher_id = %teacher_id, "Teacher updated by admin");

        Ok(teacher)
    }
}

// ============================================================================
// Student: partial update (self or admin)
// ============================================================================

#[derive(Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
}

pub struct UpdateStudentUseCase<R>
where
    R: StudentRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateStudentUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        student_id: StudentId,
        patch: StudentPatch,
    ) -> AuthResult<Student> {
        if !principal.is_self_or_admin(student_id.into_uuid()) {
            return Err(AuthError::Forbidden(
                "You are not authorized to update this student",
            ));
        }

        let mut student = self
            .repo
            .find_student_by_id(&student_id)
            .await?
            .ok_or(AuthError::StudentNotFound)?;

        if let Some(email) = non_blank(patch.email) {
            let email = Email::new(email)?;
            if let Some(other) = self.repo.find_student_by_email(&email).await? {
                if other.student_id != student_id {
                    return Err(AuthError::EmailTaken);
                }
            }
            student.email = email;
        }
        if let Some(name) = non_blank(patch.name) {
            student.name = name;
        }
        if let Some(grade) = non_blank(patch.grade) {
            student.grade = Some(grade);
        }
        student.touch();

        self.repo.update_student(&student).await?;

        tracing::info!(student_id = %student_id, "Student updated");

        Ok(student)
    }
}

async fn ensure_teacher_email_free<R>(repo: &R, teacher_id: TeacherId, email: &Email) -> AuthResult<()>
where
    R: TeacherRepository,
{
    match repo.find_teacher_by_email(email).await? {
        Some(other) if other.teacher_id != teacher_id => Err(AuthError::EmailTaken),
        _ => Ok(()),
    }
}
