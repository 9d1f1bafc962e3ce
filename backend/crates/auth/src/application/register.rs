//! Registration Use Cases
//!
//! Creates student and teacher accounts. The password is validated against
//! the policy and hashed exactly once, here.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{non_blank, require_all};
use crate::domain::entity::{
    student::Student,
    teacher::{NewTeacher, Teacher},
};
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Student
// ============================================================================

pub struct RegisterStudentInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub grade: Option<String>,
}

pub struct RegisterStudentUseCase<R>
where
    R: StudentRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterStudentUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterStudentInput) -> AuthResult<Student> {
        require_all(&[&input.name, &input.email, &input.password])?;

        let email = Email::new(&input.email)?;
        if self.repo.find_student_by_email(&email).await?.is_some() {
            return Err(AuthError::StudentExists);
        }

        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash(self.config.pepper())?;

        let student = Student::new(
            input.name.trim().to_string(),
            email,
            non_blank(input.grade),
            password_hash,
        );
        self.repo.create_student(&student).await?;

        tracing::info!(student_id = %student.student_id, "Student registered");

        Ok(student)
    }
}

// ============================================================================
// Teacher
// ============================================================================

pub struct RegisterTeacherInput {
    pub name: String,
    pub user_name: String,
    pub department: String,
    pub subject: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Used by self-registration and by admins adding a teacher
pub struct RegisterTeacherUseCase<R>
where
    R: TeacherRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterTeacherUseCase<R>
where
    R: TeacherRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterTeacherInput) -> AuthResult<Teacher> {
        require_all(&[
            &input.name,
            &input.user_name,
            &input.department,
            &input.subject,
            &input.email,
            &input.password,
            &input.phone,
        ])?;

        let user_name = UserName::new(&input.user_name)?;
        let email = Email::new(&input.email)?;
        let phone = input.phone.trim().to_string();

        if self
            .repo
            .teacher_identity_exists(&user_name, &email, &phone)
            .await?
        {
            return Err(AuthError::TeacherExists);
        }

        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash(self.config.pepper())?;

        let teacher = Teacher::new(NewTeacher {
            name: input.name.trim().to_string(),
            user_name,
            department: input.department.trim().to_string(),
            subject: input.subject.trim().to_string(),
            email,
            phone,
            password_hash,
        });
        self.repo.create_teacher(&teacher).await?;

        tracing::info!(
            teacher_id = %teacher.teacher_id,
            user_name = %teacher.user_name,
            "Teacher registered"
        );

        Ok(teacher)
    }
}
