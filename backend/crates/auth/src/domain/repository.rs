//! Repository Traits
//!
//! Interfaces for principal persistence. Implementations live in `infra`.

use kernel::id::{StudentId, TeacherId};

use crate::domain::entity::{student::Student, teacher::Teacher};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Student repository trait
#[trait_variant::make(StudentRepository: Send)]
pub trait LocalStudentRepository {
    async fn create_student(&self, student: &Student) -> AuthResult<()>;

    async fn find_student_by_id(&self, student_id: &StudentId) -> AuthResult<Option<Student>>;

    async fn find_student_by_email(&self, email: &Email) -> AuthResult<Option<Student>>;

    /// Full overwrite of the mutable columns, including the password hash
    async fn update_student(&self, student: &Student) -> AuthResult<()>;

    /// Returns `false` when no row matched
    async fn delete_student(&self, student_id: &StudentId) -> AuthResult<bool>;
}

/// Teacher repository trait
#[trait_variant::make(TeacherRepository: Send)]
pub trait LocalTeacherRepository {
    async fn create_teacher(&self, teacher: &Teacher) -> AuthResult<()>;

    async fn find_teacher_by_id(&self, teacher_id: &TeacherId) -> AuthResult<Option<Teacher>>;

    async fn find_teacher_by_email(&self, email: &Email) -> AuthResult<Option<Teacher>>;

    /// Any teacher already holding one of the three unique keys
    async fn teacher_identity_exists(
        &self,
        user_name: &UserName,
        email: &Email,
        phone: &str,
    ) -> AuthResult<bool>;

    async fn update_teacher(&self, teacher: &Teacher) -> AuthResult<()>;

    /// Returns `false` when no row matched
    async fn delete_teacher(&self, teacher_id: &TeacherId) -> AuthResult<bool>;
}

/// Storage for both principal kinds, as needed by the HTTP layer
pub trait PrincipalStore:
    StudentRepository + TeacherRepository + Clone + Send + Sync + 'static
{
}

impl<T> PrincipalStore for T where
    T: StudentRepository + TeacherRepository + Clone + Send + Sync + 'static
{
}
