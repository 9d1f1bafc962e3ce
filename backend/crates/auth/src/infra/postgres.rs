//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{StudentId, TeacherId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{student::Student, teacher::Teacher};
use crate::domain::repository::{StudentRepository, TeacherRepository};
use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed principal repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Student Repository Implementation
// ============================================================================

const STUDENT_COLUMNS: &str = r#"
    student_id,
    name,
    email,
    grade,
    password_hash,
    user_role,
    created_at,
    updated_at
"#;

impl StudentRepository for PgAuthRepository {
    async fn create_student(&self, student: &Student) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO students (
                student_id,
                name,
                email,
                grade,
                password_hash,
                user_role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(student.student_id.as_uuid())
        .bind(&student.name)
        .bind(student.email.as_str())
        .bind(&student.grade)
        .bind(student.password_hash.as_phc_string())
        .bind(student.user_role.id())
        .bind(student.created_at)
        .bind(student.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_student_by_id(&self, student_id: &StudentId) -> AuthResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = $1"
        ))
        .bind(student_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(StudentRow::into_student).transpose()
    }

    async fn find_student_by_email(&self, email: &Email) -> AuthResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(StudentRow::into_student).transpose()
    }

    async fn update_student(&self, student: &Student) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE students SET
                name = $2,
                email = $3,
                grade = $4,
                password_hash = $5,
                user_role = $6,
                updated_at = $7
            WHERE student_id = $1
            "#,
        )
        .bind(student.student_id.as_uuid())
        .bind(&student.name)
        .bind(student.email.as_str())
        .bind(&student.grade)
        .bind(student.password_hash.as_phc_string())
        .bind(student.user_role.id())
        .bind(student.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_student(&self, student_id: &StudentId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(student_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Teacher Repository Implementation
// ============================================================================

const TEACHER_COLUMNS: &str = r#"
    teacher_id,
    name,
    user_name,
    department,
    subject,
    email,
    phone,
    password_hash,
    user_role,
    created_at,
    updated_at
"#;

impl TeacherRepository for PgAuthRepository {
    async fn create_teacher(&self, teacher: &Teacher) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teachers (
                teacher_id,
                name,
                user_name,
                department,
                subject,
                email,
                phone,
                password_hash,
                user_role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(teacher.teacher_id.as_uuid())
        .bind(&teacher.name)
        .bind(teacher.user_name.as_str())
        .bind(&teacher.department)
        .bind(&teacher.subject)
        .bind(teacher.email.as_str())
        .bind(&teacher.phone)
        .bind(teacher.password_hash.as_phc_string())
        .bind(teacher.user_role.id())
        .bind(teacher.created_at)
        .bind(teacher.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_teacher_by_id(&self, teacher_id: &TeacherId) -> AuthResult<Option<Teacher>> {
        let row = sqlx::query_as::<_, TeacherRow>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE teacher_id = $1"
        ))
        .bind(teacher_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TeacherRow::into_teacher).transpose()
    }

    async fn find_teacher_by_email(&self, email: &Email) -> AuthResult<Option<Teacher>> {
        let row = sqlx::query_as::<_, TeacherRow>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TeacherRow::into_teacher).transpose()
    }

    async fn teacher_identity_exists(
        &self,
        user_name: &UserName,
        email: &Email,
        phone: &str,
    ) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM teachers
                WHERE user_name = $1 OR email = $2 OR phone = $3
            )
            "#,
        )
        .bind(user_name.as_str())
        .bind(email.as_str())
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_teacher(&self, teacher: &Teacher) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE teachers SET
                name = $2,
                department = $3,
                subject = $4,
                email = $5,
                phone = $6,
                password_hash = $7,
                user_role = $8,
                updated_at = $9
            WHERE teacher_id = $1
            "#,
        )
        .bind(teacher.teacher_id.as_uuid())
        .bind(&teacher.name)
        .bind(&teacher.department)
        .bind(&teacher.subject)
        .bind(teacher.email.as_str())
        .bind(&teacher.phone)
        .bind(teacher.password_hash.as_phc_string())
        .bind(teacher.user_role.id())
        .bind(teacher.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_teacher(&self, teacher_id: &TeacherId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM teachers WHERE teacher_id = $1")
            .bind(teacher_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct StudentRow {
    student_id: Uuid,
    name: String,
    email: String,
    grade: Option<String>,
    password_hash: String,
    user_role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StudentRow {
    fn into_student(self) -> AuthResult<Student> {
        Ok(Student {
            student_id: StudentId::from_uuid(self.student_id),
            name: self.name,
            email: Email::from_db(self.email),
            grade: self.grade,
            password_hash: stored_hash(self.password_hash)?,
            user_role: stored_role(self.user_role)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TeacherRow {
    teacher_id: Uuid,
    name: String,
    user_name: String,
    department: String,
    subject: String,
    email: String,
    phone: String,
    password_hash: String,
    user_role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeacherRow {
    fn into_teacher(self) -> AuthResult<Teacher> {
        Ok(Teacher {
            teacher_id: TeacherId::from_uuid(self.teacher_id),
            name: self.name,
            user_name: UserName::from_db(self.user_name),
            department: self.department,
            subject: self.subject,
            email: Email::from_db(self.email),
            phone: self.phone,
            password_hash: stored_hash(self.password_hash)?,
            user_role: stored_role(self.user_role)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn stored_hash(phc: String) -> AuthResult<HashedPassword> {
    HashedPassword::from_phc_string(phc)
        .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {e}")))
}

fn stored_role(id: i16) -> AuthResult<UserRole> {
    UserRole::from_id(id).ok_or_else(|| AuthError::Internal(format!("Invalid user_role: {id}")))
}
