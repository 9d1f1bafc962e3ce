//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field reaches the use case
//! and fails with "All fields are required" instead of a decode error.
//! Response types never carry the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    ChangePasswordInput, RegisterStudentInput, RegisterTeacherInput, SignInInput, StudentPatch,
    TeacherDetailsInput, TeacherPatch,
};
use crate::domain::entity::{principal::Principal, student::Student, teacher::Teacher};
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Registration
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentRequest {
    pub full_name: Option<String>,
    /// Accepted in place of `fullName`
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub grade: Option<String>,
}

impl From<RegisterStudentRequest> for RegisterStudentInput {
    fn from(req: RegisterStudentRequest) -> Self {
        Self {
            name: req.full_name.or(req.name).unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            grade: req.grade,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeacherRequest {
    pub name: Option<String>,
    #[serde(alias = "userName")]
    pub username: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

impl From<RegisterTeacherRequest> for RegisterTeacherInput {
    fn from(req: RegisterTeacherRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            user_name: req.username.unwrap_or_default(),
            department: req.department.unwrap_or_default(),
            subject: req.subject.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<SignInRequest> for SignInInput {
    fn from(req: SignInRequest) -> Self {
        Self {
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        }
    }
}

/// Body of a successful login or student registration
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: PrincipalResponse,
    pub token: String,
}

// ============================================================================
// Profile updates
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherDetailsRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub email: Option<String>,
}

impl From<TeacherDetailsRequest> for TeacherDetailsInput {
    fn from(req: TeacherDetailsRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            department: req.department.unwrap_or_default(),
            subject: req.subject.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherPatchRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
}

impl From<TeacherPatchRequest> for TeacherPatch {
    fn from(req: TeacherPatchRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            department: req.department,
            subject: req.subject,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatchRequest {
    #[serde(alias = "fullName")]
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
}

impl From<StudentPatchRequest> for StudentPatch {
    fn from(req: StudentPatchRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            grade: req.grade,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_new_password: Option<String>,
}

impl From<ChangePasswordRequest> for ChangePasswordInput {
    fn from(req: ChangePasswordRequest) -> Self {
        Self {
            old_password: req.old_password.unwrap_or_default(),
            new_password: req.new_password.unwrap_or_default(),
            confirm_new_password: req.confirm_new_password.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Principal views
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub grade: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Student> for StudentResponse {
    fn from(s: &Student) -> Self {
        Self {
            id: s.student_id.into_uuid(),
            name: s.name.clone(),
            email: s.email.to_string(),
            grade: s.grade.clone(),
            role: s.user_role,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub department: String,
    pub subject: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Teacher> for TeacherResponse {
    fn from(t: &Teacher) -> Self {
        Self {
            id: t.teacher_id.into_uuid(),
            name: t.name.clone(),
            username: t.user_name.to_string(),
            department: t.department.clone(),
            subject: t.subject.clone(),
            email: t.email.to_string(),
            phone: t.phone.clone(),
            role: t.user_role,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PrincipalResponse {
    Student(StudentResponse),
    Teacher(TeacherResponse),
}

impl From<&Principal> for PrincipalResponse {
    fn from(p: &Principal) -> Self {
        match p {
            Principal::Student(s) => PrincipalResponse::Student(s.into()),
            Principal::Teacher(t) => PrincipalResponse::Teacher(t.into()),
        }
    }
}
