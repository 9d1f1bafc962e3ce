//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Student/Teacher principals, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Student and teacher registration and email + password login
//! - Stateless HS256 JWT session token in a `token` cookie or `Authorization: Bearer`
//! - Profile updates, password change, account removal
//! - Admin management of teachers and promotion of students
//! - `require_principal` / `require_teacher` / `require_admin` middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, only when set or changed
//! - Roles are explicit (`student`, `teacher`, `admin`)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::{Principal, PrincipalStore, Student, StudentRepository, Teacher, TeacherRepository};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
