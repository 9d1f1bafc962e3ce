//! School Backend Module
//!
//! Appointments between students and teachers, plus the departments,
//! subjects, feedback and notifications around them.
//!
//! - `domain/` - Entities, the appointment status lifecycle, repository traits
//! - `application/` - Use cases and CRUD services
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Appointment lifecycle
//! `pending` can become `approved`, `rejected` or `canceled`; `approved` can
//! become `completed`. Every other teacher-driven change is a conflict. Admins
//! may override the status directly.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use domain::SchoolStore;
pub use error::{SchoolError, SchoolResult};
pub use infra::postgres::PgSchoolRepository;
pub use presentation::router::{school_router, school_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
