//! Presentation Layer
//!
//! HTTP handlers, DTOs and the router. Authentication middleware comes from
//! the `auth` crate.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::SchoolAppState;
pub use router::{school_router, school_router_generic};
