//! Domain Layer
//!
//! This layer contains:
//! - Entities (Appointment, Department, Subject, Feedback, Notification)
//! - Value objects (AppointmentStatus lifecycle, Rating, dates)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod value_object;

pub use repository::{
    AppointmentRepository, DepartmentRepository, FeedbackRepository, NotificationRepository,
    ParticipantRepository, SchoolStore, SubjectRepository,
};
