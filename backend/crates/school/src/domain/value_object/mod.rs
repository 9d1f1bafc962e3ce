//! Value Objects

pub mod appointment_date;
pub mod appointment_status;
pub mod rating;

pub use appointment_date::parse_date;
pub use appointment_status::{AppointmentAction, AppointmentStatus};
pub use rating::Rating;
