pub mod appointment;
pub mod department;
pub mod feedback;
pub mod notification;
pub mod participant;
pub mod subject;

pub use appointment::Appointment;
pub use department::Department;
pub use feedback::{Feedback, NewFeedback};
pub use notification::Notification;
pub use participant::{StudentSummary, TeacherSummary};
pub use subject::Subject;
