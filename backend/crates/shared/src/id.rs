//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type StudentId = Id<markers::Student>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    /// Parse a path segment, naming the entity in the error message
    ///
    /// ```
    /// use kernel::id::TeacherId;
    /// let err = TeacherId::parse("nope", "teacher").unwrap_err();
    /// assert_eq!(err.message(), "Invalid teacher id");
    /// ```
    pub fn parse(raw: &str, entity: &'static str) -> AppResult<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self::from_uuid)
            .map_err(|e| AppError::bad_request(format!("Invalid {entity} id")).with_source(e))
    }
}

// Manual impls: deriving would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct Student;
    pub struct Teacher;
    pub struct Appointment;
    pub struct Department;
    pub struct Subject;
    pub struct Feedback;
    pub struct Notification;
}

pub type StudentId = Id<markers::Student>;
pub type TeacherId = Id<markers::Teacher>;
pub type AppointmentId = Id<markers::Appointment>;
pub type DepartmentId = Id<markers::Department>;
pub type SubjectId = Id<markers::Subject>;
pub type FeedbackId = Id<markers::Feedback>;
pub type NotificationId = Id<markers::Notification>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: StudentId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_parse_reports_entity() {
        let uuid = Uuid::new_v4();
        let id = AppointmentId::parse(&uuid.to_string(), "appointment").unwrap();
        assert_eq!(id.into_uuid(), uuid);

        let err = AppointmentId::parse("12", "appointment").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid appointment id");
    }

    #[test]
    fn test_serde_is_plain_uuid() {
        let uuid = Uuid::nil();
        let id: DepartmentId = Id::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");

        let back: DepartmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
