//! Appointment Status
//!
//! The appointment lifecycle:
//!
//! ```text
//! pending ──approve──▶ approved ──complete──▶ completed
//!    │
//!    ├──reject──▶ rejected
//!    └──cancel──▶ canceled
//! ```
//!
//! Teacher actions follow these edges only. An admin may overwrite the
//! status with any value (see `Appointment::override_status`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchoolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
    Canceled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Approved,
        AppointmentStatus::Rejected,
        AppointmentStatus::Canceled,
        AppointmentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Approved => "approved",
            AppointmentStatus::Rejected => "rejected",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Completed => "completed",
        }
    }

    /// Status reached by `action`, or `None` when the edge does not exist
    pub fn apply(self, action: AppointmentAction) -> Option<AppointmentStatus> {
        use AppointmentAction as A;
        use AppointmentStatus as S;

        match (self, action) {
            (S::Pending, A::Approve) => Some(S::Approved),
            (S::Pending, A::Reject) => Some(S::Rejected),
            (S::Pending, A::Cancel) => Some(S::Canceled),
            (S::Approved, A::Complete) => Some(S::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = SchoolError;

    /// Case-insensitive; "cancelled" is accepted as well
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "approved" => Ok(AppointmentStatus::Approved),
            "rejected" => Ok(AppointmentStatus::Rejected),
            "canceled" | "cancelled" => Ok(AppointmentStatus::Canceled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(SchoolError::InvalidStatus(s.trim().to_string())),
        }
    }
}

/// A teacher-side status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Approve,
    Reject,
    Cancel,
    Complete,
}

impl AppointmentAction {
    pub const ALL: [AppointmentAction; 4] = [
        AppointmentAction::Approve,
        AppointmentAction::Reject,
        AppointmentAction::Cancel,
        AppointmentAction::Complete,
    ];

    pub fn verb(&self) -> &'static str {
        match self {
            AppointmentAction::Approve => "approve",
            AppointmentAction::Reject => "reject",
            AppointmentAction::Cancel => "cancel",
            AppointmentAction::Complete => "complete",
        }
    }
}
