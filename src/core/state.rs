//! Attendance states and punch directions.
//!
//! A session is always in exactly one of two states. The only way to move
//! between them is an accepted punch, which flips the status and yields the
//! direction of the punch that caused it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a user is currently at work.
///
/// # Example
///
/// ```rust
/// use geopunch::core::{AttendanceStatus, PunchDirection};
///
/// let status = AttendanceStatus::default();
/// assert_eq!(status, AttendanceStatus::CheckedOut);
/// assert_eq!(status.next_direction(), PunchDirection::In);
/// assert_eq!(status.toggled(), AttendanceStatus::CheckedIn);
/// assert_eq!(status.name(), "CheckedOut");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    CheckedOut,
    CheckedIn,
}

impl AttendanceStatus {
    /// The status reached after one accepted punch.
    pub fn toggled(self) -> Self {
        match self {
            Self::CheckedOut => Self::CheckedIn,
            Self::CheckedIn => Self::CheckedOut,
        }
    }

    /// Direction of the punch that would leave this status.
    pub fn next_direction(self) -> PunchDirection {
        match self {
            Self::CheckedOut => PunchDirection::In,
            Self::CheckedIn => PunchDirection::Out,
        }
    }

    pub fn is_checked_in(self) -> bool {
        matches!(self, Self::CheckedIn)
    }

    /// Name used in logs and `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Self::CheckedOut => "CheckedOut",
            Self::CheckedIn => "CheckedIn",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of an accepted punch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PunchDirection {
    In,
    Out,
}

impl PunchDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl fmt::Display for PunchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
