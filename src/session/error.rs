//! Failures surfaced by a punch attempt.

use crate::core::GeofenceViolation;
use crate::position::AcquisitionError;
use thiserror::Error;

/// How the caller should react to a failed punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The device cannot or may not report its location; retrying is
    /// pointless until the user enables the capability
    Capability,

    /// The fix could not be obtained this time; retrying may succeed
    Transient,

    /// The punch was understood and refused by business rules
    Policy,
}

/// Every way a punch can be refused.
///
/// Acquisition failures are carried verbatim. The status is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PunchError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error("Outside the geofence: {distance_meters:.0}m away from the fence center")]
    GeofenceViolation { distance_meters: f64 },
}

impl PunchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Acquisition(AcquisitionError::Unsupported)
            | Self::Acquisition(AcquisitionError::PermissionDenied) => ErrorCategory::Capability,
            Self::Acquisition(AcquisitionError::Timeout)
            | Self::Acquisition(AcquisitionError::PositionUnavailable) => ErrorCategory::Transient,
            Self::GeofenceViolation { .. } => ErrorCategory::Policy,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    /// Measured distance, when the punch was refused by the fence.
    pub fn distance_meters(&self) -> Option<f64> {
        match self {
            Self::GeofenceViolation { distance_meters } => Some(*distance_meters),
            Self::Acquisition(_) => None,
        }
    }
}

impl From<GeofenceViolation> for PunchError {
    fn from(violation: GeofenceViolation) -> Self {
        Self::GeofenceViolation {
            distance_meters: violation.distance_meters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_errors_are_not_retryable() {
        for kind in [AcquisitionError::Unsupported, AcquisitionError::PermissionDenied] {
            let error = PunchError::from(kind);
            assert_eq!(error.category(), ErrorCategory::Capability);
            assert!(!error.is_retryable());
        }
    }

    #[test]
    fn transient_errors_are_retryable() {
        for kind in [AcquisitionError::Timeout, AcquisitionError::PositionUnavailable] {
            let error = PunchError::from(kind);
            assert_eq!(error.category(), ErrorCategory::Transient);
            assert!(error.is_retryable());
        }
    }

    #[test]
    fn geofence_violation_is_policy_and_keeps_distance() {
        let error = PunchError::from(GeofenceViolation {
            distance_meters: 1_102.4,
        });
        assert_eq!(error.category(), ErrorCategory::Policy);
        assert!(!error.is_retryable());
        assert_eq!(error.distance_meters(), Some(1_102.4));
        assert_eq!(
            error.to_string(),
            "Outside the geofence: 1102m away from the fence center"
        );
    }

    #[test]
    fn acquisition_message_is_passed_through() {
        let error = PunchError::from(AcquisitionError::Timeout);
        assert_eq!(error.to_string(), AcquisitionError::Timeout.to_string());
        assert_eq!(error.distance_meters(), None);
    }
}
