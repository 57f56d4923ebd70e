//! The two-state attendance machine.

use super::event::PunchEvent;
use super::geo::EvaluationResult;
use super::guard::FenceGuard;
use super::state::{AttendanceStatus, PunchDirection};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Punch rejected because the caller stood outside the fence.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("Outside the geofence: {distance_meters:.0}m away from the fence center")]
pub struct GeofenceViolation {
    pub distance_meters: f64,
}

/// Result of deciding a punch, before anything is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The guard admitted the evaluation; the machine moves to `to`
    Toggle {
        from: AttendanceStatus,
        to: AttendanceStatus,
        direction: PunchDirection,
    },

    /// The guard rejected the evaluation; the machine stays put
    Rejected(GeofenceViolation),
}

/// Attendance state for one session.
///
/// Holds the current status and the guard that decides whether an
/// evaluation may toggle it. The status is private: the only way to change
/// it is an accepted punch.
///
/// # Example
///
/// ```rust
/// use geopunch::core::{
///     evaluate, AttendanceStateMachine, AttendanceStatus, Coordinate, GeoFence, PunchDirection,
/// };
///
/// let office = Coordinate::new(12.9716, 77.5946).unwrap();
/// let fence = GeoFence::new(office, 100.0).unwrap();
/// let mut machine = AttendanceStateMachine::new();
///
/// let event = machine
///     .punch("USER_123", &evaluate(&office, &fence))
///     .unwrap();
/// assert_eq!(event.direction, PunchDirection::In);
/// assert_eq!(machine.status(), AttendanceStatus::CheckedIn);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttendanceStateMachine {
    status: AttendanceStatus,
    guard: FenceGuard,
}

impl AttendanceStateMachine {
    /// Create a machine in `CheckedOut` with an enforced fence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session that is already in `status`.
    pub fn with_status(status: AttendanceStatus) -> Self {
        Self {
            status,
            guard: FenceGuard::default(),
        }
    }

    pub fn with_guard(mut self, guard: FenceGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn guard(&self) -> FenceGuard {
        self.guard
    }

    /// Decide what a punch with this evaluation would do (pure).
    pub fn step(&self, evaluation: &EvaluationResult) -> StepResult {
        if !self.guard.check(evaluation) {
            return StepResult::Rejected(GeofenceViolation {
                distance_meters: evaluation.distance_meters,
            });
        }

        StepResult::Toggle {
            from: self.status,
            to: self.status.toggled(),
            direction: self.status.next_direction(),
        }
    }

    /// Attempt a punch stamped with the current time.
    pub fn punch(
        &mut self,
        user_id: &str,
        evaluation: &EvaluationResult,
    ) -> Result<PunchEvent, GeofenceViolation> {
        self.punch_at(user_id, evaluation, Utc::now())
    }

    /// Attempt a punch with an explicit timestamp.
    ///
    /// A rejected punch leaves the status exactly as it was. The event
    /// records the point the evaluation was computed from.
    pub fn punch_at(
        &mut self,
        user_id: &str,
        evaluation: &EvaluationResult,
        timestamp: DateTime<Utc>,
    ) -> Result<PunchEvent, GeofenceViolation> {
        match self.step(evaluation) {
            StepResult::Rejected(violation) => {
                tracing::warn!(
                    user_id,
                    status = self.status.name(),
                    distance_meters = violation.distance_meters,
                    "punch rejected outside geofence"
                );
                Err(violation)
            }
            StepResult::Toggle {
                from,
                to,
                direction,
            } => {
                if !evaluation.within_fence {
                    tracing::warn!(
                        user_id,
                        distance_meters = evaluation.distance_meters,
                        "geofence bypassed, accepting punch from outside the fence"
                    );
                }
                self.status = to;
                tracing::debug!(
                    user_id,
                    from = from.name(),
                    to = to.name(),
                    "attendance status toggled"
                );
                Ok(PunchEvent::new(
                    user_id,
                    direction,
                    evaluation.point,
                    timestamp,
                ))
            }
        }
    }
}
