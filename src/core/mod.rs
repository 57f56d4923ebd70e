//! Core attendance types and logic.
//!
//! This module contains the pure, synchronous part of the crate:
//! - Geometry: coordinates, fences and the haversine evaluator
//! - The two-state attendance machine and its guard
//! - Punch events handed to persistence
//!
//! Nothing here performs I/O. Position acquisition and event delivery live
//! in [`crate::position`] and [`crate::session`].

mod event;
mod geo;
mod guard;
mod machine;
mod state;

pub use event::PunchEvent;
pub use geo::{
    evaluate, haversine_distance, Coordinate, EvaluationResult, GeoError, GeoFence,
    EARTH_RADIUS_METERS,
};
pub use guard::FenceGuard;
pub use machine::{AttendanceStateMachine, GeofenceViolation, StepResult};
pub use state::{AttendanceStatus, PunchDirection};
