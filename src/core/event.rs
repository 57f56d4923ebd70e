//! Records emitted by accepted punches.

use super::geo::Coordinate;
use super::state::PunchDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable record of one accepted punch.
///
/// Events are immutable values. The machine hands each one to the caller as
/// soon as it is produced and keeps no copy.
///
/// # Example
///
/// ```rust
/// use geopunch::core::{Coordinate, PunchDirection, PunchEvent};
/// use chrono::Utc;
///
/// let event = PunchEvent::new(
///     "USER_123",
///     PunchDirection::In,
///     Coordinate::new(12.9716, 77.5946).unwrap(),
///     Utc::now(),
/// );
///
/// let payload = event.to_json().unwrap();
/// assert!(payload.contains("\"userId\":\"USER_123\""));
/// assert!(payload.contains("\"direction\":\"IN\""));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchEvent {
    /// Unique event identifier, usable as an idempotency key downstream
    pub id: Uuid,
    pub user_id: String,
    pub direction: PunchDirection,
    /// Position the fence was evaluated against
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl PunchEvent {
    pub fn new(
        user_id: impl Into<String>,
        direction: PunchDirection,
        coordinate: Coordinate,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            direction,
            coordinate,
            timestamp,
        }
    }

    /// Serialize the event into the JSON payload expected by persistence.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
