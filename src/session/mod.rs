//! The punch workflow for one user.
//!
//! A [`PunchSession`] is the imperative shell around the pure core. Each
//! call to [`PunchSession::punch`] acquires a coordinate, evaluates it
//! against the fence, asks the machine to transition and hands the
//! resulting event to the sink.
//!
//! `punch` takes `&mut self`, so a second punch on the same session cannot
//! start while one is in flight.

mod error;
mod sink;

pub use error::{ErrorCategory, PunchError};
pub use sink::{MemorySink, PunchSink, TracingSink};

use crate::core::{
    AttendanceStateMachine, AttendanceStatus, Coordinate, FenceGuard, GeoFence, PunchDirection,
};
use crate::position::{AcquisitionError, AcquisitionOptions, PositionSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the caller gets back from an accepted punch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PunchReceipt {
    pub status: AttendanceStatus,
    pub direction: PunchDirection,
    pub distance_meters: f64,
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

/// One user's attendance session.
pub struct PunchSession<P: PositionSource, K: PunchSink> {
    user_id: String,
    fence: GeoFence,
    options: AcquisitionOptions,
    machine: AttendanceStateMachine,
    source: P,
    sink: K,
}

impl<P: PositionSource, K: PunchSink> PunchSession<P, K> {
    pub(crate) fn new(
        user_id: String,
        fence: GeoFence,
        options: AcquisitionOptions,
        machine: AttendanceStateMachine,
        source: P,
        sink: K,
    ) -> Self {
        Self {
            user_id,
            fence,
            options,
            machine,
            source,
            sink,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn status(&self) -> AttendanceStatus {
        self.machine.status()
    }

    pub fn fence(&self) -> &GeoFence {
        &self.fence
    }

    pub fn guard(&self) -> FenceGuard {
        self.machine.guard()
    }

    pub fn options(&self) -> &AcquisitionOptions {
        &self.options
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Run one punch attempt.
    ///
    /// On failure the status is left exactly as it was and no event reaches
    /// the sink.
    ///
    /// # Panics
    ///
    /// When `options.timeout` is set and the future is polled inside a Tokio
    /// runtime built without the time driver (`enable_time`). Outside any
    /// Tokio runtime the timeout is skipped with a warning instead.
    pub async fn punch(&mut self) -> Result<PunchReceipt, PunchError> {
        let coordinate = match self.acquire().await {
            Ok(coordinate) => coordinate,
            Err(error) => {
                tracing::warn!(
                    user_id = %self.user_id,
                    %error,
                    "position acquisition failed"
                );
                return Err(error.into());
            }
        };

        let evaluation = self.fence.evaluate(&coordinate);
        tracing::debug!(
            user_id = %self.user_id,
            distance_meters = evaluation.distance_meters,
            within_fence = evaluation.within_fence,
            "position evaluated against fence"
        );

        let event = self
            .machine
            .punch(&self.user_id, &evaluation)?;

        let receipt = PunchReceipt {
            status: self.machine.status(),
            direction: event.direction,
            distance_meters: evaluation.distance_meters,
            coordinate: evaluation.point,
            timestamp: event.timestamp,
        };

        tracing::info!(
            user_id = %self.user_id,
            direction = %receipt.direction,
            status = %receipt.status,
            distance_meters = receipt.distance_meters,
            "punch accepted"
        );
        self.sink.deliver(event);

        Ok(receipt)
    }

    async fn acquire(&self) -> Result<Coordinate, AcquisitionError> {
        tracing::debug!(
            user_id = %self.user_id,
            accuracy = ?self.options.accuracy,
            "acquiring position"
        );
        let acquisition = self.source.acquire(&self.options);
        match self.options.timeout {
            Some(limit) if tokio::runtime::Handle::try_current().is_ok() => {
                tokio::time::timeout(limit, acquisition)
                    .await
                    .unwrap_or(Err(AcquisitionError::Timeout))
            }
            Some(limit) => {
                tracing::warn!(
                    user_id = %self.user_id,
                    timeout_ms = limit.as_millis() as u64,
                    "no Tokio runtime available, acquiring position without a timeout"
                );
                acquisition.await
            }
            None => acquisition.await,
        }
    }
}
