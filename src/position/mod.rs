//! Position acquisition contract.
//!
//! The core never talks to a GPS receiver or a platform location API
//! directly. It depends on a [`PositionSource`] that yields the caller's
//! coordinate or one of four failure kinds, and it awaits that single
//! future before evaluating anything.

mod sources;

pub use sources::{FixedPositionSource, ScriptedPositionSource, UnsupportedPositionSource};

use crate::core::Coordinate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Why a coordinate could not be acquired.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcquisitionError {
    #[error("Geolocation is not supported on this platform")]
    Unsupported,

    #[error("Permission to read the device location was denied")]
    PermissionDenied,

    #[error("Timed out while acquiring the device location")]
    Timeout,

    #[error("The device location is currently unavailable")]
    PositionUnavailable,
}

/// How hard the source should try for a precise fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyPreference {
    /// Best available precision, typically satellite positioning
    #[default]
    High,
    Balanced,
    /// Coarse, fast fixes such as network-based positioning
    Low,
}

/// Options passed to every acquisition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcquisitionOptions {
    pub accuracy: AccuracyPreference,
    /// Upper bound on how long a session waits for a fix.
    ///
    /// Enforced with Tokio's timer, so it only applies when the punch runs
    /// inside a Tokio runtime with the time driver enabled.
    pub timeout: Option<Duration>,
}

impl AcquisitionOptions {
    pub fn new(accuracy: AccuracyPreference) -> Self {
        Self {
            accuracy,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Capability that yields the caller's current coordinate.
///
/// Implementations report failures through [`AcquisitionError`]; they do not
/// need to enforce `options.timeout` themselves, the session bounds the wait.
pub trait PositionSource: Send + Sync {
    fn acquire(
        &self,
        options: &AcquisitionOptions,
    ) -> impl Future<Output = Result<Coordinate, AcquisitionError>> + Send;
}
