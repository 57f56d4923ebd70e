//! Builder API for assembling punch sessions.
//!
//! Collaborators are supplied one by one; `build` checks that nothing
//! required is missing.

pub mod error;

pub use error::BuildError;

use crate::config::{AttendanceConfig, ConfigError};
use crate::core::{AttendanceStateMachine, AttendanceStatus, FenceGuard, GeoFence};
use crate::position::{AcquisitionOptions, PositionSource};
use crate::session::{PunchSession, PunchSink};

/// Builder for [`PunchSession`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use geopunch::builder::SessionBuilder;
/// use geopunch::core::{AttendanceStatus, Coordinate, GeoFence};
/// use geopunch::position::FixedPositionSource;
/// use geopunch::session::MemorySink;
///
/// let office = Coordinate::new(12.9716, 77.5946).unwrap();
///
/// let session = SessionBuilder::new()
///     .user_id("USER_123")
///     .fence(GeoFence::new(office, 100.0).unwrap())
///     .source(FixedPositionSource::new(office))
///     .sink(MemorySink::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(session.status(), AttendanceStatus::CheckedOut);
/// ```
pub struct SessionBuilder<P, K> {
    user_id: Option<String>,
    fence: Option<GeoFence>,
    guard: FenceGuard,
    options: AcquisitionOptions,
    initial: AttendanceStatus,
    source: Option<P>,
    sink: Option<K>,
}

impl<P: PositionSource, K: PunchSink> SessionBuilder<P, K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            user_id: None,
            fence: None,
            guard: FenceGuard::default(),
            options: AcquisitionOptions::default(),
            initial: AttendanceStatus::default(),
            source: None,
            sink: None,
        }
    }

    /// Set the stable user identifier (required).
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the geofence (required unless `with_config` is used).
    pub fn fence(mut self, fence: GeoFence) -> Self {
        self.fence = Some(fence);
        self
    }

    pub fn guard(mut self, guard: FenceGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn options(mut self, options: AcquisitionOptions) -> Self {
        self.options = options;
        self
    }

    /// Resume from a known status instead of `CheckedOut`.
    pub fn initial(mut self, status: AttendanceStatus) -> Self {
        self.initial = status;
        self
    }

    /// Apply fence, guard and acquisition options from a config.
    /// Returns an error if the config does not validate.
    pub fn with_config(self, config: &AttendanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fence = config.fence()?;
        Ok(self
            .fence(fence)
            .guard(config.guard())
            .options(config.acquisition_options()))
    }

    /// Set the position source (required).
    pub fn source(mut self, source: P) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the punch sink (required).
    pub fn sink(mut self, sink: K) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the session.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<PunchSession<P, K>, BuildError> {
        let user_id = self.user_id.ok_or(BuildError::MissingUserId)?;
        if user_id.trim().is_empty() {
            return Err(BuildError::BlankUserId);
        }
        let fence = self.fence.ok_or(BuildError::MissingFence)?;
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let sink = self.sink.ok_or(BuildError::MissingSink)?;

        let machine = AttendanceStateMachine::with_status(self.initial).with_guard(self.guard);

        Ok(PunchSession::new(
            user_id,
            fence,
            self.options,
            machine,
            source,
            sink,
        ))
    }
}

impl<P: PositionSource, K: PunchSink> Default for SessionBuilder<P, K> {
    fn default() -> Self {
        Self::new()
    }
}
