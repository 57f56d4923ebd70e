//! Geopunch: a geofenced attendance state machine
//!
//! Geopunch decides whether a check-in or check-out is allowed from where
//! the user is standing. It follows the "pure core, imperative shell" split:
//! distance math and the attendance state machine are pure functions, while
//! position acquisition and event delivery sit behind traits in the shell.
//!
//! # Core Concepts
//!
//! - **Geofence**: a center coordinate and a radius; the haversine distance
//!   to the center decides whether a punch is inside (boundary inclusive)
//! - **State machine**: `CheckedOut` and `CheckedIn`, connected by one toggle
//!   that only an accepted punch can fire
//! - **Session**: acquires a position, evaluates it, transitions and hands the
//!   resulting `PunchEvent` to a sink
//!
//! # Example
//!
//! ```rust
//! use geopunch::builder::SessionBuilder;
//! use geopunch::config::AttendanceConfig;
//! use geopunch::core::{AttendanceStatus, Coordinate};
//! use geopunch::position::FixedPositionSource;
//! use geopunch::session::MemorySink;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let config = AttendanceConfig::default();
//! let desk = Coordinate::new(12.9716, 77.5946).unwrap();
//!
//! let mut session = SessionBuilder::new()
//!     .user_id("USER_123")
//!     .with_config(&config)
//!     .unwrap()
//!     .source(FixedPositionSource::new(desk))
//!     .sink(MemorySink::new())
//!     .build()
//!     .unwrap();
//!
//! let receipt = session.punch().await.unwrap();
//! assert_eq!(receipt.status, AttendanceStatus::CheckedIn);
//! assert_eq!(session.sink().len(), 1);
//! # }
//! ```
//!
//! Only one punch may be in flight per session; `PunchSession::punch` takes
//! `&mut self` so the borrow checker enforces it.
//!
//! The acquisition timeout uses Tokio's timer. Sessions polled by another
//! executor still work, but wait for the source without a bound.

pub mod builder;
pub mod config;
pub mod core;
pub mod position;
pub mod session;

// Re-export commonly used types
pub use crate::builder::SessionBuilder;
pub use crate::config::AttendanceConfig;
pub use crate::core::{
    evaluate, AttendanceStateMachine, AttendanceStatus, Coordinate, EvaluationResult, GeoFence,
    PunchDirection, PunchEvent,
};
pub use crate::position::{AcquisitionError, PositionSource};
pub use crate::session::{PunchError, PunchReceipt, PunchSession, PunchSink};
