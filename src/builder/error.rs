//! Build errors for the session builder.

use thiserror::Error;

/// Errors that can occur when building a punch session.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("User id not specified. Call .user_id(id) before .build()")]
    MissingUserId,

    #[error("User id must not be blank")]
    BlankUserId,

    #[error("Geofence not specified. Call .fence(fence) or .with_config(config)")]
    MissingFence,

    #[error("Position source not specified. Call .source(source)")]
    MissingSource,

    #[error("Punch sink not specified. Call .sink(sink)")]
    MissingSink,
}
