//! Configuration errors and violations.

use crate::core::GeoError;
use std::path::PathBuf;
use thiserror::Error;

/// A single reason a configuration is unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("fence.latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("fence.longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("fence.radius_meters must be positive and finite (got {0})")]
    InvalidRadius(f64),

    #[error("acquisition.timeout_ms must be greater than zero")]
    ZeroTimeout,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Every violation found, not just the first
    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
