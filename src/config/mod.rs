//! Attendance configuration.
//!
//! The fence center, radius and acquisition preferences are fixed for the
//! lifetime of a session. They are read from TOML once at startup and
//! validated with [`rules::validate`].
//!
//! # Example
//!
//! ```rust
//! use geopunch::config::AttendanceConfig;
//!
//! let config = AttendanceConfig::from_toml_str(
//!     r#"
//!     [fence]
//!     latitude = 12.9716
//!     longitude = 77.5946
//!     radius_meters = 150.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.fence().unwrap().radius_meters(), 150.0);
//! assert!(config.enforce_fence);
//! ```

pub mod error;
pub mod rules;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Coordinate, FenceGuard, GeoError, GeoFence};
use crate::position::{AccuracyPreference, AcquisitionOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;

/// Office reference point used when no fence is configured.
pub const DEFAULT_OFFICE: Coordinate = Coordinate::new_unchecked(12.9716, 77.5946);
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenceConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_OFFICE.latitude,
            longitude: DEFAULT_OFFICE.longitude,
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    pub accuracy: AccuracyPreference,
    pub timeout_ms: Option<u64>,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            accuracy: AccuracyPreference::High,
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Set to `false` to admit punches from anywhere (desk testing only)
    pub enforce_fence: bool,
    pub fence: FenceConfig,
    pub acquisition: AcquisitionConfig,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            enforce_fence: true,
            fence: FenceConfig::default(),
            acquisition: AcquisitionConfig::default(),
        }
    }
}

impl AttendanceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "attendance config loaded");
        Ok(config)
    }

    /// Check every rule, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn fence(&self) -> Result<GeoFence, GeoError> {
        let center = Coordinate::new(self.fence.latitude, self.fence.longitude)?;
        GeoFence::new(center, self.fence.radius_meters)
    }

    pub fn guard(&self) -> FenceGuard {
        FenceGuard::from_enforce_flag(self.enforce_fence)
    }

    pub fn acquisition_options(&self) -> AcquisitionOptions {
        AcquisitionOptions {
            accuracy: self.acquisition.accuracy,
            timeout: self.acquisition.timeout_ms.map(Duration::from_millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_tech_park_office() {
        let config = AttendanceConfig::default();
        let fence = config.fence().unwrap();

        assert_eq!(fence.center(), DEFAULT_OFFICE);
        assert_eq!(fence.radius_meters(), 100.0);
        assert_eq!(config.guard(), FenceGuard::Enforced);
        assert_eq!(
            config.acquisition_options(),
            AcquisitionOptions::new(AccuracyPreference::High)
                .with_timeout(Duration::from_secs(10))
        );
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = AttendanceConfig::from_toml_str("").unwrap();
        assert_eq!(config, AttendanceConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AttendanceConfig::from_toml_str(
            r#"
            [fence]
            radius_meters = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.fence.radius_meters, 40.0);
        assert_eq!(config.fence.latitude, DEFAULT_OFFICE.latitude);
        assert_eq!(config.acquisition.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn invalid_document_reports_every_violation() {
        let err = AttendanceConfig::from_toml_str(
            r#"
            [fence]
            latitude = 95.0
            radius_meters = 0.0
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::LatitudeOutOfRange(95.0)));
                assert!(violations.contains(&ConfigViolation::InvalidRadius(0.0)));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = AttendanceConfig::from_toml_str("[fence\nlatitude = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_accuracy_is_a_parse_error() {
        let err = AttendanceConfig::from_toml_str(
            r#"
            [acquisition]
            accuracy = "extreme"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "enforce_fence = false\n[acquisition]\naccuracy = \"balanced\""
        )
        .unwrap();

        let config = AttendanceConfig::from_file(file.path()).unwrap();

        assert!(!config.enforce_fence);
        assert_eq!(config.acquisition.accuracy, AccuracyPreference::Balanced);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AttendanceConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn invalid_message_lists_violations() {
        let err = ConfigError::Invalid(vec![
            ConfigViolation::ZeroTimeout,
            ConfigViolation::InvalidRadius(-2.0),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: acquisition.timeout_ms must be greater than zero; \
             fence.radius_meters must be positive and finite (got -2)"
        );
    }
}
