//! Validation rules for attendance configuration.
//!
//! Every rule runs on every call; failures are accumulated with
//! `Validation` so a misconfigured deployment learns about all of its
//! problems at once.

use super::error::ConfigViolation;
use super::AttendanceConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn require(ok: bool, violation: ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Run all rules against `config`, accumulating every violation.
pub fn validate(config: &AttendanceConfig) -> Check {
    let fence = &config.fence;
    let mut checks: Vec<Check> = Vec::new();

    checks.push(require(
        fence.latitude.is_finite() && (-90.0..=90.0).contains(&fence.latitude),
        ConfigViolation::LatitudeOutOfRange(fence.latitude),
    ));
    checks.push(require(
        fence.longitude.is_finite() && (-180.0..=180.0).contains(&fence.longitude),
        ConfigViolation::LongitudeOutOfRange(fence.longitude),
    ));
    checks.push(require(
        fence.radius_meters.is_finite() && fence.radius_meters > 0.0,
        ConfigViolation::InvalidRadius(fence.radius_meters),
    ));

    if let Some(timeout_ms) = config.acquisition.timeout_ms {
        checks.push(require(timeout_ms > 0, ConfigViolation::ZeroTimeout));
    }

    Validation::all_vec(checks).map(|_| ())
}
