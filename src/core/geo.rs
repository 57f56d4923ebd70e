//! Great-circle geometry and the geofence verdict.
//!
//! Everything here is pure: the same inputs always produce the same
//! distance, and nothing is rounded. Rounding for display belongs to the
//! caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Errors raised when constructing geometry from untrusted values.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeoError {
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Fence radius must be a positive finite number of meters (got {0})")]
    InvalidRadius(f64),
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid ranges.
    ///
    /// ```rust
    /// use geopunch::core::{Coordinate, GeoError};
    ///
    /// assert!(Coordinate::new(12.9716, 77.5946).is_ok());
    /// assert_eq!(
    ///     Coordinate::new(91.0, 0.0),
    ///     Err(GeoError::LatitudeOutOfRange(91.0))
    /// );
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate without range checks.
    ///
    /// Out-of-range values are a caller contract violation; the evaluator
    /// does not re-check them.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other`, in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self, other)
    }
}

/// A circular acceptance zone around a fixed point.
///
/// Only constructible through [`GeoFence::new`], so the radius is always
/// positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoFence {
    center: Coordinate,
    radius_meters: f64,
}

impl GeoFence {
    pub fn new(center: Coordinate, radius_meters: f64) -> Result<Self, GeoError> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(GeoError::InvalidRadius(radius_meters));
        }
        Ok(Self {
            center,
            radius_meters,
        })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Classify `point` against this fence.
    pub fn evaluate(&self, point: &Coordinate) -> EvaluationResult {
        evaluate(point, self)
    }
}

/// Distance of a point from the fence center and whether it is admitted.
///
/// Carries the evaluated point so a punch can only record the coordinate
/// its verdict was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub point: Coordinate,
    pub distance_meters: f64,
    pub within_fence: bool,
}

/// Haversine great-circle distance between two coordinates, in meters.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for near-antipodal points. NaN stays NaN.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Classify `point` against `fence`.
///
/// The boundary is inclusive: a point exactly `radius_meters` away is
/// inside.
///
/// ```rust
/// use geopunch::core::{evaluate, Coordinate, GeoFence};
///
/// let office = Coordinate::new(12.9716, 77.5946).unwrap();
/// let fence = GeoFence::new(office, 100.0).unwrap();
///
/// let at_desk = evaluate(&office, &fence);
/// assert_eq!(at_desk.distance_meters, 0.0);
/// assert!(at_desk.within_fence);
///
/// let across_town = Coordinate::new(12.9800, 77.6000).unwrap();
/// assert!(!evaluate(&across_town, &fence).within_fence);
/// ```
pub fn evaluate(point: &Coordinate, fence: &GeoFence) -> EvaluationResult {
    let distance_meters = haversine_distance(point, &fence.center);
    EvaluationResult {
        point: *point,
        distance_meters,
        within_fence: distance_meters <= fence.radius_meters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> Coordinate {
        Coordinate::new(12.9716, 77.5946).unwrap()
    }

    fn office_fence() -> GeoFence {
        GeoFence::new(office(), 100.0).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let point = office();
        assert_eq!(haversine_distance(&point, &point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = office();
        let b = Coordinate::new(12.9800, 77.6000).unwrap();
        assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(1.0, 0.0).unwrap();
        let d = a.distance_to(&b);
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 180.0).unwrap();
        let expected = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((a.distance_to(&b) - expected).abs() < 1.0);
    }

    #[test]
    fn point_at_center_is_inside() {
        let result = evaluate(&office(), &office_fence());
        assert_eq!(result.distance_meters, 0.0);
        assert!(result.within_fence);
    }

    #[test]
    fn point_across_town_is_outside() {
        let point = Coordinate::new(12.9800, 77.6000).unwrap();
        let result = office_fence().evaluate(&point);
        assert!(
            (1000.0..=1200.0).contains(&result.distance_meters),
            "got {}",
            result.distance_meters
        );
        assert!(!result.within_fence);
    }

    #[test]
    fn boundary_is_inclusive() {
        let point = Coordinate::new(12.9725, 77.5946).unwrap();
        let exact = haversine_distance(&point, &office());
        let fence = GeoFence::new(office(), exact).unwrap();

        let result = evaluate(&point, &fence);
        assert_eq!(result.distance_meters, exact);
        assert!(result.within_fence);
    }

    #[test]
    fn just_past_the_boundary_is_outside() {
        let point = Coordinate::new(12.9725, 77.5946).unwrap();
        let exact = haversine_distance(&point, &office());
        let fence = GeoFence::new(office(), exact - 1e-6).unwrap();

        assert!(!evaluate(&point, &fence).within_fence);
    }

    #[test]
    fn coordinate_rejects_out_of_range_values() {
        assert_eq!(
            Coordinate::new(-90.5, 0.0),
            Err(GeoError::LatitudeOutOfRange(-90.5))
        );
        assert_eq!(
            Coordinate::new(0.0, 180.5),
            Err(GeoError::LongitudeOutOfRange(180.5))
        );
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn fence_rejects_non_positive_radius() {
        assert_eq!(
            GeoFence::new(office(), 0.0),
            Err(GeoError::InvalidRadius(0.0))
        );
        assert!(GeoFence::new(office(), -5.0).is_err());
        assert!(GeoFence::new(office(), f64::INFINITY).is_err());
    }

    #[test]
    fn nan_point_yields_nan_distance_and_is_outside() {
        let point = Coordinate::new_unchecked(f64::NAN, 77.5946);

        let result = evaluate(&point, &office_fence());
        assert!(result.distance_meters.is_nan());
        assert!(!result.within_fence);

        let whole_planet = GeoFence::new(office(), 2.5e7).unwrap();
        let result = evaluate(&point, &whole_planet);
        assert!(result.distance_meters.is_nan());
        assert!(!result.within_fence);
    }

    #[test]
    fn evaluation_carries_the_evaluated_point() {
        let point = Coordinate::new(12.9800, 77.6000).unwrap();
        assert_eq!(evaluate(&point, &office_fence()).point, point);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let point = Coordinate::new(12.9720, 77.5950).unwrap();
        let fence = office_fence();
        assert_eq!(evaluate(&point, &fence), evaluate(&point, &fence));
    }
}
