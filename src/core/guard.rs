//! Guard deciding whether an evaluation may drive a transition.
//!
//! Guards are pure: they look only at the evaluation and never mutate
//! anything. The machine consults its guard before toggling.

use super::geo::EvaluationResult;
use serde::{Deserialize, Serialize};

/// Policy applied to a fence evaluation before a punch is accepted.
///
/// # Example
///
/// ```rust
/// use geopunch::core::{evaluate, Coordinate, FenceGuard, GeoFence};
///
/// let office = Coordinate::new(12.9716, 77.5946).unwrap();
/// let fence = GeoFence::new(office, 100.0).unwrap();
/// let outside = evaluate(&Coordinate::new(12.9800, 77.6000).unwrap(), &fence);
///
/// assert!(!FenceGuard::Enforced.check(&outside));
/// assert!(FenceGuard::Bypassed.check(&outside));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceGuard {
    /// Only evaluations inside the fence are admitted.
    #[default]
    Enforced,

    /// Every evaluation is admitted; the distance is still measured.
    Bypassed,
}

impl FenceGuard {
    pub fn from_enforce_flag(enforce: bool) -> Self {
        if enforce {
            Self::Enforced
        } else {
            Self::Bypassed
        }
    }

    pub fn is_enforced(&self) -> bool {
        matches!(self, Self::Enforced)
    }

    /// Check whether the evaluation allows a transition.
    pub fn check(&self, evaluation: &EvaluationResult) -> bool {
        match self {
            Self::Enforced => evaluation.within_fence,
            Self::Bypassed => true,
        }
    }
}
