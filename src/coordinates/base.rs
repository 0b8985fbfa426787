//! Behavior shared by both coordinate representations
//!
//! These free functions hold the single implementation of tolerant
//! comparison, distance and invariant checking. `CartesianCoordinate` and
//! `SphericCoordinate` call into them instead of duplicating the logic.

use super::cartesian::CartesianCoordinate;
use super::spheric::SphericCoordinate;
use super::{Coordinate, Variant};
use crate::constants::EPSILON;
use crate::{CoordinateError, Result};
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Compares two values with the crate-wide absolute tolerance
///
/// Returns `false` whenever the difference is NaN, so two infinities of the
/// same sign never compare equal.
pub fn is_double_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Compares two component triples element-wise with [`is_double_equal`]
pub fn components_equal(a: [f64; 3], b: [f64; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(&l, &r)| is_double_equal(l, r))
}

/// Euclidean length of `v` without squaring the raw components
///
/// The vector is divided by its largest absolute component before the norm
/// is taken, so finite inputs up to `f64::MAX` give a finite length.
pub fn scaled_norm(v: &Vector3<f64>) -> f64 {
    let scale = v.amax();
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    (v / scale).norm() * scale
}

/// Straight-line distance between two Cartesian points
pub fn euclidean_distance(a: &CartesianCoordinate, b: &CartesianCoordinate) -> f64 {
    scaled_norm(&(a.to_vector3() - b.to_vector3()))
}

/// Central angle between two spheric points in radians, in `[0, π]`
///
/// Uses the spherical law of cosines on the latitudes and longitudes only;
/// radii are ignored.
pub fn central_angle(a: &SphericCoordinate, b: &SphericCoordinate) -> f64 {
    let (lat1, lat2) = (a.latitude(), b.latitude());
    let delta_lon = a.longitude() - b.longitude();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();

    // Handle numerical precision issues
    if cos_angle >= 1.0 {
        0.0
    } else if cos_angle <= -1.0 {
        PI
    } else {
        cos_angle.acos()
    }
}

/// Value equality between any two coordinates
///
/// Same representation: identical instance, or every component within
/// tolerance. Mixed representations are compared in Cartesian space, which
/// is the only direction that cannot fail and keeps the relation symmetric.
pub fn values_equal(a: Variant<'_>, b: Variant<'_>) -> bool {
    match (a, b) {
        (Variant::Cartesian(l), Variant::Cartesian(r)) => {
            std::ptr::eq(l, r) || components_equal(l.components(), r.components())
        }
        (Variant::Spheric(l), Variant::Spheric(r)) => {
            std::ptr::eq(l, r) || components_equal(l.components(), r.components())
        }
        (Variant::Cartesian(c), Variant::Spheric(s)) | (Variant::Spheric(s), Variant::Cartesian(c)) => {
            components_equal(c.components(), s.as_cartesian().components())
        }
    }
}

/// Turns a failed invariant predicate into an error
pub fn check_invariant(holds: bool, describe: impl FnOnce() -> String) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(CoordinateError::InvariantViolation(describe()))
    }
}

/// Asserts the class invariant of `coordinate` in debug and test builds
///
/// Public operations call this on entry and on every coordinate they
/// produce. Compiled out in release builds, like any `debug_assert!`.
#[inline]
pub fn assert_class_invariants(coordinate: &dyn Coordinate) {
    if cfg!(debug_assertions) {
        if let Err(err) = coordinate.check_invariants() {
            panic!("{err} ({coordinate})");
        }
    }
}
