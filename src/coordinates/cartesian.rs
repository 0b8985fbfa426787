//! # Cartesian Coordinate Module
//!
//! This module provides the `(x, y, z)` representation of a point relative
//! to the center of the sphere.
//!
//! ## Validity
//!
//! Only NaN components are rejected. Infinite components are accepted at
//! construction, but such a point has no spheric form (`as_spheric` fails)
//! and never compares equal to anything except the identical instance,
//! since `∞ - ∞` is NaN.
//!
//! ## Conversion Convention
//!
//! Latitude is derived from the polar angle `acos(z / r)`, shifted by `-π/2`
//! into `[-π/2, π/2]`. Positive `z` therefore maps to negative latitude.
//! [`SphericCoordinate`] applies the inverse shift, so the round trip is
//! exact up to rounding.
//!
//! ## Examples
//!
//! ```rust
//! use coordspace::{CartesianCoordinate, Coordinate};
//!
//! let a = CartesianCoordinate::new(-2.0, 4.0, -3.0).unwrap();
//! let b = CartesianCoordinate::new(1.0, 1.0, 1.0).unwrap();
//! assert!((a.cartesian_distance(&b).unwrap() - 5.830951).abs() < 1e-6);
//! ```

use super::base;
use super::spheric::SphericCoordinate;
use super::{Coordinate, Variant};
use crate::{CoordinateError, Result};
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Immutable point in 3-D Euclidean space
///
/// Components are private; construct through [`CartesianCoordinate::new`]
/// or a [`crate::CartesianCache`] so the NaN check always runs.
#[derive(Debug, Clone, Copy)]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianCoordinate {
    /// Creates a new Cartesian coordinate
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidCartesian`] if any component is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordspace::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(coord.x(), 1.0);
    /// assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        if !Self::is_valid(x, y, z) {
            return Err(CoordinateError::InvalidCartesian { x, y, z });
        }
        Ok(CartesianCoordinate { x, y, z })
    }

    fn is_valid(x: f64, y: f64, z: f64) -> bool {
        !x.is_nan() && !y.is_nan() && !z.is_nan()
    }

    /// Offset along the x axis
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Offset along the y axis
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Offset along the z axis
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Distance from the center, `sqrt(x² + y² + z²)`
    ///
    /// Finite for every finite point, even where the squares would overflow.
    pub fn magnitude(&self) -> f64 {
        base::scaled_norm(&self.to_vector3())
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidCartesian`] if any component is NaN.
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Self> {
        Self::new(vec.x, vec.y, vec.z)
    }

    /// Computes the spheric form
    ///
    /// The origin maps to `(0, 0, 0)` without dividing by the zero radius.
    fn to_spheric(self) -> Result<SphericCoordinate> {
        let radius = self.magnitude();
        if radius == 0.0 {
            return SphericCoordinate::new(0.0, 0.0, 0.0);
        }

        // Rounding can push |z / r| past 1
        let cos_polar = (self.z / radius).clamp(-1.0, 1.0);
        let latitude = cos_polar.acos() - FRAC_PI_2;
        let longitude = self.y.atan2(self.x);

        SphericCoordinate::new(latitude, longitude, radius)
    }
}

impl Coordinate for CartesianCoordinate {
    fn variant(&self) -> Variant<'_> {
        Variant::Cartesian(self)
    }

    fn as_cartesian(&self) -> CartesianCoordinate {
        base::assert_class_invariants(self);
        *self
    }

    fn as_spheric(&self) -> Result<SphericCoordinate> {
        base::assert_class_invariants(self);
        let spheric = self.to_spheric()?;
        base::assert_class_invariants(&spheric);
        Ok(spheric)
    }

    fn check_invariants(&self) -> Result<()> {
        base::check_invariant(Self::is_valid(self.x, self.y, self.z), || {
            format!("cartesian component is NaN: {}", self)
        })
    }

    fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        base::assert_class_invariants(self);
        let other = other.as_cartesian();
        let distance = base::euclidean_distance(self, &other);
        base::assert_class_invariants(self);
        Ok(distance)
    }

    /// Converts `self` to spheric form and measures from there
    fn spheric_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        let distance = self.as_spheric()?.spheric_distance(other)?;
        base::assert_class_invariants(self);
        Ok(distance)
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cartesian{{x={},y={},z={}}}", self.x, self.y, self.z)
    }
}
