//! # Spheric Coordinate Module
//!
//! This module provides the `(latitude, longitude, radius)` representation
//! of a point relative to the center of the sphere.
//!
//! ## Ranges
//!
//! - **latitude**: radians in `[-π/2, π/2]`
//! - **longitude**: radians in `[-π, π]`
//! - **radius**: finite and `>= 0`
//!
//! Anything else, including NaN, is rejected at construction.
//!
//! ## Memoized Cartesian Form
//!
//! The Cartesian equivalent is computed once in the constructor and stored
//! alongside the components. It is derived data: the fields are private, so
//! it always agrees with the conversion formula.
//!
//! ```text
//! x =  r · cos(lat) · cos(lon)
//! y =  r · cos(lat) · sin(lon)
//! z = -r · sin(lat)
//! ```

use super::base;
use super::cartesian::CartesianCoordinate;
use super::{Coordinate, Variant};
use crate::constants::{DEG2RAD, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, RAD2DEG};
use crate::{CoordinateError, Result};
use log::warn;
use std::fmt;

/// Immutable point given by two angles and a distance from the center
#[derive(Debug, Clone, Copy)]
pub struct SphericCoordinate {
    latitude: f64,
    longitude: f64,
    radius: f64,
    cartesian: CartesianCoordinate,
}

impl SphericCoordinate {
    /// Creates a new spheric coordinate from radians
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidSpheric`] if an angle is outside its range,
    /// the radius is negative or not finite, or any component is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordspace::SphericCoordinate;
    ///
    /// let coord = SphericCoordinate::new(0.28, 0.37, 5.0).unwrap();
    /// assert_eq!(coord.radius(), 5.0);
    /// assert!(SphericCoordinate::new(2.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64, radius: f64) -> Result<Self> {
        if !Self::is_valid(latitude, longitude, radius) {
            return Err(CoordinateError::InvalidSpheric {
                latitude,
                longitude,
                radius,
            });
        }

        let cos_lat = latitude.cos();
        let cartesian = CartesianCoordinate::new(
            radius * cos_lat * longitude.cos(),
            radius * cos_lat * longitude.sin(),
            -radius * latitude.sin(),
        )?;

        Ok(SphericCoordinate {
            latitude,
            longitude,
            radius,
            cartesian,
        })
    }

    /// Creates a new spheric coordinate from degrees
    ///
    /// # Errors
    ///
    /// Same as [`SphericCoordinate::new`] after conversion to radians.
    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Result<Self> {
        Self::new(latitude_deg * DEG2RAD, longitude_deg * DEG2RAD, radius)
    }

    fn is_valid(latitude: f64, longitude: f64, radius: f64) -> bool {
        (LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude)
            && (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude)
            && radius.is_finite()
            && radius >= 0.0
    }

    /// Latitude in radians
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Distance from the center
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Latitude in degrees
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude * RAD2DEG
    }

    /// Longitude in degrees
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude * RAD2DEG
    }

    /// Components as `[latitude, longitude, radius]`
    pub fn components(&self) -> [f64; 3] {
        [self.latitude, self.longitude, self.radius]
    }
}

impl Coordinate for SphericCoordinate {
    fn variant(&self) -> Variant<'_> {
        Variant::Spheric(self)
    }

    fn as_cartesian(&self) -> CartesianCoordinate {
        base::assert_class_invariants(self);
        self.cartesian
    }

    fn as_spheric(&self) -> Result<SphericCoordinate> {
        base::assert_class_invariants(self);
        Ok(*self)
    }

    fn check_invariants(&self) -> Result<()> {
        base::check_invariant(
            Self::is_valid(self.latitude, self.longitude, self.radius),
            || format!("spheric component out of range: {}", self),
        )?;
        self.cartesian.check_invariants()
    }

    /// Converts `self` to Cartesian form and measures from there
    fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        base::assert_class_invariants(self);
        let distance = self.cartesian.cartesian_distance(other)?;
        base::assert_class_invariants(self);
        Ok(distance)
    }

    /// Central angle between both points, scaled by this coordinate's radius
    ///
    /// A radius mismatch is logged and does not fail the call.
    fn spheric_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        base::assert_class_invariants(self);
        let other = other.as_spheric()?;

        if !base::is_double_equal(self.radius, other.radius) {
            warn!(
                "Spheric distance between different radii ({} vs {}), using {}",
                self.radius, other.radius, self.radius
            );
        }

        let distance = self.radius * base::central_angle(self, &other);
        base::assert_class_invariants(self);
        Ok(distance)
    }
}

impl PartialEq for SphericCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for SphericCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spheric{{latitude={},longitude={},radius={}}}",
            self.latitude, self.longitude, self.radius
        )
    }
}
