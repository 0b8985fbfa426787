//! A place that may or may not have a coordinate
//!
//! `Location` only holds a shared handle to a canonical coordinate; all
//! geometry is delegated to [`Coordinate`].

use crate::coordinates::{Coordinate, SharedCoordinate};
use crate::{CoordinateError, Result};

/// Holder of an optional shared coordinate
#[derive(Debug, Clone, Default)]
pub struct Location {
    coordinate: Option<SharedCoordinate>,
}

impl Location {
    /// Create a location at `coordinate`
    pub fn new(coordinate: impl Into<SharedCoordinate>) -> Self {
        Self {
            coordinate: Some(coordinate.into()),
        }
    }

    /// Create a location without a coordinate
    pub fn unplaced() -> Self {
        Self::default()
    }

    /// The coordinate, if one was assigned
    pub fn coordinate(&self) -> Option<&SharedCoordinate> {
        self.coordinate.as_ref()
    }

    /// Straight-line distance to another location
    ///
    /// # Errors
    ///
    /// [`CoordinateError::MissingCoordinate`] if either side has no coordinate.
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        let here = self.require("distance origin")?;
        let there = other.require("distance target")?;
        here.distance(there)
    }

    /// Distance along the sphere to another location
    ///
    /// # Errors
    ///
    /// [`CoordinateError::MissingCoordinate`] if either side has no
    /// coordinate, or the conversion error of the target.
    pub fn spheric_distance_to(&self, other: &Location) -> Result<f64> {
        let here = self.require("distance origin")?;
        let there = other.require("distance target")?;
        here.spheric_distance(there)
    }

    fn require(&self, role: &str) -> Result<&SharedCoordinate> {
        self.coordinate
            .as_ref()
            .ok_or_else(|| CoordinateError::MissingCoordinate(format!("{role} has no coordinate")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CoordinateRegistry;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_location_shares_canonical_instance() {
        let registry = CoordinateRegistry::new();
        let a = Location::new(registry.get_cartesian(1.0, 0.0, 0.0).unwrap());
        let b = Location::new(registry.get_cartesian(1.0, 0.0, 0.0).unwrap());

        assert!(a.coordinate().unwrap().ptr_eq(b.coordinate().unwrap()));
        assert_eq!(a.distance_to(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_coordinate_fails_fast() {
        let registry = CoordinateRegistry::new();
        let placed = Location::new(registry.get_spheric(0.0, 0.0, 1.0).unwrap());
        let nowhere = Location::unplaced();

        assert!(nowhere.coordinate().is_none());
        assert!(matches!(
            placed.distance_to(&nowhere),
            Err(CoordinateError::MissingCoordinate(_))
        ));
        assert!(matches!(
            nowhere.spheric_distance_to(&placed),
            Err(CoordinateError::MissingCoordinate(_))
        ));
    }

    #[test]
    fn test_mixed_representation_distances() {
        let registry = CoordinateRegistry::new();
        let equator = Location::new(registry.get_spheric(0.0, 0.0, 1.0).unwrap());
        let quarter = Location::new(registry.get_cartesian(0.0, 1.0, 0.0).unwrap());

        assert_abs_diff_eq!(equator.distance_to(&quarter).unwrap(), 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(equator.spheric_distance_to(&quarter).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    }
}
