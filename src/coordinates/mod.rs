//! The coordinate contract and its two representations
//!
//! [`Coordinate`] is the capability every representation provides:
//! conversion into either form, straight-line and spheric distance, and
//! tolerant value equality. Instead of inheriting from a common base class,
//! each implementor exposes itself as a [`Variant`] (a borrowed tagged
//! union) and the shared logic in [`base`] matches on that.
//!
//! Absent arguments are unrepresentable: every operation takes
//! `&dyn Coordinate`. Where a coordinate may be missing (see
//! [`crate::Location`]) the caller gets [`crate::CoordinateError::MissingCoordinate`]
//! rather than a NaN distance.

pub mod base;
pub mod cartesian;
pub mod spheric;

use self::cartesian::CartesianCoordinate;
use self::spheric::SphericCoordinate;
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// Borrowed view of a coordinate as one of the two concrete representations
#[derive(Debug, Clone, Copy)]
pub enum Variant<'a> {
    /// `(x, y, z)` representation
    Cartesian(&'a CartesianCoordinate),
    /// `(latitude, longitude, radius)` representation
    Spheric(&'a SphericCoordinate),
}

impl<'a> Variant<'a> {
    /// The viewed coordinate behind the contract trait
    pub fn coordinate(self) -> &'a dyn Coordinate {
        match self {
            Variant::Cartesian(c) => c,
            Variant::Spheric(s) => s,
        }
    }
}

/// Operations shared by every coordinate representation
///
/// All operations are pure. Distance and conversion results are in the
/// units of the stored components (radians for angles).
pub trait Coordinate: fmt::Debug + fmt::Display + Send + Sync {
    /// Exposes the concrete representation behind this coordinate
    fn variant(&self) -> Variant<'_>;

    /// Returns the Cartesian representation
    fn as_cartesian(&self) -> CartesianCoordinate;

    /// Returns the spheric representation
    ///
    /// Fails with [`crate::CoordinateError::InvalidSpheric`] when no valid
    /// spheric form exists (a Cartesian point with an infinite component).
    fn as_spheric(&self) -> Result<SphericCoordinate>;

    /// Checks the class invariant, reporting a violation as an error
    fn check_invariants(&self) -> Result<()>;

    /// Euclidean distance after normalizing both operands to Cartesian
    fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64>;

    /// Distance along the sphere after normalizing both operands to spheric
    fn spheric_distance(&self, other: &dyn Coordinate) -> Result<f64>;

    /// Same as [`Coordinate::cartesian_distance`]
    fn distance(&self, other: &dyn Coordinate) -> Result<f64> {
        self.cartesian_distance(other)
    }

    /// Tolerant value equality, symmetric across representations
    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        let this = self.variant();
        base::assert_class_invariants(this.coordinate());
        let equal = base::values_equal(this, other.variant());
        base::assert_class_invariants(this.coordinate());
        equal
    }
}

/// A canonical coordinate shared by reference, in either representation
///
/// This is what collaborators hold: cloning it clones the `Arc`, never the
/// coordinate itself.
#[derive(Debug, Clone)]
pub enum SharedCoordinate {
    /// Shared Cartesian instance
    Cartesian(Arc<CartesianCoordinate>),
    /// Shared spheric instance
    Spheric(Arc<SphericCoordinate>),
}

impl SharedCoordinate {
    fn inner(&self) -> &dyn Coordinate {
        match self {
            SharedCoordinate::Cartesian(c) => &**c,
            SharedCoordinate::Spheric(s) => &**s,
        }
    }

    /// Returns true if both handles point at the same instance
    pub fn ptr_eq(&self, other: &SharedCoordinate) -> bool {
        match (self, other) {
            (SharedCoordinate::Cartesian(a), SharedCoordinate::Cartesian(b)) => Arc::ptr_eq(a, b),
            (SharedCoordinate::Spheric(a), SharedCoordinate::Spheric(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Coordinate for SharedCoordinate {
    fn variant(&self) -> Variant<'_> {
        self.inner().variant()
    }

    fn as_cartesian(&self) -> CartesianCoordinate {
        self.inner().as_cartesian()
    }

    fn as_spheric(&self) -> Result<SphericCoordinate> {
        self.inner().as_spheric()
    }

    fn check_invariants(&self) -> Result<()> {
        self.inner().check_invariants()
    }

    fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        self.inner().cartesian_distance(other)
    }

    fn spheric_distance(&self, other: &dyn Coordinate) -> Result<f64> {
        self.inner().spheric_distance(other)
    }
}

impl From<Arc<CartesianCoordinate>> for SharedCoordinate {
    fn from(coordinate: Arc<CartesianCoordinate>) -> Self {
        SharedCoordinate::Cartesian(coordinate)
    }
}

impl From<Arc<SphericCoordinate>> for SharedCoordinate {
    fn from(coordinate: Arc<SphericCoordinate>) -> Self {
        SharedCoordinate::Spheric(coordinate)
    }
}

impl From<CartesianCoordinate> for SharedCoordinate {
    fn from(coordinate: CartesianCoordinate) -> Self {
        SharedCoordinate::Cartesian(Arc::new(coordinate))
    }
}

impl From<SphericCoordinate> for SharedCoordinate {
    fn from(coordinate: SphericCoordinate) -> Self {
        SharedCoordinate::Spheric(Arc::new(coordinate))
    }
}

impl fmt::Display for SharedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl PartialEq for SharedCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cross_representation_equality_is_symmetric() {
        let cartesian = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        let spheric = cartesian.as_spheric().unwrap();

        assert!(cartesian.is_equal(&spheric));
        assert!(spheric.is_equal(&cartesian));

        let elsewhere = SphericCoordinate::new(0.0, 0.0, 1.0).unwrap();
        assert!(!cartesian.is_equal(&elsewhere));
        assert!(!elsewhere.is_equal(&cartesian));
    }

    #[test]
    fn test_degenerate_spheric_equals_origin() {
        // Any angles at radius zero describe the origin
        let origin = CartesianCoordinate::new(0.0, 0.0, 0.0).unwrap();
        let collapsed = SphericCoordinate::new(0.5, 0.3, 0.0).unwrap();

        assert!(origin.is_equal(&collapsed));
        assert!(collapsed.is_equal(&origin));
    }

    #[test]
    fn test_shared_coordinate_delegates() {
        let a: SharedCoordinate = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap().into();
        let b: SharedCoordinate = CartesianCoordinate::new(0.0, 0.0, 0.0).unwrap().into();

        assert_eq!(a.distance(&b).unwrap(), 1.0);
        assert_eq!(a.to_string(), "Cartesian{x=1,y=0,z=0}");
        assert!(a.is_equal(&a.clone()));
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b);
    }

    /// Wraps a valid value but reports a broken invariant
    #[derive(Debug)]
    struct Corrupted(CartesianCoordinate);

    impl fmt::Display for Corrupted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Corrupted({})", self.0)
        }
    }

    impl Coordinate for Corrupted {
        fn variant(&self) -> Variant<'_> {
            Variant::Cartesian(&self.0)
        }

        fn as_cartesian(&self) -> CartesianCoordinate {
            self.0
        }

        fn as_spheric(&self) -> Result<SphericCoordinate> {
            self.0.as_spheric()
        }

        fn check_invariants(&self) -> Result<()> {
            Err(crate::CoordinateError::InvariantViolation("corrupted".to_string()))
        }

        fn cartesian_distance(&self, other: &dyn Coordinate) -> Result<f64> {
            self.0.cartesian_distance(other)
        }

        fn spheric_distance(&self, other: &dyn Coordinate) -> Result<f64> {
            self.0.spheric_distance(other)
        }
    }

    #[test]
    fn test_variant_exposes_the_viewed_coordinate() {
        let cartesian = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        let viewed = cartesian.variant().coordinate();
        assert!(viewed.check_invariants().is_ok());
        assert_eq!(viewed.to_string(), cartesian.to_string());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "corrupted")]
    fn test_broken_invariant_is_caught_by_assertion() {
        let corrupted = Corrupted(CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap());
        base::assert_class_invariants(&corrupted);
    }

    #[test]
    fn test_shared_coordinate_is_equal_to_plain_value() {
        let shared: SharedCoordinate = SphericCoordinate::new(0.0, 0.0, 2.0).unwrap().into();
        let plain = CartesianCoordinate::new(2.0, 0.0, 0.0).unwrap();

        assert!(shared.is_equal(&plain));
        assert!(plain.is_equal(&shared));
        assert_abs_diff_eq!(shared.cartesian_distance(&plain).unwrap(), 0.0, epsilon = 1e-12);
    }
}
