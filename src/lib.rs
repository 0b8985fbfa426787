//! Coordspace: immutable coordinate values in two representations
//!
//! This crate models points relative to the center of a sphere either as
//! Cartesian `(x, y, z)` offsets or as spheric `(latitude, longitude, radius)`
//! triples. Both representations convert into each other, measure distance
//! (straight-line and along the sphere), compare with a fixed `1e-6`
//! tolerance, and can be interned through a canonicalizing cache so that
//! bit-identical component triples share one instance.
//!
//! ```rust
//! use coordspace::{CartesianCoordinate, Coordinate, CoordinateRegistry};
//!
//! let origin = CartesianCoordinate::new(0.0, 0.0, 0.0).unwrap();
//! let unit_x = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap();
//! assert_eq!(unit_x.cartesian_distance(&origin).unwrap(), 1.0);
//!
//! let registry = CoordinateRegistry::new();
//! let a = registry.get_cartesian(1.0, 2.0, 3.0).unwrap();
//! let b = registry.get_cartesian(1.0, 2.0, 3.0).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! ```

use thiserror::Error;

pub mod cache;
pub mod constants;
pub mod coordinates;
pub mod location;

// Re-export commonly used types
pub use cache::{
    CacheConfig, CacheStats, CartesianCache, ComponentKey, CoordinateCache, CoordinateRegistry,
    SphericCache,
};
pub use coordinates::cartesian::CartesianCoordinate;
pub use coordinates::spheric::SphericCoordinate;
pub use coordinates::{Coordinate, SharedCoordinate, Variant};
pub use location::Location;

/// Main error type for the coordspace library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A Cartesian component is NaN
    #[error("Invalid cartesian coordinate: x={x}, y={y}, z={z}")]
    InvalidCartesian {
        /// Offset along the x axis
        x: f64,
        /// Offset along the y axis
        y: f64,
        /// Offset along the z axis
        z: f64,
    },

    /// A spheric component is out of range, NaN, or the radius is negative or infinite
    #[error("Invalid spheric coordinate: latitude={latitude}, longitude={longitude}, radius={radius}")]
    InvalidSpheric {
        /// Latitude in radians
        latitude: f64,
        /// Longitude in radians
        longitude: f64,
        /// Distance from the center
        radius: f64,
    },

    /// A coordinate no longer satisfies its class invariant
    #[error("Class invariant violated: {0}")]
    InvariantViolation(String),

    /// An operation needed a coordinate but none was supplied
    #[error("Missing coordinate: {0}")]
    MissingCoordinate(String),
}

/// Result type for coordspace operations
pub type Result<T> = std::result::Result<T, CoordinateError>;
