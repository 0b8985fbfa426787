//! Constants module for coordinate calculations

use std::f64::consts::{FRAC_PI_2, PI};

// Tolerance
/// Absolute tolerance used by every value comparison
pub const EPSILON: f64 = 1e-6;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Spheric bounds (inclusive)
/// Smallest valid latitude in radians
pub const LATITUDE_MIN: f64 = -FRAC_PI_2;
/// Largest valid latitude in radians
pub const LATITUDE_MAX: f64 = FRAC_PI_2;
/// Smallest valid longitude in radians
pub const LONGITUDE_MIN: f64 = -PI;
/// Largest valid longitude in radians
pub const LONGITUDE_MAX: f64 = PI;
