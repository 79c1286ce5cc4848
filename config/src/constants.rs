//! # Configuration Constants
//!
//! Centralized constants for the vector crates. Float comparison tolerances
//! and angle conversion factors are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Angles**: Degree/radian conversion

use std::f64::consts::PI;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Degrees in half a turn (π radians).
///
/// # Example
///
/// ```rust
/// use config::constants::HALF_TURN_DEGREES;
///
/// assert_eq!(HALF_TURN_DEGREES * 2.0, 360.0);
/// ```
pub const HALF_TURN_DEGREES: f64 = 180.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Converts radians to degrees.
///
/// Evaluated as `radians * 180 / π` (multiply first, then divide), which
/// keeps axis-aligned angles exact: `π/2` maps to exactly `90.0`.
///
/// # Example
///
/// ```rust
/// use config::constants::radians_to_degrees;
///
/// assert_eq!(radians_to_degrees(std::f64::consts::PI), 180.0);
/// assert_eq!(radians_to_degrees(0.0), 0.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * HALF_TURN_DEGREES / PI
}

/// Converts degrees to radians.
///
/// Evaluated as `degrees / 180 * π`.
///
/// # Example
///
/// ```rust
/// use config::constants::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// assert_eq!(degrees_to_radians(0.0), 0.0);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / HALF_TURN_DEGREES * PI
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
