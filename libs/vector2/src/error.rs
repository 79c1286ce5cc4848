//! # Error Types
//!
//! Error types for vector operations. Only scalar division can fail; every
//! other numeric edge case yields a well-defined value.
//!
//! ## Error Policy
//!
//! - Errors are raised before any component is computed
//! - No fallback values for rejected input
//! - Errors name the offending axis

use std::fmt;
use thiserror::Error;

// =============================================================================
// AXIS
// =============================================================================

/// One of the two vector axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2::{Axis, Vector2, VectorError};
///
/// match Vector2::new(10.0, 20.0).div_scalar(1.0, 0.0) {
///     Ok(v) => println!("{v}"),
///     Err(VectorError::DivideByZero { axis }) => assert_eq!(axis, Axis::Y),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Scalar division with an effective divisor of zero.
    ///
    /// Reports the first axis (x before y) whose divisor was zero.
    #[error("division by zero on the {axis} axis")]
    DivideByZero {
        /// Axis whose effective scalar was zero
        axis: Axis,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2::{Vector2, VectorResult};
///
/// fn halve(v: Vector2) -> VectorResult<Vector2> {
///     v.div_scalar(2.0, None)
/// }
///
/// assert_eq!(halve(Vector2::new(4.0, 8.0)).unwrap(), Vector2::new(2.0, 4.0));
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
