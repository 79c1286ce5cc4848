//! # Vector-Scalar Arithmetic
//!
//! The two-scalar operations take `sx` for the x axis and an optional `sy`
//! for the y axis. When `sy` is `None` the effective y scalar is `sx`; an
//! explicit `0.0` is `Some(0.0)` and is used as given.
//!
//! ```rust
//! use vector2::Vector2;
//!
//! let v = Vector2::new(10.0, 20.0);
//! assert_eq!(v.mul_scalar(5.0, None), Vector2::new(50.0, 100.0));
//! assert_eq!(v.mul_scalar(1.0, 5.0), Vector2::new(10.0, 100.0));
//! assert_eq!(v.mul_scalar(5.0, 0.0), Vector2::new(50.0, 0.0));
//! ```
//!
//! The single-axis variants (`*_scalar_x`, `*_scalar_y`) take one scalar and
//! leave the other axis unchanged.

use crate::error::{Axis, VectorError, VectorResult};
use crate::Vector2;

/// Resolves the y scalar: `sy` when given, otherwise `sx`.
#[inline]
fn effective_scalars(sx: f64, sy: Option<f64>) -> (f64, f64) {
    (sx, sy.unwrap_or(sx))
}

impl Vector2 {
    // =========================================================================
    // TWO-AXIS
    // =========================================================================

    /// `(x + sx, y + sy)`, with `sy` defaulting to `sx`.
    pub fn add_scalar(self, sx: f64, sy: impl Into<Option<f64>>) -> Vector2 {
        let (sx, sy) = effective_scalars(sx, sy.into());
        Vector2::new(self.x() + sx, self.y() + sy)
    }

    /// `(x - sx, y - sy)`, with `sy` defaulting to `sx`.
    pub fn sub_scalar(self, sx: f64, sy: impl Into<Option<f64>>) -> Vector2 {
        let (sx, sy) = effective_scalars(sx, sy.into());
        Vector2::new(self.x() - sx, self.y() - sy)
    }

    /// `(x * sx, y * sy)`, with `sy` defaulting to `sx`.
    pub fn mul_scalar(self, sx: f64, sy: impl Into<Option<f64>>) -> Vector2 {
        let (sx, sy) = effective_scalars(sx, sy.into());
        Vector2::new(self.x() * sx, self.y() * sy)
    }

    /// `(x / sx, y / sy)`, with `sy` defaulting to `sx`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivideByZero`] when the effective x or y
    /// scalar is zero. The x axis is checked first.
    ///
    /// ```rust
    /// use vector2::{Axis, Vector2, VectorError};
    ///
    /// let v = Vector2::new(10.0, 20.0);
    /// assert_eq!(v.div_scalar(5.0, None), Ok(Vector2::new(2.0, 4.0)));
    /// assert_eq!(
    ///     v.div_scalar(1.0, 0.0),
    ///     Err(VectorError::DivideByZero { axis: Axis::Y })
    /// );
    /// ```
    pub fn div_scalar(self, sx: f64, sy: impl Into<Option<f64>>) -> VectorResult<Vector2> {
        let (sx, sy) = effective_scalars(sx, sy.into());
        if sx == 0.0 {
            return Err(VectorError::DivideByZero { axis: Axis::X });
        }
        if sy == 0.0 {
            return Err(VectorError::DivideByZero { axis: Axis::Y });
        }
        Ok(Vector2::new(self.x() / sx, self.y() / sy))
    }

    // =========================================================================
    // SINGLE-AXIS
    // =========================================================================

    /// `(x + scalar, y)`.
    pub fn add_scalar_x(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x() + scalar, self.y())
    }

    /// `(x, y + scalar)`.
    pub fn add_scalar_y(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x(), self.y() + scalar)
    }

    /// `(x - scalar, y)`.
    pub fn sub_scalar_x(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x() - scalar, self.y())
    }

    /// `(x, y - scalar)`.
    pub fn sub_scalar_y(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x(), self.y() - scalar)
    }

    /// `(x * scalar, y)`.
    pub fn mul_scalar_x(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x() * scalar, self.y())
    }

    /// `(x, y * scalar)`.
    pub fn mul_scalar_y(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x(), self.y() * scalar)
    }

    /// `(x / scalar, y)`; a zero scalar gives `(0, y)`.
    pub fn div_scalar_x(self, scalar: f64) -> Vector2 {
        if scalar == 0.0 {
            return Vector2::new(0.0, self.y());
        }
        Vector2::new(self.x() / scalar, self.y())
    }

    /// `(x, y / scalar)`; a zero scalar gives `(x, 0)`.
    pub fn div_scalar_y(self, scalar: f64) -> Vector2 {
        if scalar == 0.0 {
            return Vector2::new(self.x(), 0.0);
        }
        Vector2::new(self.x(), self.y() / scalar)
    }
}
