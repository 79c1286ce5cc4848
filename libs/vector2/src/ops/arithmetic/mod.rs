//! # Vector-Vector Arithmetic
//!
//! Component-wise addition, subtraction, multiplication and division
//! between two vectors, plus single-axis variants. Neither operand is
//! modified.
//!
//! Division has no zero guard: a zero component in the divisor yields IEEE
//! infinity or NaN on that axis.

use crate::Vector2;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[allow(clippy::should_implement_trait)]
impl Vector2 {
    // =========================================================================
    // ADDITION
    // =========================================================================

    /// `(x + ox, y + oy)`.
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() + other.x(), self.y() + other.y())
    }

    /// `(x + ox, y)`.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::new(10.0, 20.0).add_x(Vector2::new(5.0, 12.0));
    /// assert_eq!(v, Vector2::new(15.0, 20.0));
    /// ```
    pub fn add_x(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() + other.x(), self.y())
    }

    /// `(x, y + oy)`.
    pub fn add_y(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x(), self.y() + other.y())
    }

    // =========================================================================
    // SUBTRACTION
    // =========================================================================

    /// `(x - ox, y - oy)`.
    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// `(x - ox, y)`.
    pub fn sub_x(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() - other.x(), self.y())
    }

    /// `(x, y - oy)`.
    pub fn sub_y(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x(), self.y() - other.y())
    }

    // =========================================================================
    // MULTIPLICATION
    // =========================================================================

    /// Component-wise product `(x * ox, y * oy)`. Not the dot product.
    pub fn mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() * other.x(), self.y() * other.y())
    }

    /// `(x * ox, y)`.
    pub fn mul_x(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() * other.x(), self.y())
    }

    /// `(x, y * oy)`.
    pub fn mul_y(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x(), self.y() * other.y())
    }

    // =========================================================================
    // DIVISION
    // =========================================================================

    /// Component-wise quotient `(x / ox, y / oy)`.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::new(10.0, 20.0).div(Vector2::new(0.0, 4.0));
    /// assert_eq!(v.x(), f64::INFINITY);
    /// assert_eq!(v.y(), 5.0);
    /// ```
    pub fn div(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() / other.x(), self.y() / other.y())
    }

    /// `(x / ox, y)`.
    pub fn div_x(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x() / other.x(), self.y())
    }

    /// `(x, y / oy)`.
    pub fn div_y(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x(), self.y() / other.y())
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Mul for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::mul(self, rhs)
    }
}

impl Div for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2::div(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.mul_scalar(rhs, None)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.mul_scalar(self, None)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self.invert()
    }
}
