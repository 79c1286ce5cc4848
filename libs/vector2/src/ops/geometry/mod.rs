//! # Geometric Queries
//!
//! Scalar-valued measurements of vectors (magnitude, angles, distance,
//! products) and normalization.
//!
//! ## Angle Convention
//!
//! Angles follow `atan2(y, x)`: 0 points along +x, a quarter turn along +y,
//! and a half turn along -x. Radians lie in `(-π, π]`, degrees in
//! `(-180, 180]`. The zero vector's angle is degenerate and reported as 0.

use crate::Vector2;
use config::constants::{approx_equal, radians_to_degrees};

impl Vector2 {
    // =========================================================================
    // MAGNITUDE
    // =========================================================================

    /// Euclidean length `sqrt(x² + y²)`, computed without intermediate
    /// overflow or underflow.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    /// assert_eq!(Vector2::new(24.0, 7.0).magnitude(), 25.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Alias for [`Vector2::magnitude`].
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    /// `x² + y²`.
    pub fn magnitude_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to the zero vector.
    pub fn normalize(self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x() / magnitude, self.y() / magnitude)
    }

    // =========================================================================
    // ANGLES
    // =========================================================================

    /// Angle from +x in radians, `atan2(y, x)`.
    pub fn angle_radians(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Angle from +x in degrees.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// assert_eq!(Vector2::new(10.0, 0.0).angle_degrees(), 0.0);
    /// assert_eq!(Vector2::new(0.0, 10.0).angle_degrees(), 90.0);
    /// assert_eq!(Vector2::new(-10.0, 0.0).angle_degrees(), 180.0);
    /// ```
    pub fn angle_degrees(&self) -> f64 {
        radians_to_degrees(self.angle_radians())
    }

    /// Angle of the direction from `self` towards `other`, in radians.
    pub fn angle_to_radians(&self, other: Vector2) -> f64 {
        other.sub(*self).angle_radians()
    }

    /// Angle of the direction from `self` towards `other`, in degrees.
    ///
    /// From the origin this is `other.angle_degrees()`.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let a = Vector2::new(5.0, 5.0);
    /// let b = Vector2::new(10.0, 10.0);
    /// assert!((a.angle_to_degrees(b) - 45.0).abs() < 1e-12);
    /// assert!((b.angle_to_degrees(a) + 135.0).abs() < 1e-12);
    /// ```
    pub fn angle_to_degrees(&self, other: Vector2) -> f64 {
        radians_to_degrees(self.angle_to_radians(other))
    }

    // =========================================================================
    // DISTANCE & PRODUCTS
    // =========================================================================

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Vector2) -> f64 {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        dx.hypot(dy)
    }

    /// `x * ox + y * oy`.
    pub fn dot_product(&self, other: Vector2) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// `x * oy - y * ox`, the z component of the 3D cross product of the
    /// two vectors lifted into the xy plane.
    pub fn cross_product(&self, other: Vector2) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    // =========================================================================
    // COMPARISON
    // =========================================================================

    /// True when both components differ by less than
    /// [`config::constants::EPSILON`].
    pub fn approx_eq(&self, other: Vector2) -> bool {
        approx_equal(self.x(), other.x()) && approx_equal(self.y(), other.y())
    }

    /// True when both components are exactly zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }
}
