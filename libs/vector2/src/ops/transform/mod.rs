//! # Transformations
//!
//! Vector-to-vector transforms: inversion, rounding, soft limiting,
//! per-axis interpolation and rotation.

use crate::Vector2;
use config::constants::degrees_to_radians;

impl Vector2 {
    // =========================================================================
    // INVERSION
    // =========================================================================

    /// `(-x, -y)`.
    pub fn invert(self) -> Vector2 {
        Vector2::new(-self.x(), -self.y())
    }

    /// `(-x, y)`.
    pub fn invert_x(self) -> Vector2 {
        Vector2::new(-self.x(), self.y())
    }

    /// `(x, -y)`.
    pub fn invert_y(self) -> Vector2 {
        Vector2::new(self.x(), -self.y())
    }

    // =========================================================================
    // ROUNDING & LIMITING
    // =========================================================================

    /// Rounds each component to the nearest integer, halves away from zero.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// assert_eq!(Vector2::new(1.5, 1.4).round(), Vector2::new(2.0, 1.0));
    /// ```
    pub fn round(self) -> Vector2 {
        Vector2::new(self.x().round(), self.y().round())
    }

    /// Scales every component whose magnitude exceeds `max_abs` by `factor`.
    ///
    /// This damps rather than clamps: components at or below `max_abs` are
    /// untouched, and a scaled component may still exceed `max_abs` when
    /// `factor` is not small enough. `factor` is not validated.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::new(40.0, 5.0).limit(10.0, 0.5);
    /// assert_eq!(v, Vector2::new(20.0, 5.0));
    /// ```
    pub fn limit(self, max_abs: f64, factor: f64) -> Vector2 {
        let damp = |c: f64| if c.abs() > max_abs { c * factor } else { c };
        Vector2::new(damp(self.x()), damp(self.y()))
    }

    // =========================================================================
    // INTERPOLATION
    // =========================================================================

    /// Per-axis linear interpolation towards `other`.
    ///
    /// `factor_x`/`factor_y` of 0 keep `self`'s component, 1 takes
    /// `other`'s. Factors outside `[0, 1]` extrapolate.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::new(10.0, 6.0).interpolate(Vector2::new(20.0, 8.0), 0.5, 0.75);
    /// assert_eq!(v, Vector2::new(15.0, 7.5));
    /// ```
    pub fn interpolate(self, other: Vector2, factor_x: f64, factor_y: f64) -> Vector2 {
        Vector2::new(
            (1.0 - factor_x) * self.x() + factor_x * other.x(),
            (1.0 - factor_y) * self.y() + factor_y * other.y(),
        )
    }

    // =========================================================================
    // ROTATION
    // =========================================================================

    /// Rotates counter-clockwise (from +x towards +y) by `radians`.
    pub fn rotate_by_radians(self, radians: f64) -> Vector2 {
        if radians == 0.0 {
            return self;
        }
        let (sin, cos) = radians.sin_cos();
        Vector2::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Rotates counter-clockwise (from +x towards +y) by `degrees`.
    pub fn rotate_by_degrees(self, degrees: f64) -> Vector2 {
        self.rotate_by_radians(degrees_to_radians(degrees))
    }
}
