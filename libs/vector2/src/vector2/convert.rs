//! Conversions between [`Vector2`] and pairs, tuples and `glam` vectors.

use super::Vector2;
use glam::{DVec2, Vec2};

/// A value that exposes planar `x` and `y` components.
///
/// Lets [`Vector2::from_fields`] accept any point-like structure.
///
/// ## Example
///
/// ```rust
/// use vector2::{PlanarFields, Vector2};
///
/// struct Cursor { col: f64, row: f64 }
///
/// impl PlanarFields for Cursor {
///     fn x(&self) -> f64 { self.col }
///     fn y(&self) -> f64 { self.row }
/// }
///
/// let v = Vector2::from_fields(&Cursor { col: 3.0, row: 7.0 });
/// assert_eq!(v, Vector2::new(3.0, 7.0));
/// ```
pub trait PlanarFields {
    /// Horizontal component.
    fn x(&self) -> f64;
    /// Vertical component.
    fn y(&self) -> f64;
}

impl PlanarFields for Vector2 {
    fn x(&self) -> f64 {
        Vector2::x(self)
    }

    fn y(&self) -> f64 {
        Vector2::y(self)
    }
}

impl PlanarFields for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PlanarFields for Vec2 {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }

    fn y(&self) -> f64 {
        f64::from(self.y)
    }
}

impl PlanarFields for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

// =============================================================================
// FROM IMPLS
// =============================================================================

impl From<[f64; 2]> for Vector2 {
    fn from(pair: [f64; 2]) -> Self {
        Vector2::from_pair(pair)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.to_pair()
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x(), v.y())
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x(), v.y())
    }
}
