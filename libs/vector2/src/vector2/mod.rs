//! # Vector2 Value Type
//!
//! The immutable 2D vector, its constructors, accessors and textual form.
//! Operations live in [`crate::ops`], each module adding an `impl Vector2`
//! block.
//!
//! ## Immutability
//!
//! Fields are private and no method takes `&mut self`. `Vector2` is `Copy`,
//! so every operation reads its operands and returns a new value.

mod convert;

pub use convert::PlanarFields;

use std::fmt;

// =============================================================================
// VECTOR2 STRUCT
// =============================================================================

/// Immutable pair of `f64` components.
///
/// ## Example
///
/// ```rust
/// use vector2::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.x(), 3.0);
/// assert_eq!(v.magnitude(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Creates a vector from its components.
    ///
    /// No validation is performed: NaN and infinities are stored as given
    /// and propagate through later arithmetic.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from an `[x, y]` pair.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// assert_eq!(Vector2::from_pair([1.5, -2.0]), Vector2::new(1.5, -2.0));
    /// ```
    pub const fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// Creates a vector from any value exposing `x` and `y`.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::from_fields(&glam::DVec2::new(4.0, 5.0));
    /// assert_eq!(v, Vector2::new(4.0, 5.0));
    /// ```
    pub fn from_fields<F: PlanarFields + ?Sized>(fields: &F) -> Self {
        Self::new(fields.x(), fields.y())
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the zero vector, ignoring the receiver.
    ///
    /// The receiver is left untouched.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::new(10.0, 20.0);
    /// assert_eq!(v.zeroed(), Vector2::ZERO);
    /// assert_eq!(v, Vector2::new(10.0, 20.0));
    /// ```
    pub const fn zeroed(&self) -> Self {
        Self::ZERO
    }

    /// Horizontal component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_pair(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// Formats as `Vector2 { x: <x>, y: <y> }` using the default `f64` display.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2 {{ x: {}, y: {} }}", self.x, self.y)
    }
}
