//! Immutable 2D vector value type.
//!
//! [`Vector2`] is a plain `Copy` pair of `f64` components. Every operation
//! returns a fresh value (or a scalar), so calls chain freely:
//!
//! ```rust
//! use vector2::Vector2;
//!
//! let v = Vector2::new(10.0, 20.0)
//!     .add_x(Vector2::new(5.0, 12.0))
//!     .mul_scalar(2.0, None);
//! assert_eq!(v, Vector2::new(30.0, 40.0));
//! assert_eq!(v.to_string(), "Vector2 { x: 30, y: 40 }");
//! ```
//!
//! The only fallible operation is [`Vector2::div_scalar`], which rejects a
//! zero divisor with [`VectorError::DivideByZero`].

pub mod error;
pub mod ops;
pub mod vector2;

#[cfg(any(test, feature = "approx"))]
mod approx_impl;

pub use error::{Axis, VectorError, VectorResult};
pub use vector2::{PlanarFields, Vector2};
