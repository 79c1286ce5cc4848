//! Operations on [`Vector2`](crate::Vector2).
//!
//! Each submodule extends `Vector2` with an inherent `impl` block.
//!
//! ## Structure
//!
//! - `arithmetic`: component-wise vector-vector math and `std::ops` operators
//! - `scalar`: vector-scalar math with an optional second scalar
//! - `geometry`: magnitude, normalization, angles, distance, dot/cross
//! - `transform`: inversion, rounding, soft limiting, interpolation, rotation
//! - `random`: uniform sampling inside a rectangle

pub mod arithmetic;
pub mod geometry;
pub mod random;
pub mod scalar;
pub mod transform;
