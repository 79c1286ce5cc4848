//! # Config Crate
//!
//! Centralized numeric constants for the 2D vector crates.
//! Tolerances and angle conversion factors are defined here so that every
//! crate in the workspace compares and converts floats the same way.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, radians_to_degrees, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Angle conversion
//! let degrees = radians_to_degrees(std::f64::consts::FRAC_PI_2);
//! assert!(approx_equal(degrees, 90.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime State**: Everything is `const` or a pure function
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
