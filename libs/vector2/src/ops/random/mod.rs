//! # Random Generation
//!
//! Uniform sampling of a vector inside an axis-aligned rectangle given by
//! two opposite corners. Corner order does not matter: the rectangle is
//! always `[min_x, max_x) × [min_y, max_y)`.

use crate::Vector2;
use rand::Rng;

impl Vector2 {
    /// Random vector inside the rectangle spanned by two corners, using the
    /// thread-local generator.
    ///
    /// ```rust
    /// use vector2::Vector2;
    ///
    /// let v = Vector2::random(Vector2::new(0.0, 10.0), Vector2::new(15.0, -5.0));
    /// assert!((0.0..15.0).contains(&v.x()));
    /// assert!((-5.0..10.0).contains(&v.y()));
    /// ```
    pub fn random(top_left: Vector2, bottom_right: Vector2) -> Vector2 {
        Self::random_with(&mut rand::rng(), top_left, bottom_right)
    }

    /// Random vector inside the rectangle spanned by two corners, drawn
    /// from `rng`.
    ///
    /// A zero-width axis yields that axis's bound.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        top_left: Vector2,
        bottom_right: Vector2,
    ) -> Vector2 {
        let (min_x, max_x) = ordered(top_left.x(), bottom_right.x());
        let (min_y, max_y) = ordered(top_left.y(), bottom_right.y());
        Vector2::new(
            sample(rng, min_x, max_x),
            sample(rng, min_y, max_y),
        )
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}

/// Uniform sample from `[min, max)`, strictly below `max`.
///
/// Zero-width and non-finite spans never reach `Rng::random_range`, which
/// panics on them: a zero-width span yields `min`, a non-finite one lets
/// IEEE arithmetic propagate.
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max && (max - min).is_finite() {
        // Float rounding inside the sampler can land on `max`; redraw.
        loop {
            let s = rng.random_range(min..max);
            if s < max {
                return s;
            }
        }
    }
    let u: f64 = rng.random();
    min + u * (max - min)
}
