//! Coherent noise sources and the single-channel noise field built from them
//!
//! Noise generators are seeded and deterministic: the same seed always
//! yields the same field.

/// Seeded simplex and Perlin generators from the `noise` crate
pub mod coherent;
/// Noise sampling over a pixel grid
pub mod field;

pub use coherent::{CoherentNoise, NoiseKind};
pub use field::NoiseField;

/// A 2D coherent noise function
pub trait Noise2D {
    /// Sample the noise at a coordinate, nominally in `[-1, 1]`
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
