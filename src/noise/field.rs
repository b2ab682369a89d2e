//! Single-channel noise field sampled at scaled pixel coordinates

use crate::bitmap::Bitmap;
use crate::io::configuration::{NOISE_FREQUENCY_X, NOISE_FREQUENCY_Y};
use crate::noise::Noise2D;
use image::{GrayImage, Luma};
use ndarray::Array2;

/// Samples a noise function over a pixel grid
///
/// Each pixel `(x, y)` reads `noise(x * fx, y * fy)`; the magnitude of the
/// sample, scaled to 255 and truncated, becomes the pixel's luminance.
#[derive(Debug, Clone)]
pub struct NoiseField<N> {
    noise: N,
    frequency: [f64; 2],
}

impl<N: Noise2D> NoiseField<N> {
    /// Wrap a noise function with the default frequency scaling
    pub const fn new(noise: N) -> Self {
        Self {
            noise,
            frequency: [NOISE_FREQUENCY_X, NOISE_FREQUENCY_Y],
        }
    }

    /// Override the per-axis frequency scaling
    #[must_use]
    pub const fn with_frequency(mut self, fx: f64, fy: f64) -> Self {
        self.frequency = [fx, fy];
        self
    }

    /// Per-axis frequency scaling in use
    pub const fn frequency(&self) -> [f64; 2] {
        self.frequency
    }

    /// Raw noise samples indexed by `(row, col)`, i.e. `(y, x)`
    pub fn sample_grid(&self, width: u32, height: u32) -> Array2<f64> {
        let [fx, fy] = self.frequency;
        Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            self.noise.sample(col as f64 * fx, row as f64 * fy)
        })
    }

    /// Generate a luminance bitmap of the given size
    pub fn generate(&self, width: u32, height: u32) -> Bitmap {
        let grid = self.sample_grid(width, height);
        let image = GrayImage::from_fn(width, height, |x, y| {
            let sample = grid.get((y as usize, x as usize)).copied().unwrap_or(0.0);
            Luma([to_intensity(sample)])
        });
        Bitmap::Luma(image)
    }
}

/// Map a noise sample to an 8-bit intensity: `trunc(|v| * 255)`, clamped
pub fn to_intensity(sample: f64) -> u8 {
    let scaled = (sample.abs() * 255.0).trunc();
    num_traits::clamp(scaled, 0.0, 255.0) as u8
}
