//! Noise field textures and the random mask pair

use crate::bitmap::Bitmap;
use crate::bitmap::ops::invert;
use crate::io::error::Result;
use crate::noise::{Noise2D, NoiseField};
use crate::strategy::{StrategyContext, TextureStrategy};

/// Produces a single-channel coherent-noise texture, no samples needed
#[derive(Debug, Clone)]
pub struct RandomTexture<N> {
    field: NoiseField<N>,
}

impl<N: Noise2D> RandomTexture<N> {
    /// Create the strategy around a noise function
    pub const fn new(noise: N) -> Self {
        Self {
            field: NoiseField::new(noise),
        }
    }

    /// Create the strategy from a preconfigured noise field
    pub const fn from_field(field: NoiseField<N>) -> Self {
        Self { field }
    }

    /// Generate the noise texture at the given size
    pub fn generate(&self, size: (u32, u32)) -> Bitmap {
        self.field.generate(size.0, size.1)
    }

    /// Generate a noise mask and its inverse, as consumed by the
    /// noise-composite strategy
    pub fn mask_pair(&self, size: (u32, u32)) -> (Bitmap, Bitmap) {
        let mask = self.generate(size);
        let inverse = invert(&mask);
        (mask, inverse)
    }
}

impl<N: Noise2D> TextureStrategy for RandomTexture<N> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn samples_per_group(&self) -> usize {
        0
    }

    fn process_sample(
        &mut self,
        context: &mut StrategyContext<'_>,
        _samples: &[Bitmap],
    ) -> Result<Bitmap> {
        let texture = self.generate(context.canvas);
        context.snapshot("noise", &texture);
        Ok(texture)
    }
}
