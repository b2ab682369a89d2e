//! Edge-blended tilable patch
//!
//! Follows Paul Bourke's tiling recipe: swap the sample's quadrants so its
//! outer edges meet in the middle, then blend the swapped copy in near the
//! borders and the original in near the centre using two radial masks.

use crate::bitmap::Bitmap;
use crate::bitmap::ops::paste_masked;
use crate::io::error::Result;
use crate::spatial::{radial_mask, swap_quadrants};
use crate::strategy::{StrategyContext, TextureStrategy, wrong_sample_count};

/// Blends a sample with its quadrant-swapped copy so opposite edges match
#[derive(Debug, Clone, Copy, Default)]
pub struct TilableBlend;

impl TilableBlend {
    /// Create the strategy
    pub const fn new() -> Self {
        Self
    }

    /// Build the seamless patch for one sample, reporting intermediates
    ///
    /// # Errors
    ///
    /// Returns an error if an intermediate bitmap does not match the
    /// sample's size
    pub fn blend(sample: &Bitmap, context: &StrategyContext<'_>) -> Result<Bitmap> {
        let (width, height) = sample.dimensions();
        let source = Bitmap::Rgba(sample.to_rgba());

        let mask = radial_mask(width, height);
        context.snapshot("mask", &mask);
        let mask_swapped = swap_quadrants(&mask);
        let sample_swapped = swap_quadrants(&source);
        context.snapshot("sample_swapped", &sample_swapped);
        context.snapshot("mask_swapped", &mask_swapped);

        // Seam-free swapped content towards the borders
        let mut tile = source.clone();
        paste_masked(&mut tile, &sample_swapped, &mask)?;
        context.snapshot("tile_edges", &tile);

        // Original content back in where the swapped copy has its seams
        paste_masked(&mut tile, &source, &mask_swapped)?;
        context.snapshot("tile", &tile);

        Ok(tile)
    }
}

impl TextureStrategy for TilableBlend {
    fn name(&self) -> &'static str {
        "tilable"
    }

    fn process_sample(
        &mut self,
        context: &mut StrategyContext<'_>,
        samples: &[Bitmap],
    ) -> Result<Bitmap> {
        let [sample] = samples else {
            return Err(wrong_sample_count(self.name(), 1, samples));
        };

        let tile = Self::blend(sample, context)?;
        context.tiler().tile_onto(&tile, context.texture)?;
        Ok(context.texture.clone())
    }
}
