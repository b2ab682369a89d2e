//! Mirrored 2x2 mosaic tiled across the canvas

use crate::bitmap::Bitmap;
use crate::io::error::Result;
use crate::strategy::{StrategyContext, TextureStrategy, wrong_sample_count};

/// Builds a seamless mosaic from one sample by mirroring it
///
/// The sample goes to the top-left quadrant, its horizontal mirror to the
/// top-right, its vertical mirror to the bottom-left and the doubly
/// mirrored copy to the bottom-right. Every edge of the mosaic then meets
/// its own reflection, so the mosaic tiles without seams.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigTile;

impl BigTile {
    /// Create the strategy
    pub const fn new() -> Self {
        Self
    }

    /// Assemble the 2W x 2H mirrored mosaic for a sample
    pub fn mosaic(sample: &Bitmap) -> Bitmap {
        let (width, height) = sample.dimensions();
        let (w, h) = (i64::from(width), i64::from(height));
        let flipped = sample.flip_horizontal();

        let mut mosaic = Bitmap::blank((width * 2, height * 2));
        mosaic.paste(sample, 0, 0);
        mosaic.paste(&flipped, w, 0);
        mosaic.paste(&sample.flip_vertical(), 0, h);
        mosaic.paste(&flipped.flip_vertical(), w, h);
        mosaic
    }
}

impl TextureStrategy for BigTile {
    fn name(&self) -> &'static str {
        "big-tile"
    }

    fn process_sample(
        &mut self,
        context: &mut StrategyContext<'_>,
        samples: &[Bitmap],
    ) -> Result<Bitmap> {
        let [sample] = samples else {
            return Err(wrong_sample_count(self.name(), 1, samples));
        };

        let mosaic = Self::mosaic(sample);
        context.snapshot("big_tile", &mosaic);

        context.tiler().tile(&mosaic)
    }
}
