//! Texture strategies and the driver that feeds them samples
//!
//! A strategy consumes a fixed-size group of sample bitmaps and composes one
//! output texture. The [`creator::TextureCreator`] groups samples, runs the
//! strategy per group and turns every failure into a warning plus a blank
//! canvas, so a batch never aborts on bad input.

/// Mirrored 2x2 mosaic tiling
pub mod big_tile;
/// Sample grouping, state tracking and failure containment
pub mod creator;
/// Two-sample composite weighted by a random mask
pub mod noise_composite;
/// Pure noise field generation
pub mod random;
/// Radial-mask blend of a sample with its quadrant-swapped copy
pub mod tilable;

pub use big_tile::BigTile;
pub use creator::{CreatorConfig, CreatorState, Sample, TextureCreator};
pub use noise_composite::{MaskSource, NoiseComposite};
pub use random::RandomTexture;
pub use tilable::TilableBlend;

use crate::bitmap::Bitmap;
use crate::io::diagnostics::Diagnostics;
use crate::io::error::{Result, TextureError};
use crate::io::snapshot::SnapshotStore;
use crate::spatial::Tiler;
use std::path::PathBuf;

/// Everything a strategy may touch while processing one group
pub struct StrategyContext<'a> {
    /// Output canvas size (width, height)
    pub canvas: (u32, u32),
    /// Texture composed so far; starts as a blank RGBA canvas
    pub texture: &'a mut Bitmap,
    /// Where labelled intermediates are written, if enabled
    pub snapshots: &'a SnapshotStore,
    /// Sink for warnings and debug output
    pub diagnostics: &'a dyn Diagnostics,
}

impl StrategyContext<'_> {
    /// Tiler producing canvases of the output size
    pub const fn tiler(&self) -> Tiler {
        Tiler::new(self.canvas.0, self.canvas.1)
    }

    /// Save an intermediate bitmap under an explicit label
    ///
    /// Returns the written path, or `None` when snapshots are disabled or
    /// the write failed (the failure is already reported as a warning).
    pub fn snapshot(&self, label: &str, bitmap: &Bitmap) -> Option<PathBuf> {
        self.snapshots.save(label, bitmap, self.diagnostics)
    }
}

/// A texture composition strategy
pub trait TextureStrategy {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Samples consumed per processing step; zero means the strategy runs
    /// once without any sample
    fn samples_per_group(&self) -> usize {
        1
    }

    /// Compose one texture from a group of samples
    ///
    /// # Errors
    ///
    /// Returns an error if the group has the wrong size or its bitmaps are
    /// incompatible; the creator downgrades it to a warning
    fn process_sample(
        &mut self,
        context: &mut StrategyContext<'_>,
        samples: &[Bitmap],
    ) -> Result<Bitmap>;
}

/// Error for a group whose size differs from what a strategy consumes
pub const fn wrong_sample_count(
    strategy: &'static str,
    required: usize,
    samples: &[Bitmap],
) -> TextureError {
    TextureError::InsufficientSamples {
        strategy,
        required,
        provided: samples.len(),
    }
}
