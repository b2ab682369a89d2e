//! Two samples mixed through a random mask and its inverse

use crate::bitmap::Bitmap;
use crate::bitmap::ops::{add, multiply};
use crate::io::configuration::{RANDOM_INVERT_MASK_FILE, RANDOM_MASK_FILE};
use crate::io::error::Result;
use crate::io::image::load_bitmap;
use crate::strategy::{StrategyContext, TextureStrategy, wrong_sample_count};
use std::path::{Path, PathBuf};

/// Where the weighting masks come from
#[derive(Debug, Clone)]
pub enum MaskSource {
    /// `random.png` and `random_invert.png` inside a directory
    Files {
        /// Directory holding both mask files
        directory: PathBuf,
    },
    /// Already-decoded masks
    InMemory {
        /// Weight for the first sample
        mask: Bitmap,
        /// Weight for the second sample
        inverse: Bitmap,
    },
}

impl Default for MaskSource {
    fn default() -> Self {
        Self::Files {
            directory: PathBuf::from("."),
        }
    }
}

impl MaskSource {
    /// Masks read from the fixed file names inside `directory`
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self::Files {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Load (or borrow) the mask and its inverse
    ///
    /// Files are read on every call so regenerated masks are picked up
    /// between runs.
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if either mask file cannot be decoded
    pub fn load(&self) -> Result<(Bitmap, Bitmap)> {
        match self {
            Self::Files { directory } => Ok((
                load_bitmap(&directory.join(RANDOM_MASK_FILE))?,
                load_bitmap(&directory.join(RANDOM_INVERT_MASK_FILE))?,
            )),
            Self::InMemory { mask, inverse } => Ok((mask.clone(), inverse.clone())),
        }
    }
}

/// Tiles two samples across the canvas and mixes them by a random mask
///
/// The first tiled sample is weighted by the mask, the second by its
/// inverse, and the two weighted canvases are summed.
#[derive(Debug, Clone, Default)]
pub struct NoiseComposite {
    masks: MaskSource,
}

impl NoiseComposite {
    /// Create the strategy with the given mask source
    pub const fn new(masks: MaskSource) -> Self {
        Self { masks }
    }

    /// Mask source in use
    pub const fn masks(&self) -> &MaskSource {
        &self.masks
    }
}

impl TextureStrategy for NoiseComposite {
    fn name(&self) -> &'static str {
        "noise-composite"
    }

    fn samples_per_group(&self) -> usize {
        2
    }

    fn process_sample(
        &mut self,
        context: &mut StrategyContext<'_>,
        samples: &[Bitmap],
    ) -> Result<Bitmap> {
        let [first, second] = samples else {
            return Err(wrong_sample_count(self.name(), 2, samples));
        };

        let (mask, inverse) = self.masks.load()?;
        let tiler = context.tiler();

        let weighted_first = multiply(&tiler.tile(first)?, &mask)?;
        let weighted_second = multiply(&tiler.tile(second)?, &inverse)?;
        context.snapshot("weighted_first", &weighted_first);
        context.snapshot("weighted_second", &weighted_second);

        add(&weighted_first, &weighted_second)
    }
}
