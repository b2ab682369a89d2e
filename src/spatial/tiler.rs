//! Fixed-stride replication of a small bitmap across a larger canvas

use crate::bitmap::Bitmap;
use crate::io::error::{Result, TextureError};

/// Tiles bitmaps across a canvas of fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiler {
    canvas: (u32, u32),
}

impl Tiler {
    /// Create a tiler producing canvases of `width` x `height`
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: (width, height),
        }
    }

    /// Canvas size produced by this tiler
    pub const fn canvas_size(&self) -> (u32, u32) {
        self.canvas
    }

    /// Paste `smaller` across a fresh transparent RGBA canvas
    ///
    /// Copies are placed at a stride of the tile's own width and height,
    /// left to right, top to bottom. Copies overhanging the right or bottom
    /// edge are clipped, never wrapped.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if `smaller` has zero width or height
    pub fn tile(&self, smaller: &Bitmap) -> Result<Bitmap> {
        if smaller.is_empty() {
            return Err(TextureError::EmptyInput {
                context: "tile source",
            });
        }

        let (tile_w, tile_h) = smaller.dimensions();
        let (width, height) = self.canvas;
        let source = Bitmap::Rgba(smaller.to_rgba());
        let mut tiled = Bitmap::blank(self.canvas);

        for x in (0..width).step_by(tile_w as usize) {
            for y in (0..height).step_by(tile_h as usize) {
                tiled.paste(&source, i64::from(x), i64::from(y));
            }
        }

        Ok(tiled)
    }

    /// Tile `smaller` and also paste the result onto `larger` at its origin
    ///
    /// Returns the freshly tiled canvas; `larger` receives the same pixels
    /// wherever the two overlap.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if `smaller` has zero width or height
    pub fn tile_onto(&self, smaller: &Bitmap, larger: &mut Bitmap) -> Result<Bitmap> {
        let tiled = self.tile(smaller)?;
        larger.paste(&tiled, 0, 0);
        Ok(tiled)
    }
}
