//! In-memory bitmap with a luminance or RGBA colour mode
//!
//! Wraps the `image` crate buffers so every composition primitive can check
//! size and mode compatibility up front and dispatch to a typed buffer.

use crate::io::error::{Result, Shape, TextureError};
use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage, imageops};
use std::fmt;
use std::path::Path;

/// Colour layout of a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Single-channel 8-bit luminance
    Luma,
    /// Four-channel 8-bit red, green, blue, alpha
    Rgba,
}

impl ColorMode {
    /// Number of channels per pixel
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::Rgba => 4,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Luma => write!(f, "L"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

/// A 2D grid of 8-bit pixels in either luminance or RGBA mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bitmap {
    /// Single-channel bitmap, also used as a blend mask
    Luma(GrayImage),
    /// Four-channel bitmap
    Rgba(RgbaImage),
}

impl Bitmap {
    /// Create a blank bitmap (black, or transparent black for RGBA)
    pub fn new(mode: ColorMode, width: u32, height: u32) -> Self {
        match mode {
            ColorMode::Luma => Self::Luma(GrayImage::new(width, height)),
            ColorMode::Rgba => Self::Rgba(RgbaImage::new(width, height)),
        }
    }

    /// Create a blank transparent RGBA canvas
    pub fn blank(size: (u32, u32)) -> Self {
        Self::new(ColorMode::Rgba, size.0, size.1)
    }

    /// Build a bitmap from a decoded image
    ///
    /// 8-bit grayscale stays single-channel; every other layout is
    /// converted to RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Self::Luma(gray),
            DynamicImage::ImageRgba8(rgba) => Self::Rgba(rgba),
            other => Self::Rgba(other.to_rgba8()),
        }
    }

    /// Build a luminance bitmap filled with a single value
    pub fn filled_luma(width: u32, height: u32, value: u8) -> Self {
        Self::Luma(GrayImage::from_pixel(width, height, Luma([value])))
    }

    /// Build an RGBA bitmap filled with a single colour
    pub fn filled_rgba(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::Rgba(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    /// Colour mode of this bitmap
    pub const fn mode(&self) -> ColorMode {
        match self {
            Self::Luma(_) => ColorMode::Luma,
            Self::Rgba(_) => ColorMode::Rgba,
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Luma(img) => img.dimensions(),
            Self::Rgba(img) => img.dimensions(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Whether the bitmap has no pixels at all
    pub fn is_empty(&self) -> bool {
        let (width, height) = self.dimensions();
        width == 0 || height == 0
    }

    /// Size and mode, used for compatibility checks and error reporting
    pub fn shape(&self) -> Shape {
        let (width, height) = self.dimensions();
        Shape {
            mode: self.mode(),
            width,
            height,
        }
    }

    /// Channel values of the pixel at `(x, y)`, or `None` outside the bitmap
    pub fn channels_at(&self, x: u32, y: u32) -> Option<&[u8]> {
        match self {
            Self::Luma(img) => img.get_pixel_checked(x, y).map(|p| p.0.as_slice()),
            Self::Rgba(img) => img.get_pixel_checked(x, y).map(|p| p.0.as_slice()),
        }
    }

    /// Whether every channel of every pixel is zero
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Luma(img) => img.as_raw().iter().all(|&c| c == 0),
            Self::Rgba(img) => img.as_raw().iter().all(|&c| c == 0),
        }
    }

    /// Convert to an RGBA buffer (luminance expands to opaque gray)
    pub fn to_rgba(&self) -> RgbaImage {
        match self {
            Self::Rgba(img) => img.clone(),
            Self::Luma(img) => DynamicImage::ImageLuma8(img.clone()).to_rgba8(),
        }
    }

    /// Convert to a luminance buffer
    pub fn to_luma(&self) -> GrayImage {
        match self {
            Self::Luma(img) => img.clone(),
            Self::Rgba(img) => DynamicImage::ImageRgba8(img.clone()).to_luma8(),
        }
    }

    /// Convert to the requested colour mode
    #[must_use]
    pub fn converted(&self, mode: ColorMode) -> Self {
        match mode {
            ColorMode::Luma => Self::Luma(self.to_luma()),
            ColorMode::Rgba => Self::Rgba(self.to_rgba()),
        }
    }

    /// Paste `source` with its top-left corner at `(x, y)`
    ///
    /// Pixels are replaced, not blended. The source is converted to this
    /// bitmap's mode first and clipped at the bounds.
    pub fn paste(&mut self, source: &Self, x: i64, y: i64) {
        match self {
            Self::Luma(dst) => match source {
                Self::Luma(src) => imageops::replace(dst, src, x, y),
                Self::Rgba(_) => imageops::replace(dst, &source.to_luma(), x, y),
            },
            Self::Rgba(dst) => match source {
                Self::Rgba(src) => imageops::replace(dst, src, x, y),
                Self::Luma(_) => imageops::replace(dst, &source.to_rgba(), x, y),
            },
        }
    }

    /// Mirror left to right
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        match self {
            Self::Luma(img) => Self::Luma(imageops::flip_horizontal(img)),
            Self::Rgba(img) => Self::Rgba(imageops::flip_horizontal(img)),
        }
    }

    /// Mirror top to bottom
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        match self {
            Self::Luma(img) => Self::Luma(imageops::flip_vertical(img)),
            Self::Rgba(img) => Self::Rgba(imageops::flip_vertical(img)),
        }
    }

    /// Encode to disk, format chosen from the file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written
    pub fn save(&self, path: &Path) -> Result<()> {
        let saved = match self {
            Self::Luma(img) => img.save(path),
            Self::Rgba(img) => img.save(path),
        };
        saved.map_err(|e| TextureError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl From<GrayImage> for Bitmap {
    fn from(image: GrayImage) -> Self {
        Self::Luma(image)
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Self {
        Self::Rgba(image)
    }
}

impl From<DynamicImage> for Bitmap {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}
