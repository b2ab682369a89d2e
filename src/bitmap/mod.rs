//! Bitmap storage and the pixel-level composition primitives built on it

/// Luminance/RGBA bitmap type and conversions
pub mod buffer;
/// Multiply, add and masked paste over same-sized bitmaps
pub mod ops;

pub use buffer::{Bitmap, ColorMode};
