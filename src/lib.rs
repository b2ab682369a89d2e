//! Tileable procedural texture generation from image samples
//!
//! Samples are composed into seamless textures by a handful of strategies:
//! mirrored mosaics, radial-mask blends of quadrant-swapped copies, noise
//! masked composites of two samples and plain coherent-noise fields. Every
//! strategy is built from per-pixel primitives over in-memory bitmaps.

#![forbid(unsafe_code)]

/// Bitmap storage and per-pixel composition primitives
pub mod bitmap;
/// Input/output operations, configuration and error handling
pub mod io;
/// Coherent noise generators and noise fields
pub mod noise;
/// Tiling, quadrant swapping and radial masks
pub mod spatial;
/// Texture strategies and the sample-grouping driver
pub mod strategy;

pub use bitmap::{Bitmap, ColorMode};
pub use io::error::{Result, TextureError};
pub use strategy::{TextureCreator, TextureStrategy};
