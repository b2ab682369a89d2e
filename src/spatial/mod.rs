//! Spatial rearrangement of bitmaps
//!
//! This module contains the geometry used by the tiling strategies:
//! - Fixed-stride tiling across a canvas
//! - Quadrant swapping for seam relocation
//! - Radial masks for centre/edge blending

/// Radial distance mask construction
pub mod mask;
/// Diagonal quadrant swap
pub mod quadrants;
/// Canvas tiling
pub mod tiler;

pub use mask::radial_mask;
pub use quadrants::swap_quadrants;
pub use tiler::Tiler;
