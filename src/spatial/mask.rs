//! Radial distance masks

use crate::bitmap::Bitmap;
use image::{GrayImage, Luma};

/// Build a mask whose value grows with distance from the image centre
///
/// The distance is normalised per axis by half the width and half the
/// height, so the mask reaches 255 at the midpoint of every edge and stays
/// saturated towards the corners. For square masks this is the plain
/// Euclidean distance divided by half the width.
pub fn radial_mask(width: u32, height: u32) -> Bitmap {
    let (center_x, center_y) = (width / 2, height / 2);
    let radius_x = f64::from(center_x.max(1));
    let radius_y = f64::from(center_y.max(1));

    let mask = GrayImage::from_fn(width, height, |x, y| {
        let dx = (f64::from(x) - f64::from(center_x)) / radius_x;
        let dy = (f64::from(y) - f64::from(center_y)) / radius_y;
        let value = (255.0 * dx.hypot(dy)).trunc();
        Luma([num_traits::clamp(value, 0.0, 255.0) as u8])
    });

    Bitmap::Luma(mask)
}
