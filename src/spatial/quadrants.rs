//! Diagonal quadrant swap that moves tile edges to the centre

use crate::bitmap::Bitmap;
use image::{ImageBuffer, Pixel};

fn swap_buffer<P>(image: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let (half_w, half_h) = (width / 2, height / 2);
    ImageBuffer::from_fn(width, height, |x, y| {
        *image.get_pixel((x + half_w) % width, (y + half_h) % height)
    })
}

/// Copy `image` with its four quadrants cyclically swapped
///
/// Output pixel `(x, y)` reads input `((x + W/2) mod W, (y + H/2) mod H)`,
/// so the top-left quadrant trades places with the bottom-right and the
/// top-right with the bottom-left. Applying the swap twice restores any
/// image with even dimensions.
pub fn swap_quadrants(image: &Bitmap) -> Bitmap {
    match image {
        Bitmap::Luma(img) => Bitmap::Luma(swap_buffer(img)),
        Bitmap::Rgba(img) => Bitmap::Rgba(swap_buffer(img)),
    }
}
