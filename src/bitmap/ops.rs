//! Per-pixel composition primitives over same-sized bitmaps

use crate::bitmap::Bitmap;
use crate::io::error::{Result, shape_mismatch};
use image::{GrayImage, ImageBuffer, Luma, Pixel};

/// Scale a channel by a mask value, rounding to the nearest integer
fn scale_channel(channel: u8, weight: u8) -> u8 {
    let scaled = (f64::from(channel) * f64::from(weight) / 255.0).round();
    num_traits::clamp(scaled, 0.0, 255.0) as u8
}

fn blend_channel(top: u8, bottom: u8, weight: u8) -> u8 {
    let w = f64::from(weight) / 255.0;
    let blended = f64::from(top).mul_add(w, f64::from(bottom) * (1.0 - w)).round();
    num_traits::clamp(blended, 0.0, 255.0) as u8
}

fn multiply_buffer<P>(image: &ImageBuffer<P, Vec<u8>>, mask: &GrayImage) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let mut out = image.clone();
    for (pixel, weight) in out.pixels_mut().zip(mask.pixels()) {
        let Luma([w]) = *weight;
        pixel.apply(|c| scale_channel(c, w));
    }
    out
}

fn add_buffer<P>(a: &ImageBuffer<P, Vec<u8>>, b: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let mut out = a.clone();
    for (pixel, other) in out.pixels_mut().zip(b.pixels()) {
        pixel.apply2(other, u8::saturating_add);
    }
    out
}

fn blend_buffer<P>(dst: &mut ImageBuffer<P, Vec<u8>>, src: &ImageBuffer<P, Vec<u8>>, mask: &GrayImage)
where
    P: Pixel<Subpixel = u8>,
{
    for ((pixel, top), weight) in dst.pixels_mut().zip(src.pixels()).zip(mask.pixels()) {
        let Luma([w]) = *weight;
        pixel.apply2(top, |bottom, top| blend_channel(top, bottom, w));
    }
}

/// Weight every channel of `image` by the luminance of `mask`
///
/// Each output channel (alpha included) is `round(channel * mask / 255)`.
/// The mask is converted to luminance first; the output keeps the mode of
/// `image`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the two bitmaps differ in size
pub fn multiply(image: &Bitmap, mask: &Bitmap) -> Result<Bitmap> {
    if image.dimensions() != mask.dimensions() {
        return Err(shape_mismatch("multiply", image.shape(), mask.shape()));
    }

    let weights = mask.to_luma();
    Ok(match image {
        Bitmap::Luma(img) => Bitmap::Luma(multiply_buffer(img, &weights)),
        Bitmap::Rgba(img) => Bitmap::Rgba(multiply_buffer(img, &weights)),
    })
}

/// Channel-wise sum of two bitmaps, saturating at 255
///
/// # Errors
///
/// Returns `ShapeMismatch` if the bitmaps differ in mode or size
pub fn add(a: &Bitmap, b: &Bitmap) -> Result<Bitmap> {
    match (a, b) {
        (Bitmap::Luma(x), Bitmap::Luma(y)) if x.dimensions() == y.dimensions() => {
            Ok(Bitmap::Luma(add_buffer(x, y)))
        }
        (Bitmap::Rgba(x), Bitmap::Rgba(y)) if x.dimensions() == y.dimensions() => {
            Ok(Bitmap::Rgba(add_buffer(x, y)))
        }
        _ => Err(shape_mismatch("add", a.shape(), b.shape())),
    }
}

/// Paste `source` over `destination` weighted by `mask`
///
/// Per channel: `dst = round(src * m/255 + dst * (1 - m/255))`. A mask
/// value of 255 copies the source, 0 keeps the destination.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `source` and `destination` differ in mode or
/// size, or if the mask differs in size
pub fn paste_masked(destination: &mut Bitmap, source: &Bitmap, mask: &Bitmap) -> Result<()> {
    if destination.dimensions() != mask.dimensions() {
        return Err(shape_mismatch(
            "paste with mask",
            destination.shape(),
            mask.shape(),
        ));
    }

    let weights = mask.to_luma();
    let dst_shape = destination.shape();
    match (destination, source) {
        (Bitmap::Luma(dst), Bitmap::Luma(src)) if dst.dimensions() == src.dimensions() => {
            blend_buffer(dst, src, &weights);
            Ok(())
        }
        (Bitmap::Rgba(dst), Bitmap::Rgba(src)) if dst.dimensions() == src.dimensions() => {
            blend_buffer(dst, src, &weights);
            Ok(())
        }
        _ => Err(shape_mismatch("paste with mask", dst_shape, source.shape())),
    }
}

/// Invert the colour channels of a bitmap, leaving alpha untouched
pub fn invert(image: &Bitmap) -> Bitmap {
    let mut out = image.clone();
    match &mut out {
        Bitmap::Luma(img) => image::imageops::invert(img),
        Bitmap::Rgba(img) => image::imageops::invert(img),
    }
    out
}
