//! Grayscale conversion and the plain threshold baseline.
//!
//! Neither function diffuses error. [`threshold`] exists as a cheap point
//! of comparison for the diffusion engine's output.

use super::{GrayImage, RgbaImage};

/// Intensities strictly above this value become white in [`threshold`].
pub const THRESHOLD_CUTOFF: u8 = 123;

/// Luma of one pixel using 16-bit fixed-point weights.
///
/// Channels are widened to 16 bits (`v * 257`) and combined with weights
/// `19595 / 38470 / 7471` (0.299 / 0.587 / 0.114 scaled by 2^16), then
/// rounded down to 8 bits. Color is premultiplied by alpha first, so a
/// translucent pixel darkens toward black. An opaque gray `(v, v, v)` maps
/// back to exactly `v`.
#[inline]
pub fn luma(pixel: [u8; 4]) -> u8 {
    let a = pixel[3] as u32 * 257;
    let premultiply = |c: u8| c as u32 * 257 * a / 0xffff;
    let r = premultiply(pixel[0]);
    let g = premultiply(pixel[1]);
    let b = premultiply(pixel[2]);
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

/// Convert an RGBA image to single-channel luma.
pub fn grayscale(image: &RgbaImage) -> GrayImage {
    let pixels = image.pixels().iter().map(|&p| luma(p)).collect();
    GrayImage::from_parts(image.width(), image.height(), pixels)
}

/// Binarize at [`THRESHOLD_CUTOFF`] with no error propagation.
pub fn threshold(image: &GrayImage) -> GrayImage {
    let pixels = image
        .pixels()
        .iter()
        .map(|&v| if v > THRESHOLD_CUTOFF { 255 } else { 0 })
        .collect();
    GrayImage::from_parts(image.width(), image.height(), pixels)
}
