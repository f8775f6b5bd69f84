//! Single-channel (luma) diffusion.

use crate::api::DitherError;
use crate::image::GrayImage;
use crate::kernel::Kernel;

use super::{adjusted_value, quantize, scatter, DitherOptions, ErrorAccumulator};

/// Dither a grayscale image to pure black and white.
///
/// Returns a new image of the same size containing only `0` and `255`.
/// The source is not modified.
///
/// # Errors
///
/// [`DitherError::InvalidMultiplier`] if the options fail validation. The
/// image and kernel types cannot be malformed once constructed.
///
/// # Example
///
/// ```
/// use error_diffusion::{dither_monochrome, DitherOptions, GrayImage, FLOYD_STEINBERG};
///
/// let image = GrayImage::filled(4, 4, 128).unwrap();
/// let out = dither_monochrome(&image, FLOYD_STEINBERG.kernel(), &DitherOptions::new()).unwrap();
/// assert!(out.pixels().iter().all(|&v| v == 0 || v == 255));
/// ```
pub fn dither_monochrome(
    image: &GrayImage,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Result<GrayImage, DitherError> {
    options.validate()?;

    let (width, height) = (image.width(), image.height());
    let source = image.pixels();
    let mut output = vec![0u8; width * height];
    let mut acc = ErrorAccumulator::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let idx = y * width + x;
            let adjusted = adjusted_value(source[idx], &acc, x, y, options.multiplier);
            let (level, residual) = quantize(adjusted);
            output[idx] = level;
            scatter(&mut acc, kernel, x, y, residual);
        }
    }

    Ok(GrayImage::from_parts(width, height, output))
}
