//! Three-channel diffusion with pass-through alpha.

use crate::api::DitherError;
use crate::image::RgbaImage;
use crate::kernel::Kernel;

use super::{adjusted_value, quantize, scatter, DitherOptions, ErrorAccumulator};

/// Dither the R, G and B channels of an image independently.
///
/// Each channel keeps its own [`ErrorAccumulator`]; all three share the
/// kernel and the multiplier. Every output R/G/B value is `0` or `255` and
/// alpha equals the source alpha.
///
/// # Errors
///
/// [`DitherError::InvalidMultiplier`] if the options fail validation.
///
/// # Example
///
/// ```
/// use error_diffusion::{dither_color, DitherOptions, RgbaImage, SIERRA_LITE};
///
/// let image = RgbaImage::filled(3, 3, [200, 90, 30, 77]).unwrap();
/// let out = dither_color(&image, SIERRA_LITE.kernel(), &DitherOptions::new()).unwrap();
/// assert!(out.pixels().iter().all(|p| p[3] == 77));
/// ```
pub fn dither_color(
    image: &RgbaImage,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Result<RgbaImage, DitherError> {
    options.validate()?;

    let (width, height) = (image.width(), image.height());
    let source = image.pixels();
    let mut output = vec![[0u8; 4]; width * height];
    let mut accs = [
        ErrorAccumulator::new(width, height),
        ErrorAccumulator::new(width, height),
        ErrorAccumulator::new(width, height),
    ];

    for x in 0..width {
        for y in 0..height {
            let idx = y * width + x;
            let pixel = source[idx];
            let mut out = [0, 0, 0, pixel[3]];
            for (c, acc) in accs.iter_mut().enumerate() {
                let adjusted = adjusted_value(pixel[c], acc, x, y, options.multiplier);
                let (level, residual) = quantize(adjusted);
                out[c] = level;
                scatter(acc, kernel, x, y, residual);
            }
            output[idx] = out;
        }
    }

    Ok(RgbaImage::from_parts(width, height, output))
}
