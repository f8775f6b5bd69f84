//! Owned pixel buffers for engine input and output.

use crate::api::DitherError;

/// Pixel count for `width x height`.
///
/// The area must stay addressable as RGBA bytes, so `4 * area` is bounded
/// by `isize::MAX`.
fn area(width: usize, height: usize) -> Result<usize, DitherError> {
    if width == 0 || height == 0 {
        return Err(DitherError::EmptyImage { width, height });
    }
    width
        .checked_mul(height)
        .filter(|area| {
            area.checked_mul(4)
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(DitherError::TooLarge { width, height })
}

fn check_dimensions(width: usize, height: usize, found: usize) -> Result<(), DitherError> {
    let expected = area(width, height)?;
    if found != expected {
        return Err(DitherError::BufferLength { expected, found });
    }
    Ok(())
}

/// Single-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Wrap intensity values, one per pixel.
    ///
    /// # Errors
    ///
    /// [`DitherError::EmptyImage`] for a zero dimension,
    /// [`DitherError::TooLarge`] when the area overflows and
    /// [`DitherError::BufferLength`] when `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, DitherError> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel is `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, DitherError> {
        let len = area(width, height)?;
        Self::new(width, height, vec![value; len])
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Row-major intensities.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning the raw intensities.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Buffer built by the engine; dimensions are already validated.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Four-channel 8-bit RGBA image, row-major, non-premultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl RgbaImage {
    /// Wrap RGBA pixels.
    ///
    /// # Errors
    ///
    /// Same as [`GrayImage::new`].
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Result<Self, DitherError> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap interleaved `R, G, B, A` bytes.
    ///
    /// ```
    /// use error_diffusion::RgbaImage;
    ///
    /// let image = RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 128]).unwrap();
    /// assert_eq!(image.get(1, 0), [0, 0, 255, 128]);
    /// ```
    pub fn from_raw(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, DitherError> {
        let expected = area(width, height)? * 4;
        if bytes.len() % 4 != 0 {
            return Err(DitherError::BufferLength {
                expected,
                found: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::new(width, height, pixels)
    }

    /// An image where every pixel is `value`.
    pub fn filled(width: usize, height: usize, value: [u8; 4]) -> Result<Self, DitherError> {
        let len = area(width, height)?;
        Self::new(width, height, vec![value; len])
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Consume the image, returning interleaved `R, G, B, A` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }

    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }
}
