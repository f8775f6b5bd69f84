//! Unified error type for the error-diffusion public API.

use crate::kernel::KernelError;
use std::fmt;

/// Unified error type for the error-diffusion public API.
///
/// Every variant is terminal for the run that raised it; nothing inside
/// the engine retries or degrades.
///
/// # Example
///
/// ```
/// use error_diffusion::{DitherError, GrayImage, Kernel};
///
/// fn build() -> Result<(Kernel, GrayImage), DitherError> {
///     let kernel = Kernel::from_rows(&[[0.0, 0.0, 1.0]])?;
///     let image = GrayImage::filled(4, 4, 64)?;
///     Ok((kernel, image))
/// }
/// # assert!(build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DitherError {
    /// Kernel construction failed
    Kernel(KernelError),
    /// Image has zero width or height
    EmptyImage {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Image area does not fit in memory
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Pixel buffer length does not match the dimensions
    BufferLength {
        /// Expected number of elements
        expected: usize,
        /// Supplied number of elements
        found: usize,
    },
    /// Error multiplier is zero, negative or not finite
    InvalidMultiplier(f32),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Kernel(err) => write!(f, "kernel error: {}", err),
            DitherError::EmptyImage { width, height } => {
                write!(f, "image is empty ({}x{})", width, height)
            }
            DitherError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
            DitherError::BufferLength { expected, found } => write!(
                f,
                "pixel buffer has {} elements, expected {}",
                found, expected
            ),
            DitherError::InvalidMultiplier(m) => {
                write!(f, "error multiplier must be finite and positive, got {}", m)
            }
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Kernel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KernelError> for DitherError {
    fn from(err: KernelError) -> Self {
        DitherError::Kernel(err)
    }
}
