//! Diffusion options and configuration.

use crate::api::DitherError;

/// Default error multiplier.
///
/// Slightly above 1.0 to offset the contrast lost to diffusion. Values
/// below 1.0 wash the output out; values above roughly 2.0 produce
/// streaks and inverted patches.
pub const DEFAULT_MULTIPLIER: f32 = 1.18;

/// Configuration for one diffusion run.
///
/// # Example
///
/// ```
/// use error_diffusion::DitherOptions;
///
/// let options = DitherOptions::new();
/// assert_eq!(options.multiplier, 1.18);
///
/// let options = DitherOptions::new().multiplier(1.0);
/// assert_eq!(options.multiplier, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Scale applied to the accumulated error before it is subtracted
    /// from a pixel.
    ///
    /// Default: `1.18`
    pub multiplier: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl DitherOptions {
    /// Create new options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error multiplier.
    #[inline]
    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Check the options before a run.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidMultiplier`] when the multiplier is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<(), DitherError> {
        if self.multiplier.is_finite() && self.multiplier > 0.0 {
            Ok(())
        } else {
            Err(DitherError::InvalidMultiplier(self.multiplier))
        }
    }
}
