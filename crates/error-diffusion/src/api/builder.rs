//! Ditherer builder, the ergonomic entry point for the crate.

use crate::diffuse::{dither_color, dither_monochrome, DitherOptions, Mode};
use crate::image::{grayscale, GrayImage, RgbaImage};
use crate::kernel::Filter;

use super::DitherError;

/// Output of [`Ditherer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dithered {
    /// Monochrome output, values `0` or `255`.
    Mono(GrayImage),
    /// Color output, R/G/B `0` or `255`, source alpha.
    Color(RgbaImage),
}

impl Dithered {
    /// Which mode produced this output.
    pub fn mode(&self) -> Mode {
        match self {
            Dithered::Mono(_) => Mode::Monochrome,
            Dithered::Color(_) => Mode::Color,
        }
    }
}

/// High-level diffusion builder.
///
/// Owns a [`Filter`] and [`DitherOptions`]. Configuration methods consume
/// and return `self`; the run methods take `&self`, so one ditherer can
/// process any number of images.
///
/// # Example
///
/// ```
/// use error_diffusion::{Ditherer, GrayImage, BURKES};
///
/// let ditherer = Ditherer::new(BURKES.clone()).multiplier(1.0);
/// let image = GrayImage::new(2, 1, vec![200, 50]).unwrap();
/// let out = ditherer.monochrome(&image).unwrap();
///
/// assert_eq!(out.width(), 2);
/// assert_eq!(out.height(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    filter: Filter,
    options: DitherOptions,
}

impl Ditherer {
    /// Create a ditherer with the default multiplier.
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            options: DitherOptions::new(),
        }
    }

    /// Set the error multiplier.
    #[inline]
    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.options = self.options.multiplier(multiplier);
        self
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured filter.
    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// The configured options.
    #[inline]
    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    /// Dither a grayscale image.
    pub fn monochrome(&self, image: &GrayImage) -> Result<GrayImage, DitherError> {
        dither_monochrome(image, self.filter.kernel(), &self.options)
    }

    /// Dither the color channels of an RGBA image.
    pub fn color(&self, image: &RgbaImage) -> Result<RgbaImage, DitherError> {
        dither_color(image, self.filter.kernel(), &self.options)
    }

    /// Run either mode on an RGBA source.
    ///
    /// Monochrome mode converts the source with [`grayscale`] first.
    pub fn run(&self, mode: Mode, image: &RgbaImage) -> Result<Dithered, DitherError> {
        match mode {
            Mode::Monochrome => self.monochrome(&grayscale(image)).map(Dithered::Mono),
            Mode::Color => self.color(image).map(Dithered::Color),
        }
    }
}
