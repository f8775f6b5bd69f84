#![allow(clippy::module_inception)]

//! error-diffusion: bi-level error diffusion dithering
//!
//! This library turns grayscale images into pure black and white, and RGBA
//! images into per-channel black/white (eight colors plus the original
//! alpha), by diffusing each pixel's quantization error onto pixels that
//! have not been processed yet.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use error_diffusion::{Ditherer, GrayImage, FLOYD_STEINBERG};
//!
//! let ditherer = Ditherer::new(FLOYD_STEINBERG.clone());
//! let image = GrayImage::filled(4, 4, 128).unwrap();
//! let result = ditherer.monochrome(&image).unwrap();
//!
//! assert_eq!(result.width(), 4);
//! assert!(result.pixels().iter().all(|&v| v == 0 || v == 255));
//! ```
//!
//! # Kernels
//!
//! Eight kernels ship as [`Filter`] statics: Floyd-Steinberg,
//! Jarvis-Judice-Ninke, Stucki, Atkinson (75% propagation), Burkes,
//! Sierra-3, Sierra-2 and Sierra-Lite. Custom tables are built with
//! [`Kernel::from_rows`] or [`KernelBuilder`] and validated on
//! construction.
//!
//! # The Error Multiplier
//!
//! Pending error is scaled by [`DitherOptions::multiplier`] (default
//! `1.18`) before it is subtracted from a pixel. Raising it adds
//! high-frequency texture; beyond about 2.0 full-propagation kernels
//! break down into streaks.
//!
//! # Concurrency
//!
//! A single run is sequential: each decision depends on error from every
//! earlier pixel. Runs are independent of each other. Kernels, filters and
//! source images are immutable and `Sync`, and every run allocates its own
//! [`ErrorAccumulator`] and output, so separate runs may proceed on
//! separate threads without locking.

pub mod api;
pub mod diffuse;
pub mod image;
pub mod kernel;


pub use api::{DitherError, Dithered, Ditherer};
pub use diffuse::{
    dither_color, dither_monochrome, DitherOptions, ErrorAccumulator, Mode, DEFAULT_MULTIPLIER,
};
pub use image::{grayscale, luma, threshold, GrayImage, RgbaImage, THRESHOLD_CUTOFF};
pub use kernel::{
    Filter, Kernel, KernelBuilder, KernelError, ALL_FILTERS, ATKINSON, BURKES, FLOYD_STEINBERG,
    JARVIS_JUDICE_NINKE, SIERRA_2, SIERRA_3, SIERRA_LITE, STUCKI,
};
pub use kernel::lookup as lookup_filter;
