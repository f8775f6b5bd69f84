//! Image buffers and the non-diffusing helpers.

mod buffer;
mod luma;

pub use buffer::{GrayImage, RgbaImage};
pub use luma::{grayscale, luma, threshold, THRESHOLD_CUTOFF};
