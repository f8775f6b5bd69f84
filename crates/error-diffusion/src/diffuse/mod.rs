//! The error diffusion engine.
//!
//! Both modes share one skeleton. For every pixel:
//!
//! 1. subtract `pending_error * multiplier` from the source value
//! 2. quantize against the fixed midpoint 128 (black or white)
//! 3. write the level to the output
//! 4. scatter the residual onto later pixels through the kernel
//!
//! # Traversal
//!
//! The outer loop walks columns left to right and the inner loop walks
//! down each column, so a column is one scan line. Kernel row 0 continues
//! the current scan line (pixels below in the same column) and kernel row
//! `ky` reaches `ky` columns ahead. A residual at `(x, y)` lands on
//! `(x + ky, y + kx)` for `kx` in `-offset..=offset`, with weight
//! `kernel.get(kx + offset, ky)`. Every target is strictly after the
//! cursor; targets outside the image are dropped.
//!
//! The traversal is inherently sequential. Independent runs share nothing
//! mutable and can run on separate threads.

mod accumulator;
mod color;
mod monochrome;
mod options;

pub use accumulator::ErrorAccumulator;
pub use color::dither_color;
pub use monochrome::dither_monochrome;
pub use options::{DitherOptions, DEFAULT_MULTIPLIER};

use crate::kernel::Kernel;

/// Midpoint separating black from white.
pub const QUANTIZE_MIDPOINT: f32 = 128.0;

/// Which engine variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Single channel luma diffusion.
    Monochrome,
    /// Independent R, G and B diffusion, alpha copied through.
    Color,
}

impl Mode {
    /// Short label, `"mono"` or `"color"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Monochrome => "mono",
            Mode::Color => "color",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantize an error-adjusted value to `(level, residual)`.
///
/// The residual is `level - adjusted`, the amount the output overshot.
#[inline]
pub(crate) fn quantize(adjusted: f32) -> (u8, f32) {
    if adjusted < QUANTIZE_MIDPOINT {
        (0, -adjusted)
    } else {
        (255, 255.0 - adjusted)
    }
}

/// Source value minus the scaled pending error at `(x, y)`.
#[inline]
pub(crate) fn adjusted_value(
    value: u8,
    acc: &ErrorAccumulator,
    x: usize,
    y: usize,
    multiplier: f32,
) -> f32 {
    value as f32 - acc.get(x, y) * multiplier
}

/// Spread `residual` from `(x, y)` onto later pixels.
pub(crate) fn scatter(acc: &mut ErrorAccumulator, kernel: &Kernel, x: usize, y: usize, residual: f32) {
    let (width, height) = (acc.width(), acc.height());
    let offset = kernel.center_offset();

    for ky in 0..kernel.rows() {
        let tx = x + ky;
        if tx >= width {
            break;
        }
        for col in 0..kernel.cols() {
            let weight = kernel.get(col, ky);
            if weight == 0.0 {
                continue;
            }
            // col - offset is the kx offset; check both edges without going negative
            if y + col < offset || y + col - offset >= height {
                continue;
            }
            acc.add(tx, y + col - offset, residual * weight);
        }
    }
}
