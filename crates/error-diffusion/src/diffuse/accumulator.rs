//! Full-image buffer of pending diffusion error.

/// Pending error for one channel of one diffusion run.
///
/// Holds one `f32` per pixel, row-major, all starting at zero. Cell
/// `(x, y)` is the total error waiting to be subtracted from that pixel
/// when the traversal reaches it. Cells at or behind the cursor are never
/// read again.
///
/// The accumulator does no clipping: the engine only passes in-bounds
/// coordinates, and an out-of-range index panics.
#[derive(Debug, Clone)]
pub struct ErrorAccumulator {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl ErrorAccumulator {
    /// A zeroed accumulator matching the image dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width * height],
        }
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

    /// Pending error at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[y * self.width + x]
    }

    /// Add `delta` to the pending error at `(x, y)`.
    #[inline]
    pub fn add(&mut self, x: usize, y: usize, delta: f32) {
        self.cells[y * self.width + x] += delta;
    }
}
