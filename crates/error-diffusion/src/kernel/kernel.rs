//! The [`Kernel`] weight table and its builder.

use std::borrow::Cow;

use super::KernelError;

/// An error diffusion kernel.
///
/// A `cols x rows` table of weights, stored row-major. The center column
/// (`cols / 2`) of row 0 is the pixel being quantized; row 0 continues the
/// current scan line and each further row reaches one scan line ahead.
/// A neighbor receives `residual * weight`, so the weights are already
/// normalized (no separate divisor).
///
/// ```text
///   row 0:   .   .   X   a   b        X = current pixel, always 0
///   row 1:   c   d   e   f   g
/// ```
///
/// # Invariants
///
/// Enforced by [`Kernel::new`], [`Kernel::from_rows`] and [`KernelBuilder`]:
///
/// - at least one row and one column, `cols` odd
/// - every weight finite
/// - row 0 holds zeros at and before the center, so error never flows to
///   the current pixel or to pixels that were already processed
///
/// A kernel is immutable once built. Shipped kernels are constants
/// borrowing `'static` tables, so sharing one across threads costs nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    cols: usize,
    rows: usize,
    weights: Cow<'static, [f32]>,
}

impl Kernel {
    /// Wrap a compile-time table. Shape is checked by the kernel tests.
    pub(crate) const fn from_static(cols: usize, rows: usize, weights: &'static [f32]) -> Self {
        Self {
            cols,
            rows,
            weights: Cow::Borrowed(weights),
        }
    }

    /// Build a kernel from a flat row-major weight buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`KernelError`] if the shape or any weight violates the
    /// kernel invariants.
    pub fn new(cols: usize, rows: usize, weights: Vec<f32>) -> Result<Self, KernelError> {
        validate(cols, rows, &weights)?;
        Ok(Self {
            cols,
            rows,
            weights: Cow::Owned(weights),
        })
    }

    /// Build a kernel from a list of rows.
    ///
    /// ```
    /// use error_diffusion::Kernel;
    ///
    /// let kernel = Kernel::from_rows(&[
    ///     [0.0, 0.0, 0.5],
    ///     [0.25, 0.25, 0.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(kernel.cols(), 3);
    /// assert_eq!(kernel.rows(), 2);
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, KernelError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut weights = Vec::with_capacity(cols * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(KernelError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            weights.extend_from_slice(values);
        }
        Self::new(cols, rows.len(), weights)
    }

    /// Number of columns (horizontal extent).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows (how many scan lines the kernel reaches, including
    /// the current one).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column index of the current pixel, `cols / 2`.
    #[inline]
    pub fn center_offset(&self) -> usize {
        self.cols / 2
    }

    /// Weight at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols()` or `row >= rows()`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        assert!(col < self.cols && row < self.rows, "kernel index out of range");
        self.weights[col + self.cols * row]
    }

    /// The raw row-major weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Total fraction of the residual the kernel propagates.
    pub fn weight_sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

fn validate(cols: usize, rows: usize, weights: &[f32]) -> Result<(), KernelError> {
    if cols == 0 || rows == 0 {
        return Err(KernelError::Empty);
    }
    if cols % 2 == 0 {
        return Err(KernelError::EvenWidth { cols });
    }
    if weights.len() != cols * rows {
        return Err(KernelError::WeightCount {
            expected: cols * rows,
            found: weights.len(),
        });
    }
    for (i, w) in weights.iter().enumerate() {
        let (col, row) = (i % cols, i / cols);
        if !w.is_finite() {
            return Err(KernelError::NonFiniteWeight { col, row });
        }
        if row == 0 && col <= cols / 2 && *w != 0.0 {
            return Err(KernelError::BackwardWeight { col, row });
        }
    }
    Ok(())
}

/// Row-by-row kernel builder.
///
/// Rows that are never added stay zero. Shape problems are reported by
/// [`build()`](KernelBuilder::build), so the chain never panics.
///
/// ```
/// use error_diffusion::KernelBuilder;
///
/// let kernel = KernelBuilder::new(3, 2)
///     .row([0.0, 0.0, 7.0 / 16.0])
///     .row([3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0])
///     .build()
///     .unwrap();
/// assert!((kernel.weight_sum() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct KernelBuilder {
    cols: usize,
    rows: usize,
    weights: Vec<f32>,
    next_row: usize,
    error: Option<KernelError>,
}

impl KernelBuilder {
    /// Start a `cols x rows` kernel with all weights zero.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            weights: vec![0.0; cols * rows],
            next_row: 0,
            error: None,
        }
    }

    /// Set the next row.
    pub fn row<R: AsRef<[f32]>>(mut self, values: R) -> Self {
        if self.error.is_some() {
            return self;
        }
        let values = values.as_ref();
        if self.next_row >= self.rows {
            self.error = Some(KernelError::WeightCount {
                expected: self.cols * self.rows,
                found: self.cols * (self.next_row + 1),
            });
        } else if values.len() != self.cols {
            self.error = Some(KernelError::RaggedRow {
                row: self.next_row,
                expected: self.cols,
                found: values.len(),
            });
        } else {
            let start = self.next_row * self.cols;
            self.weights[start..start + self.cols].copy_from_slice(values);
        }
        self.next_row += 1;
        self
    }

    /// Validate and produce the kernel.
    pub fn build(self) -> Result<Kernel, KernelError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Kernel::new(self.cols, self.rows, self.weights)
    }
}
