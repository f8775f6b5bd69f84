//! Error type for kernel construction.

use std::fmt;

/// Error type for kernel validation.
///
/// Returned when a weight table does not describe a usable diffusion
/// kernel. All variants are raised at build time, before any image is
/// touched.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Kernel has no rows or no columns
    Empty,
    /// Kernel width is even, so it cannot be centered on the current pixel
    EvenWidth {
        /// Number of columns supplied
        cols: usize,
    },
    /// A row has a different length than the first row
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },
    /// Flat weight buffer does not match `cols * rows`
    WeightCount {
        /// `cols * rows`
        expected: usize,
        /// Length of the supplied buffer
        found: usize,
    },
    /// A weight is NaN or infinite
    NonFiniteWeight {
        /// Column of the weight
        col: usize,
        /// Row of the weight
        row: usize,
    },
    /// A weight points at the current pixel or an already visited one
    BackwardWeight {
        /// Column of the weight
        col: usize,
        /// Row of the weight
        row: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Empty => write!(f, "kernel must have at least one row and one column"),
            KernelError::EvenWidth { cols } => {
                write!(f, "kernel width must be odd, got {} columns", cols)
            }
            KernelError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "kernel row {} has {} weights, expected {}",
                row, found, expected
            ),
            KernelError::WeightCount { expected, found } => write!(
                f,
                "kernel has {} weights, expected {} (cols * rows)",
                found, expected
            ),
            KernelError::NonFiniteWeight { col, row } => {
                write!(f, "kernel weight at ({}, {}) is not finite", col, row)
            }
            KernelError::BackwardWeight { col, row } => write!(
                f,
                "kernel weight at ({}, {}) targets the current or an already processed pixel",
                col, row
            ),
        }
    }
}

impl std::error::Error for KernelError {}
