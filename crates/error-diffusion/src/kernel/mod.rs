//! Diffusion kernels and named filters.
//!
//! A [`Kernel`] is an immutable weight table; a [`Filter`] pairs one with a
//! display name. Eight classic filters ship as statics, see [`ALL_FILTERS`].

mod error;
mod filters;
mod kernel;

pub use error::KernelError;
pub use filters::{
    lookup, Filter, ALL_FILTERS, ATKINSON, BURKES, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE,
    SIERRA_2, SIERRA_3, SIERRA_LITE, STUCKI,
};
pub use kernel::{Kernel, KernelBuilder};
