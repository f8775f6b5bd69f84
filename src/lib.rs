//! dither - concurrent multi-filter error diffusion
//!
//! Configuration, filter selection and the fan-out renderer built on the
//! `error-diffusion` core crate.

pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{ConfigError, RenderError};
pub use models::{ExportMode, RunConfig};
pub use services::{FilterOutput, RenderReport, RenderService};
