//! Public API: the [`Ditherer`] builder and the [`DitherError`] type.

mod builder;
mod error;

pub use builder::{Dithered, Ditherer};
pub use error::DitherError;
