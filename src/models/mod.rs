pub mod config;

pub use config::{CustomFilter, ExportMode, RunConfig, ALL_KEYWORD};
