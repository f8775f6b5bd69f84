use error_diffusion::{DitherError, KernelError, Mode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("No filters selected")]
    NoFilters,

    #[error("Invalid kernel for filter {name}: {source}")]
    InvalidKernel {
        name: String,
        #[source]
        source: KernelError,
    },

    #[error("Invalid multiplier: {0} (must be a finite positive number)")]
    InvalidMultiplier(f32),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Dither error ({filter}, {mode}): {source}")]
    Dither {
        filter: String,
        mode: Mode,
        #[source]
        source: DitherError,
    },

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
