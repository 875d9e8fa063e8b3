//! Error types for the simulation core and the scenario loaders.

use thiserror::Error;

/// Failures raised by the physics core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A zero-length vector had to be normalised (coincident bodies,
    /// zero boundary span, coincident collision prediction)
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("invalid body parameters: {0}")]
    InvalidBodyParameters(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Failures raised while reading scenarios and world files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type Result<T> = std::result::Result<T, SimError>;
