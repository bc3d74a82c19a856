//! Error types for the gesture layer and replay tool.

use thiserror::Error;
use zoop_view::ViewError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ZoopError {
    /// The surface's view window was missing or malformed.
    #[error("View window error: {0}")]
    View(#[from] ViewError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay script could not be parsed.
    #[error("Invalid replay script: {0}")]
    Script(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ZoopError>;
