//! CLI error types.

use rosa_config::ConfigError;
use rosa_site::{InvalidImageRefError, MalformedTreeError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    MalformedTree(#[from] MalformedTreeError),

    #[error("{0}")]
    InvalidImage(#[from] InvalidImageRefError),
}
