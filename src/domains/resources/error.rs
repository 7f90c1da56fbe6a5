//! Resource-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Unknown resource URI: {0}")]
    NotFound(String),

    /// A document could not be serialized.
    #[error("Failed to render resource: {0}")]
    Render(#[from] serde_json::Error),
}
