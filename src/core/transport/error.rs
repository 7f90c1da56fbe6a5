//! Transport error types.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that end a transport before a clean shutdown.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP session could not be established.
    #[error("Failed to start {transport} session: {reason}")]
    Startup {
        transport: &'static str,
        reason: String,
    },

    /// The transport stopped with an error while serving.
    #[error("{transport} transport failed: {reason}")]
    Serve {
        transport: &'static str,
        reason: String,
    },
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn startup(transport: &'static str, reason: impl ToString) -> Self {
        Self::Startup {
            transport,
            reason: reason.to_string(),
        }
    }

    pub fn serve(transport: &'static str, reason: impl ToString) -> Self {
        Self::Serve {
            transport,
            reason: reason.to_string(),
        }
    }
}
