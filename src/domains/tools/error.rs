//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while invoking an API-backed tool.
///
/// Every variant is returned to the caller as a value and rendered as a
/// text error result. None of them is retried by the tool layer.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments were not a JSON object, or a value cannot be used as given.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A parameter declared as required was absent (or null).
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    /// The HTTP request could not be constructed.
    #[error("Failed to create request: {0}")]
    MalformedRequest(String),

    /// The network exchange failed (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The caller cancelled the invocation before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// The remote API answered with a status >= 400.
    #[error("API error: {body}")]
    Remote { status: u16, body: String },

    /// A successfully parsed payload could not be serialized again.
    #[error("Failed to format JSON: {0}")]
    EncodingFailure(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "missing required parameter" error.
    pub fn missing_required(key: impl Into<String>) -> Self {
        Self::MissingRequiredParameter(key.into())
    }

    /// Create a new "malformed request" error.
    pub fn malformed_request(msg: impl Into<String>) -> Self {
        Self::MalformedRequest(msg.into())
    }

    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new remote API error carrying the response body verbatim.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// Short machine-readable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::MissingRequiredParameter(_) => "missing_required_parameter",
            Self::MalformedRequest(_) => "malformed_request",
            Self::Transport(_) => "transport_error",
            Self::Cancelled => "cancelled",
            Self::Remote { .. } => "remote_error",
            Self::EncodingFailure(_) => "encoding_failure",
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_embeds_body() {
        let err = ToolError::remote(404, r#"{"code":"NOT_FOUND"}"#);
        assert_eq!(err.to_string(), r#"API error: {"code":"NOT_FOUND"}"#);
        assert_eq!(err.kind(), "remote_error");
    }

    #[test]
    fn test_missing_required_names_field() {
        let err = ToolError::missing_required("marketId");
        assert!(err.to_string().contains("marketId"));
    }
}
