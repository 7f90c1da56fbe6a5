//! Tool invocation results.

use rmcp::model::{CallToolResult, Content};

use crate::domains::tools::ToolError;

/// Outcome of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    /// Raw response text (degraded decode).
    Text(String),
    /// Pretty-printed JSON of a successfully decoded payload.
    Structured(String),
    /// Failure, rendered to the caller as text.
    Error {
        message: String,
        cause: Option<String>,
    },
}

impl ToolResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: None,
        }
    }

    pub fn error_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Human-readable text of the result.
    pub fn message(&self) -> String {
        match self {
            Self::Text(text) | Self::Structured(text) => text.clone(),
            Self::Error {
                message,
                cause: Some(cause),
            } => format!("{message}: {cause}"),
            Self::Error {
                message,
                cause: None,
            } => message.clone(),
        }
    }

    /// Render as an MCP tool result.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let is_error = self.is_error();
        let content = vec![Content::text(self.message())];
        if is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::MalformedRequest(cause) => {
                Self::error_with_cause("Failed to create request", cause)
            }
            ToolError::Transport(cause) => Self::error_with_cause("Request failed", cause),
            ToolError::EncodingFailure(cause) => {
                Self::error_with_cause("Failed to format JSON", cause)
            }
            other => Self::error(other.to_string()),
        }
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        result.into_call_tool_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_error_message_joins_cause() {
        let result: ToolResult = ToolError::transport("connection refused").into();
        assert_eq!(result.message(), "Request failed: connection refused");
    }

    #[test]
    fn test_render_success() {
        let result = ToolResult::Structured("[]".to_string()).into_call_tool_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "[]");
    }

    #[test]
    fn test_render_error() {
        let result: CallToolResult = ToolResult::error("API error: nope").into();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "API error: nope");
    }
}
