//! Response decoding.
//!
//! Maps `(status, body)` to a [`ToolResult`]:
//!
//! - status >= 400: error carrying the body verbatim
//! - body parses as the declared shape: pretty-printed JSON
//! - body does not parse: the raw body as text (degraded, not an error)

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::result::ToolResult;
use crate::domains::tools::ToolError;
use crate::domains::tools::models::ApiError;

/// A body that did not match the declared response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(pub Vec<u8>);

impl RawBody {
    pub fn into_text(self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

/// Decoder signature stored on each tool descriptor.
pub type DecodeFn = fn(u16, &[u8]) -> ToolResult;

/// Try to parse `body` as `T`, handing the bytes back on failure.
pub fn parse_structured<T: DeserializeOwned>(body: &[u8]) -> Result<T, RawBody> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("Response did not match declared shape: {}", e);
        RawBody(body.to_vec())
    })
}

/// Serialize with 2-space indentation.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::EncodingFailure(e.to_string()))
}

/// Decode a response whose success body is declared as `T`.
pub fn decode_as<T>(status: u16, body: &[u8]) -> ToolResult
where
    T: DeserializeOwned + Serialize,
{
    if status >= 400 {
        let text = String::from_utf8_lossy(body).into_owned();
        match serde_json::from_slice::<ApiError>(body) {
            Ok(api_error) => warn!(
                "API returned {} ({}): {}",
                status,
                api_error.code,
                api_error.message.as_deref().unwrap_or("")
            ),
            Err(_) => warn!("API returned {}", status),
        }
        return ToolError::remote(status, text).into();
    }

    match parse_structured::<T>(body) {
        Ok(value) => match encode_pretty(&value) {
            Ok(text) => ToolResult::Structured(text),
            Err(err) => err.into(),
        },
        Err(raw) => {
            warn!("Falling back to raw response text ({} bytes)", raw.0.len());
            ToolResult::Text(raw.into_text())
        }
    }
}
