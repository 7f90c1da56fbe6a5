//! Transport invocation.
//!
//! The [`Invoker`] trait is the seam between the tool adapter and the
//! network. Production code uses [`ReqwestInvoker`]; tests substitute an
//! in-memory stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::{debug, error};

use super::request::HttpRequestSpec;
use crate::domains::tools::ToolError;

/// Raw response of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes a built request. Implementations must not retry.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn send(&self, request: HttpRequestSpec) -> Result<HttpResponse, ToolError>;
}

/// [`Invoker`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestInvoker {
    client: Client,
}

impl ReqwestInvoker {
    /// Build a client with the given request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ToolError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ToolError::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Invoker for ReqwestInvoker {
    async fn send(&self, request: HttpRequestSpec) -> Result<HttpResponse, ToolError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            ToolError::from(e)
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            ToolError::from(e)
        })?;

        debug!("Response status {} ({} bytes)", status, body.len());

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
