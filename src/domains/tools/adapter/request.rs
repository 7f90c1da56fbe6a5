//! Request building.
//!
//! Combines the configured base URL, an endpoint's path template and the
//! extracted [`ParamMap`] into an [`HttpRequestSpec`]. Credentials are never
//! handled here; they are added afterwards by an optional [`Authorize`] hook.

use reqwest::Method;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use super::params::ParamMap;
use crate::domains::tools::ToolError;

/// Static description of a remote endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/v1/countries/{countryKey}`.
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
        }
    }
}

/// A fully built HTTP request, ready for an [`Invoker`](super::Invoker).
#[derive(Debug, Clone)]
pub struct HttpRequestSpec {
    pub method: Method,
    pub url: Url,
    /// Query pairs in declaration order (unencoded).
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequestSpec {
    /// Path plus query string as sent on the wire, e.g. `/v1/countries?marketId=en-US`.
    pub fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }
}

/// Capability that attaches credentials to an outgoing request.
pub trait Authorize: Send + Sync {
    fn authorize(&self, request: &mut HttpRequestSpec) -> Result<(), ToolError>;
}

/// Sets a fixed `Authorization` header, e.g. `sso-key <key>` or `Bearer <token>`.
pub struct HeaderAuth {
    name: HeaderName,
    value: HeaderValue,
}

impl HeaderAuth {
    /// Build an `Authorization: <scheme> <credential>` hook.
    pub fn new(scheme: &str, credential: &str) -> Result<Self, ToolError> {
        let raw = if scheme.is_empty() {
            credential.to_string()
        } else {
            format!("{scheme} {credential}")
        };
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|e| ToolError::malformed_request(format!("invalid credential: {e}")))?;
        value.set_sensitive(true);

        Ok(Self {
            name: AUTHORIZATION,
            value,
        })
    }
}

impl std::fmt::Debug for HeaderAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderAuth")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Authorize for HeaderAuth {
    fn authorize(&self, request: &mut HttpRequestSpec) -> Result<(), ToolError> {
        request.headers.insert(self.name.clone(), self.value.clone());
        Ok(())
    }
}

/// Build the request for `endpoint` against `base_url`.
pub fn build_request(
    base_url: &str,
    endpoint: &Endpoint,
    params: &ParamMap,
) -> Result<HttpRequestSpec, ToolError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ToolError::malformed_request(format!("invalid base URL '{base_url}': {e}")))?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            ToolError::malformed_request(format!("base URL '{base_url}' cannot carry a path"))
        })?;
        segments.pop_if_empty();
        for segment in endpoint.path.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(key) => {
                    let value = params.path_value(key).ok_or_else(|| {
                        ToolError::malformed_request(format!("no value for path parameter '{key}'"))
                    })?;
                    if matches!(value, "" | "." | "..") {
                        return Err(ToolError::invalid_arguments(format!(
                            "'{key}' must name a single path segment, got '{value}'"
                        )));
                    }
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    let query: Vec<(String, String)> = params
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if query.is_empty() {
        url.set_query(None);
    } else {
        let encoded = serde_urlencoded::to_string(&query)
            .map_err(|e| ToolError::malformed_request(format!("cannot encode query: {e}")))?;
        url.set_query(Some(&encoded));
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(HttpRequestSpec {
        method: endpoint.method.clone(),
        url,
        query,
        headers,
        body: None,
    })
}
