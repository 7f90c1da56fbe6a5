//! Tool descriptors.
//!
//! A [`ToolDescriptor`] binds a tool's metadata to the adapter pipeline
//! (extract, build, authorize, send, decode) for one remote endpoint.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::decoder::DecodeFn;
use super::invoker::Invoker;
use super::params::{ParameterSpec, extract, input_schema};
use super::request::{Authorize, Endpoint, HttpRequestSpec, build_request};
use super::result::ToolResult;
use crate::domains::tools::ToolError;

/// Everything a descriptor needs to reach the remote API.
pub struct ApiContext {
    pub base_url: String,
    pub authorizer: Option<Arc<dyn Authorize>>,
    pub invoker: Arc<dyn Invoker>,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, invoker: Arc<dyn Invoker>) -> Self {
        Self {
            base_url: base_url.into(),
            authorizer: None,
            invoker,
        }
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorize>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }
}

impl std::fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext")
            .field("base_url", &self.base_url)
            .field("authorized", &self.authorizer.is_some())
            .finish()
    }
}

/// Static metadata of an API-backed tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: Endpoint,
    pub params: Vec<ParameterSpec>,
    pub decode: DecodeFn,
}

/// A registered tool: metadata plus the context it calls through.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    spec: ToolSpec,
    context: Arc<ApiContext>,
}

impl ToolDescriptor {
    pub fn new(spec: ToolSpec, context: Arc<ApiContext>) -> Self {
        Self { spec, context }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// MCP tool metadata, with the input schema derived from the parameter list.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.spec.name.into(),
            description: Some(self.spec.description.into()),
            input_schema: Arc::new(input_schema(&self.spec.params)),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the outgoing request without sending it.
    pub fn prepare(&self, arguments: &Value) -> Result<HttpRequestSpec, ToolError> {
        let params = extract(arguments, &self.spec.params)?;
        let mut request = build_request(&self.context.base_url, &self.spec.endpoint, &params)?;
        if let Some(authorizer) = &self.context.authorizer {
            authorizer.authorize(&mut request)?;
        }
        Ok(request)
    }

    /// Run one invocation. Errors are returned as [`ToolResult::Error`].
    #[instrument(skip_all, fields(tool = self.spec.name))]
    pub async fn invoke(&self, arguments: &Value, cancel: &CancellationToken) -> ToolResult {
        match self.call(arguments, cancel).await {
            Ok(result) => result,
            Err(err) => {
                warn!("Tool {} failed ({}): {}", self.spec.name, err.kind(), err);
                err.into()
            }
        }
    }

    async fn call(
        &self,
        arguments: &Value,
        cancel: &CancellationToken,
    ) -> Result<ToolResult, ToolError> {
        if cancel.is_cancelled() {
            return Err(ToolError::Cancelled);
        }

        let request = self.prepare(arguments)?;
        info!("Calling {} {}", request.method, request.path_and_query());

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ToolError::Cancelled),
            response = self.context.invoker.send(request) => response?,
        };

        Ok((self.spec.decode)(response.status, &response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::adapter::decoder::decode_as;
    use crate::domains::tools::adapter::params::ParamKind;
    use crate::domains::tools::adapter::request::HeaderAuth;
    use crate::domains::tools::adapter::testing::StubInvoker;
    use crate::domains::tools::models::CountrySummary;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;
    use std::time::Duration;

    fn list_spec() -> ToolSpec {
        ToolSpec {
            name: "list_things",
            description: "List things",
            endpoint: Endpoint::get("/v1/things"),
            params: vec![
                ParameterSpec::query("marketId", ParamKind::String, "Market").required(),
                ParameterSpec::query("sort", ParamKind::String, "Sort"),
            ],
            decode: decode_as::<Vec<CountrySummary>>,
        }
    }

    fn descriptor(stub: Arc<StubInvoker>) -> ToolDescriptor {
        let context = ApiContext::new("https://api.example.com", stub);
        ToolDescriptor::new(list_spec(), Arc::new(context))
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let stub = Arc::new(StubInvoker::respond(
            200,
            r#"[{"countryKey":"US","label":"United States","callingCode":"1"}]"#,
        ));
        let tool = descriptor(stub.clone());

        let result = tool
            .invoke(&json!({ "marketId": "en-US" }), &CancellationToken::new())
            .await;

        assert!(matches!(result, ToolResult::Structured(_)));
        assert_eq!(stub.calls(), 1);
        assert_eq!(
            stub.requests()[0].path_and_query(),
            "/v1/things?marketId=en-US"
        );
    }

    #[tokio::test]
    async fn test_non_object_arguments_never_reach_network() {
        let stub = Arc::new(StubInvoker::respond(200, "[]"));
        let tool = descriptor(stub.clone());

        let result = tool
            .invoke(&json!(["marketId", "en-US"]), &CancellationToken::new())
            .await;

        assert!(result.is_error());
        assert!(result.message().starts_with("Invalid arguments"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_never_reaches_network() {
        let stub = Arc::new(StubInvoker::respond(200, "[]"));
        let tool = descriptor(stub.clone());

        let result = tool
            .invoke(&json!({ "sort": "label" }), &CancellationToken::new())
            .await;

        assert!(result.message().contains("marketId"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_result() {
        let stub = Arc::new(StubInvoker::fail("connection refused"));
        let tool = descriptor(stub.clone());

        let result = tool
            .invoke(&json!({ "marketId": "en-US" }), &CancellationToken::new())
            .await;

        assert_eq!(
            result,
            ToolResult::error_with_cause("Request failed", "connection refused")
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_error_result() {
        let stub = Arc::new(StubInvoker::respond(
            404,
            r#"{"code":"NOT_FOUND","message":"no such market"}"#,
        ));
        let tool = descriptor(stub);

        let result = tool
            .invoke(&json!({ "marketId": "xx-XX" }), &CancellationToken::new())
            .await;

        assert!(result.is_error());
        assert!(result.message().contains("NOT_FOUND"));
        assert!(result.message().contains("no such market"));
    }

    #[tokio::test]
    async fn test_already_cancelled_skips_network() {
        let stub = Arc::new(StubInvoker::respond(200, "[]"));
        let tool = descriptor(stub.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = tool.invoke(&json!({ "marketId": "en-US" }), &cancel).await;

        assert_eq!(result, ToolResult::error("Request cancelled"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_abandons_in_flight_request() {
        let stub = Arc::new(StubInvoker::respond(200, "[]").delayed(Duration::from_secs(60)));
        let tool = descriptor(stub.clone());
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result = tool.invoke(&json!({ "marketId": "en-US" }), &cancel).await;

        assert_eq!(result, ToolResult::error("Request cancelled"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_authorizer_adds_header() {
        let stub = Arc::new(StubInvoker::respond(200, "[]"));
        let auth = HeaderAuth::new("sso-key", "k:s").unwrap();
        let context = ApiContext::new("https://api.example.com", stub.clone())
            .with_authorizer(Arc::new(auth));
        let tool = ToolDescriptor::new(list_spec(), Arc::new(context));

        tool.invoke(&json!({ "marketId": "en-US" }), &CancellationToken::new())
            .await;

        assert_eq!(stub.requests()[0].headers[AUTHORIZATION], "sso-key k:s");
    }

    #[tokio::test]
    async fn test_concurrent_invocations_do_not_share_query() {
        let stub = Arc::new(StubInvoker::echo_query().delayed(Duration::from_millis(20)));
        let tool = Arc::new(descriptor(stub.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tool = tool.clone();
                tokio::spawn(async move {
                    let market = format!("m{i}");
                    let result = tool
                        .invoke(&json!({ "marketId": market }), &CancellationToken::new())
                        .await;
                    (market, result)
                })
            })
            .collect();

        for handle in handles {
            let (market, result) = handle.await.unwrap();
            let ToolResult::Structured(text) = result else {
                panic!("expected structured result");
            };
            let records: Vec<CountrySummary> = serde_json::from_str(&text).unwrap();
            assert_eq!(records[0].label.as_deref(), Some(format!("marketId={market}").as_str()));
        }
        assert_eq!(stub.calls(), 8);
    }

    #[test]
    fn test_to_tool_schema() {
        let tool = descriptor(Arc::new(StubInvoker::respond(200, "[]"))).to_tool();
        assert_eq!(tool.name, "list_things");
        assert_eq!(tool.input_schema["required"], json!(["marketId"]));
    }
}
