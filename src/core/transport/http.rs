//! HTTP transport implementation.
//!
//! Stateless JSON-RPC over POST. Each request is answered on its own; there
//! is no session between calls, so `initialize` only reports capabilities.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// Protocol revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    fn router(&self, server: McpServer) -> Router {
        let rpc_path = self.config.rpc_path.clone();
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route(
                "/",
                get(move |State(server): State<McpServer>| root_handler(server, rpc_path)),
            )
            .with_state(server);

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Bind and serve until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::serve("HTTP", e))
    }
}

async fn root_handler(server: McpServer, rpc_path: String) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": rpc_path,
            "health": "/health"
        },
        "tools": server.registry().tool_names(),
        "protocol": "JSON-RPC 2.0"
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(process_request(&server, request).await))
}

/// Dispatch one JSON-RPC message to the server.
async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    let JsonRpcRequest {
        id, method, params, ..
    } = request;
    let params = params.unwrap_or_else(|| json!({}));

    match method.as_str() {
        "initialize" => JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": server.name(),
                    "version": server.version()
                },
                "instructions": server.instructions()
            }),
        ),

        "tools/list" => JsonRpcResponse::success(id, json!({ "tools": server.list_tools() })),

        "tools/call" => {
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return JsonRpcResponse::invalid_params(id, "Missing tool name");
            };
            let arguments = params
                .get("arguments")
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or_else(|| json!({}));

            match server.call_tool(name, arguments).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::invalid_params(id, e),
            }
        }

        "resources/list" => JsonRpcResponse::success(
            id,
            json!({ "resources": server.list_resources().await }),
        ),

        "resources/read" => {
            let Some(uri) = params.get("uri").and_then(Value::as_str) else {
                return JsonRpcResponse::invalid_params(id, "Missing resource URI");
            };

            match server.read_resource(uri).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => JsonRpcResponse::invalid_params(id, e),
            }
        }

        "ping" => JsonRpcResponse::success(id, json!({})),

        m if m.starts_with("notifications/") => {
            debug!("Notification: {}", m);
            JsonRpcResponse::success(id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::method_not_found(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::ToolRegistry;
    use crate::domains::tools::adapter::testing::StubInvoker;
    use std::sync::Arc;

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    fn server_with(stub: Arc<StubInvoker>) -> McpServer {
        let config = Config::default();
        let registry = ToolRegistry::with_invoker(&config, stub).unwrap();
        McpServer::with_registry(config, registry)
    }

    #[tokio::test]
    async fn test_initialize_reports_tools_and_resources() {
        let server = server_with(Arc::new(StubInvoker::respond(200, "[]")));
        let response = process_request(&server, request("initialize", json!({}))).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"].get("prompts").is_none());
        assert_eq!(result["serverInfo"]["name"], "countries-mcp-server");
    }

    #[tokio::test]
    async fn test_tools_call_returns_call_tool_result() {
        let stub = Arc::new(StubInvoker::respond(
            200,
            r#"{"countryKey":"CA","label":"Canada","states":[]}"#,
        ));
        let server = server_with(stub.clone());
        let response = process_request(
            &server,
            request(
                "tools/call",
                json!({
                    "name": "get_v1_country",
                    "arguments": { "countryKey": "CA", "marketId": "en-CA" }
                }),
            ),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("Canada"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_tools_call_null_arguments_mean_empty() {
        let stub = Arc::new(StubInvoker::respond(200, "[]"));
        let server = server_with(stub.clone());
        let response = process_request(
            &server,
            request(
                "tools/call",
                json!({ "name": "get_v1_countries", "arguments": null }),
            ),
        )
        .await;

        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("marketId"), "{text}");
        assert!(!text.contains("expected a JSON object"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_protocol_error() {
        let server = server_with(Arc::new(StubInvoker::respond(200, "[]")));
        let response =
            process_request(&server, request("tools/call", json!({ "name": "nope" }))).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let server = server_with(Arc::new(StubInvoker::respond(200, "[]")));
        let response = process_request(&server, request("prompts/list", json!({}))).await;
        assert_eq!(response.error.unwrap().code, -32601);

        let mut bad = request("tools/list", json!({}));
        bad.jsonrpc = "1.0".to_string();
        let response = process_request(&server, bad).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }
}
