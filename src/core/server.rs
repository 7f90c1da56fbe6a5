//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are declared in `domains/tools/definitions/` and collected into an
//! immutable `ToolRegistry` when the server is built. The rmcp `ToolRouter`
//! used by STDIO and the HTTP dispatch both come from that registry.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::{ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "Tools for the Countries API. Use get_v1_countries to list countries \
     for a market (marketId, e.g. en-US) and get_v1_country for one country with its states. \
     Response schemas are available as resources under countries://schemas/.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered API tools.
    registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let registry = ToolRegistry::from_config(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(
            config.server.name.clone(),
            config.api.base_url.clone(),
            registry.tool_names(),
        ));

        Self {
            tool_router: build_tool_router::<Self>(&registry),
            registry,
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Server instructions shown to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let cancel = tokio_util::sync::CancellationToken::new();
        let result = self.registry.call_tool(name, arguments, &cancel).await?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Render(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "countries-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_new_reports_registry_errors() {
        let mut config = Config::default();
        config.credentials.api_key = Some("bad\nkey".to_string());
        let err = McpServer::new(config).err().unwrap();
        assert!(matches!(err, crate::core::Error::Tool(_)));
    }

    #[test]
    fn test_list_tools_for_http() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "get_v1_countries");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_read_resource_for_http() {
        let server = McpServer::new(Config::default()).unwrap();
        assert!(server.read_resource("countries://server/info").await.is_ok());
        assert!(server.read_resource("countries://missing").await.is_err());
    }
}
