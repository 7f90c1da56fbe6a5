//! Resource service implementation.
//!
//! Lists the registered resources and renders their bodies on read.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use schemars::Schema;
use tracing::debug;

use super::definitions::ServerInfoResource;
use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for listing and reading resources.
pub struct ResourceService {
    server_name: String,
    api_base_url: String,
    tool_names: Vec<&'static str>,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// How a resource body is produced on read.
#[derive(Debug, Clone, Copy)]
pub enum ResourceContent {
    /// Live description of this server.
    ServerInfo,

    /// JSON Schema of a response model.
    Schema(fn() -> Schema),
}

impl ResourceService {
    pub fn new(
        server_name: impl Into<String>,
        api_base_url: impl Into<String>,
        tool_names: Vec<&'static str>,
    ) -> Self {
        let resources = get_all_resources();
        debug!("Registered {} resource(s)", resources.len());

        Self {
            server_name: server_name.into(),
            api_base_url: api_base_url.into(),
            tool_names,
            resources,
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::NotFound(uri.to_string()))?;

        let text = match entry.content {
            ResourceContent::ServerInfo => {
                ServerInfoResource::render(&self.server_name, &self.api_base_url, &self.tool_names)?
            }
            ResourceContent::Schema(schema) => serde_json::to_string_pretty(&schema())?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
