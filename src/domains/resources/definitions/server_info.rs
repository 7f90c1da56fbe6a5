//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::ResourceError;
use crate::domains::resources::service::ResourceContent;

/// Describes this server and the API it fronts. Rendered on every read.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "countries://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server version, remote API base URL and the tools currently registered";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}

impl ServerInfoResource {
    pub fn render(
        server_name: &str,
        base_url: &str,
        tools: &[&str],
    ) -> Result<String, ResourceError> {
        let info = serde_json::json!({
            "server": server_name,
            "version": env!("CARGO_PKG_VERSION"),
            "api_base_url": base_url,
            "tools": tools,
        });

        Ok(serde_json::to_string_pretty(&info)?)
    }
}
