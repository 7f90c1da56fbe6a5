//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once from static configuration and never mutated
//! afterwards. It provides:
//! - The ordered list of tool descriptors
//! - Tool metadata for listing
//! - Dispatch by name (used by the HTTP transport)

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rmcp::model::{CallToolResult, Tool};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::adapter::{ApiContext, HeaderAuth, Invoker, ReqwestInvoker, ToolDescriptor, ToolSpec};
use super::definitions::{GetCountriesTool, GetCountryTool};
use crate::core::config::Config;
use crate::core::error::{Error, Result};

/// Every tool this server knows about, in listing order.
pub fn all_tool_specs() -> Vec<ToolSpec> {
    vec![GetCountriesTool::spec(), GetCountryTool::spec()]
}

/// Tool registry - immutable, ordered set of descriptors.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Arc<Vec<ToolDescriptor>>,
}

impl ToolRegistry {
    /// Build the registry with a `reqwest`-backed invoker.
    pub fn from_config(config: &Config) -> Result<Self> {
        let invoker = ReqwestInvoker::new(
            Duration::from_secs(config.api.timeout_secs),
            &config.api.user_agent,
        )?;
        Self::with_invoker(config, Arc::new(invoker))
    }

    /// Build the registry around an explicit invoker.
    pub fn with_invoker(config: &Config, invoker: Arc<dyn Invoker>) -> Result<Self> {
        let mut context = ApiContext::new(config.api.base_url.clone(), invoker);
        if let Some(key) = &config.credentials.api_key {
            let auth = HeaderAuth::new(&config.credentials.auth_scheme, key)?;
            context = context.with_authorizer(Arc::new(auth));
        }

        Self::from_specs(all_tool_specs(), config, Arc::new(context))
    }

    /// Build from explicit specs, applying per-tool enablement.
    pub fn from_specs(
        specs: Vec<ToolSpec>,
        config: &Config,
        context: Arc<ApiContext>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut tools = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.name) {
                return Err(Error::config(format!("duplicate tool name: {}", spec.name)));
            }
            if !config.api.is_enabled(spec.name) {
                info!("Tool {} disabled by configuration", spec.name);
                continue;
            }
            tools.push(ToolDescriptor::new(spec, context.clone()));
        }

        info!(
            "Registered {} tool(s) against {}",
            tools.len(),
            config.api.base_url
        );

        Ok(Self {
            tools: Arc::new(tools),
        })
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    /// The registered descriptors.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Dispatch a tool call by name.
    ///
    /// An unknown name is a protocol error and is returned as `Err`; every
    /// tool-level failure is inside the `CallToolResult`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        cancel: &CancellationToken,
    ) -> std::result::Result<CallToolResult, String> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(format!("Unknown tool: {}", name));
        };

        Ok(tool.invoke(&arguments, cancel).await.into())
    }
}
