//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Each registered descriptor becomes one
//! dynamic route; the MCP request's cancellation token is handed down to the
//! descriptor so an abandoned call drops its in-flight HTTP request.

use futures::FutureExt;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::CallToolResult;
use serde_json::Value;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            let descriptor = descriptor.clone();
            let tool = descriptor.to_tool();
            let route = ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
                let descriptor = descriptor.clone();
                let arguments = ctx
                    .arguments
                    .clone()
                    .map(Value::Object)
                    .unwrap_or_else(|| Value::Object(Default::default()));
                let cancel = ctx.request_context.ct.clone();
                async move {
                    let result = descriptor.invoke(&arguments, &cancel).await;
                    Ok::<CallToolResult, McpError>(result.into())
                }
                .boxed()
            });
            router.with_route(route)
        })
}
