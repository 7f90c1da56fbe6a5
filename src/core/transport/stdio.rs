//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. Stdout carries protocol
//! messages only; all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin or the process receives Ctrl-C.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "Ready - serving {} tool(s) via stdin/stdout",
            server.registry().tool_names().len()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::startup("STDIO", e))?;

        let cancel = service.cancellation_token();
        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::serve("STDIO", e))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, closing STDIO session");
                cancel.cancel();
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
