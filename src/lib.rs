//! Countries MCP Server Library
//!
//! Exposes the endpoints of the Countries REST API as Model Context Protocol
//! tools. Each tool validates its untyped arguments, issues one HTTP request
//! and reports the outcome as a tool result.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the REST adapter and the per-endpoint tool definitions
//!   - **resources**: server info and response schemas readable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use countries_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     println!("{:?}", server.registry().tool_names());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
