//! Tools domain module.
//!
//! Each tool fronts one endpoint of the remote Countries REST API. Calls go
//! through the shared REST adapter, which turns untyped MCP arguments into an
//! HTTP request and the HTTP response back into a tool result.
//!
//! ## Architecture
//!
//! - `adapter/` - argument extraction, request building, invocation, decoding
//! - `definitions/` - per-endpoint tool specs (one file per tool)
//! - `models.rs` - wire models of the remote API
//! - `registry.rs` - immutable, ordered tool registry built from config
//! - `router.rs` - rmcp ToolRouter for the STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` returning a `ToolSpec`
//! 2. Add its response shape to `models.rs`
//! 3. List the spec in `registry::all_tool_specs()`
//!
//! The router and the HTTP dispatch pick it up from the registry.

pub mod adapter;
pub mod definitions;
mod error;
pub mod models;
mod registry;
pub mod router;

pub use adapter::{ToolDescriptor, ToolResult};
pub use error::ToolError;
pub use registry::{ToolRegistry, all_tool_specs};
pub use router::build_tool_router;
