//! Resources domain module.
//!
//! Read-only resources that help a client use the tools: information about
//! this server and the JSON Schema of every response model the tools return.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceContent, ResourceEntry, ResourceService};
