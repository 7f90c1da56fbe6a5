//! REST adapter shared by all API-backed tools.
//!
//! One invocation runs through these stages:
//!
//! 1. `params` - validate the untyped arguments into a `ParamMap`
//! 2. `request` - build the HTTP request and apply the optional authorize hook
//! 3. `invoker` - send it (the only await point; cancellable)
//! 4. `decoder` - map status and body to a `ToolResult`
//!
//! `descriptor` composes the stages for one endpoint.

pub mod decoder;
pub mod descriptor;
pub mod invoker;
pub mod params;
pub mod request;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use decoder::{DecodeFn, RawBody, decode_as, parse_structured};
pub use descriptor::{ApiContext, ToolDescriptor, ToolSpec};
pub use invoker::{HttpResponse, Invoker, ReqwestInvoker};
pub use params::{ParamKind, ParamLocation, ParamMap, ParameterSpec, extract};
pub use request::{Authorize, Endpoint, HeaderAuth, HttpRequestSpec, build_request};
pub use result::ToolResult;
