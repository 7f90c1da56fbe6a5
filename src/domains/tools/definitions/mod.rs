//! Tool definitions module.
//!
//! Each API-backed tool declares its endpoint, parameters and response
//! shape; the shared adapter does the rest.

pub mod countries;

pub use countries::{GetCountriesTool, GetCountryTool};
