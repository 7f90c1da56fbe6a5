//! Domains module containing business logic organized by bounded contexts.
//!
//! `tools` talks to the remote API; `resources` serves read-only documents
//! describing this server and the shapes the API returns.

pub mod resources;
pub mod tools;
