//! Resource definitions.
//!
//! - `server_info`: server name, version, API base URL and registered tools
//! - `schemas`: JSON Schemas of the API response models

pub mod schemas;
pub mod server_info;

use super::service::ResourceContent;

/// Static metadata of a readable resource plus how to produce its body.
pub trait ResourceDefinition {
    const URI: &'static str;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const MIME_TYPE: &'static str;

    fn content() -> ResourceContent;
}

pub use schemas::{CountrySchemaResource, CountrySummarySchemaResource, ErrorSchemaResource};
pub use server_info::ServerInfoResource;
