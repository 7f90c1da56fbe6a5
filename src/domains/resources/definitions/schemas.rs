//! JSON Schema resources for the API response models.

use schemars::schema_for;

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::models::{ApiError, Country, CountrySummary};

/// Item schema of `get_v1_countries` results.
pub struct CountrySummarySchemaResource;

impl ResourceDefinition for CountrySummarySchemaResource {
    const URI: &'static str = "countries://schemas/country-summary";
    const NAME: &'static str = "CountrySummary schema";
    const DESCRIPTION: &'static str =
        "JSON Schema of one element of the array returned by get_v1_countries";
    const MIME_TYPE: &'static str = "application/schema+json";

    fn content() -> ResourceContent {
        ResourceContent::Schema(|| schema_for!(CountrySummary))
    }
}

/// Schema of `get_v1_country` results.
pub struct CountrySchemaResource;

impl ResourceDefinition for CountrySchemaResource {
    const URI: &'static str = "countries://schemas/country";
    const NAME: &'static str = "Country schema";
    const DESCRIPTION: &'static str = "JSON Schema of the record returned by get_v1_country";
    const MIME_TYPE: &'static str = "application/schema+json";

    fn content() -> ResourceContent {
        ResourceContent::Schema(|| schema_for!(Country))
    }
}

/// Schema of the error body embedded in API error results.
pub struct ErrorSchemaResource;

impl ResourceDefinition for ErrorSchemaResource {
    const URI: &'static str = "countries://schemas/error";
    const NAME: &'static str = "Error schema";
    const DESCRIPTION: &'static str =
        "JSON Schema of the error body the API returns with a status of 400 or above";
    const MIME_TYPE: &'static str = "application/schema+json";

    fn content() -> ResourceContent {
        ResourceContent::Schema(|| schema_for!(ApiError))
    }
}
