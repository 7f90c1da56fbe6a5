//! Wire models of the Countries API.
//!
//! Field order here is the key order of the pretty-printed tool output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary record returned by `GET /v1/countries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    /// The ISO country-code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_key: Option<String>,

    /// The localized name of the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The calling code prefix used for phone numbers in this country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
}

/// Full record returned by `GET /v1/countries/{countryKey}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// The ISO country-code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_key: Option<String>,

    /// The localized name of the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The calling code prefix used for phone numbers in this country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,

    /// List of states/provinces in this country
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<State>,
}

/// A state, province or territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// The state code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_key: Option<String>,

    /// The localized name of the state, province, or territory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Error body returned with a status >= 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
    /// Short identifier for the error, suitable for client code
    pub code: String,

    /// Human-readable, English description of the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The specific fields, and the errors found with their contents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ErrorField>,

    /// Stack trace; only present in development and test environments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<String>,

    /// Seconds to wait before retrying; only present on rate-limit errors
    #[serde(
        rename = "retryAfterSec",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_after_sec: Option<u64>,
}

/// One field-level problem inside an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorField {
    /// JSONPath referring to the field within the submitted data
    pub path: String,

    /// Short identifier for the error
    pub code: String,

    /// Human-readable, English description of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
