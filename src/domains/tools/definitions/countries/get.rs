//! `get_v1_country` - fetch one country with its states.

use crate::domains::tools::adapter::{Endpoint, ParamKind, ParameterSpec, ToolSpec, decode_as};
use crate::domains::tools::models::Country;

/// Single country lookup tool.
#[derive(Debug, Clone)]
pub struct GetCountryTool;

impl GetCountryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_v1_country";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieves country and summary state information for provided countryKey";

    pub const PATH: &'static str = "/v1/countries/{countryKey}";

    pub fn params() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::path("countryKey", ParamKind::String, "The country key"),
            ParameterSpec::query(
                "marketId",
                ParamKind::String,
                "MarketId in which the request is being made, and for which responses should be localized",
            )
            .required(),
            ParameterSpec::query(
                "sort",
                ParamKind::String,
                "The term to sort the result country states by.",
            ),
            ParameterSpec::query(
                "order",
                ParamKind::String,
                "The direction to sort the result country states by.",
            ),
        ]
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            endpoint: Endpoint::get(Self::PATH),
            params: Self::params(),
            decode: decode_as::<Country>,
        }
    }
}
