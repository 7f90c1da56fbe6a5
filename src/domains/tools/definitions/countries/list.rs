//! `get_v1_countries` - list country summaries.

use crate::domains::tools::adapter::{Endpoint, ParamKind, ParameterSpec, ToolSpec, decode_as};
use crate::domains::tools::models::CountrySummary;

/// Country summary listing tool.
#[derive(Debug, Clone)]
pub struct GetCountriesTool;

impl GetCountriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_v1_countries";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieves summary country information for the provided marketId and filters";

    pub const PATH: &'static str = "/v1/countries";

    /// Parameters in the order they are placed on the query string.
    pub fn params() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::query(
                "marketId",
                ParamKind::String,
                "MarketId in which the request is being made, and for which responses should be localized",
            )
            .required(),
            ParameterSpec::query(
                "regionTypeId",
                ParamKind::Number,
                "Restrict countries to this region type; required if regionName is supplied",
            ),
            ParameterSpec::query(
                "regionName",
                ParamKind::String,
                "Restrict countries to this region name; required if regionTypeId is supplied",
            ),
            ParameterSpec::query(
                "sort",
                ParamKind::String,
                "The term to sort the result countries by.",
            ),
            ParameterSpec::query(
                "order",
                ParamKind::String,
                "The direction to sort the result countries by.",
            ),
        ]
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            endpoint: Endpoint::get(Self::PATH),
            params: Self::params(),
            decode: decode_as::<Vec<CountrySummary>>,
        }
    }
}
