//! Countries API tools.
//!
//! - `list`: country summaries for a market, optionally filtered by region
//! - `get`: one country with its states/provinces
//!
//! Both endpoints are public; an authorize hook is only applied when
//! credentials are configured.

pub mod get;
pub mod list;

pub use get::GetCountryTool;
pub use list::GetCountriesTool;
