//! HTTP protocol layer module
//!
//! Query string parsing and response building, decoupled from routing and
//! business logic.

pub mod query;
pub mod response;

pub use query::{parse_query, QueryValue};
pub use response::{build_404_response, build_json_response};
