//! Routing module
//!
//! Static path-to-handler table with normalized exact matching.

mod table;

pub use table::{normalize_path, Route, RouteTable};
