//! Request handler module
//!
//! Parses incoming requests, accumulates their bodies and dispatches to
//! the endpoint handlers through the route table.

pub mod echo;
pub mod router;

pub use echo::RequestData;
pub use router::handle_request;
