//! Endpoint handlers
//!
//! Every handler takes the same `RequestData` regardless of whether it
//! uses it, so dispatch stays uniform across routes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::collections::HashMap;

use crate::http;
use crate::http::QueryValue;

/// Per-request data handed to handlers: decoded query map plus the
/// accumulated body text. Dropped once the response is built.
pub struct RequestData {
    pub query_string: HashMap<String, QueryValue>,
    pub body: String,
}

/// Echo the query parameters and body back as JSON with a greeting.
///
/// Input is echoed as-is; nothing is validated, and an empty request
/// yields an empty query object and empty body string.
pub fn hello(data: &RequestData) -> Response<Full<Bytes>> {
    let payload = serde_json::json!({
        "responseMessage": {
            "greeting": "Welcome!",
            "queryString": data.query_string,
            "body": data.body,
        }
    });

    http::build_json_response(&payload)
}

/// Fallback handler: 404 with an empty body
pub fn not_found(_data: &RequestData) -> Response<Full<Bytes>> {
    http::build_404_response()
}
