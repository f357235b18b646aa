//! Request dispatch module
//!
//! Entry point for HTTP request processing: URI parsing, body
//! accumulation, route lookup and handler invocation.

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::config::Config;
use crate::handler::echo::{self, RequestData};
use crate::http::query::parse_query;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{normalize_path, Route, RouteTable};

/// Main entry point for HTTP request handling.
///
/// The URI is split into a normalized path and a decoded query map, the
/// body is accumulated until end-of-stream, and the matching handler runs
/// exactly once. The method is recorded for the access log but plays no
/// part in routing; a body that fails mid-stream degrades to the empty
/// string rather than an error response.
pub async fn handle_request<B: Body>(
    req: Request<B>,
    peer_addr: SocketAddr,
    routes: &RouteTable,
    cfg: &Config,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().as_str().to_ascii_lowercase();
    let uri = req.uri().clone();
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    // Buffer the whole body; the handler fires only after end-of-stream.
    // Invalid UTF-8 decodes with replacement characters.
    let body = match req.into_body().collect().await {
        Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).into_owned(),
        Err(_) => String::new(),
    };

    let data = RequestData {
        query_string: parse_query(uri.query().unwrap_or("")),
        body,
    };

    let response = match routes.resolve(normalize_path(uri.path())) {
        Route::Hello => echo::hello(&data),
        Route::NotFound => echo::not_found(&data),
    };

    if cfg.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method, uri.path().to_string());
        entry.query = uri.query().map(ToString::to_string);
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.referer = referer;
        entry.user_agent = user_agent;
        logger::log_access(&entry, &cfg.logging.format);
    }

    Ok(response)
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
