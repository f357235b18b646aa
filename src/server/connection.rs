// Connection handling module
// Serves a single TCP connection over HTTP/1.1

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;
use crate::routing::RouteTable;

/// Serve one connection in a spawned task.
///
/// The connection is wrapped in `TokioIo` and driven by hyper's HTTP/1.1
/// state machine; every request on it goes through
/// `handler::handle_request`. There is no connection timeout and no limit
/// on concurrent connections.
pub fn serve(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    routes: Arc<RouteTable>,
    cfg: Arc<Config>,
) {
    tokio::spawn(async move {
        if cfg.logging.access_log {
            logger::log_connection_accepted(&peer_addr);
        }

        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let routes = Arc::clone(&routes);
                let cfg = Arc::clone(&cfg);
                async move { handler::handle_request(req, peer_addr, &routes, &cfg).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
