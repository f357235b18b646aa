// Server module entry point
// Listener creation, accept loop and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;
use crate::routing::RouteTable;

/// Accept connections until Ctrl-C.
///
/// Each accepted connection is served in its own spawned task; the route
/// table and configuration are shared read-only behind `Arc`.
pub async fn run(
    listener: TcpListener,
    routes: Arc<RouteTable>,
    cfg: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::serve(stream, peer_addr, Arc::clone(&routes), Arc::clone(&cfg));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
