// Configuration module entry point
// Builds typed settings from defaults and environment overrides

mod types;

use std::net::SocketAddr;

pub use types::{Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from environment variables with built-in defaults.
    ///
    /// Variables use the `HELLO` prefix with `__` as the nesting separator,
    /// e.g. `HELLO_SERVER__PORT=8080` or `HELLO_LOGGING__ACCESS_LOG=false`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("HELLO").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", true)?
            .set_default("logging.format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
