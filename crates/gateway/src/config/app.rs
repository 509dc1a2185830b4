//! Application configuration for the Edge Admin Gateway.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `EDGE_ADMIN_`:
/// - `EDGE_ADMIN_HOST`: Server bind address (default: "0.0.0.0")
/// - `EDGE_ADMIN_PORT`: Server port (default: 8787)
/// - `EDGE_ADMIN_DEBUG`: Enable debug mode (default: false)
/// - `EDGE_ADMIN_SERVER_NAME`: Server name for identification
/// - `EDGE_ADMIN_CLOUDFLARE_API_BASE`: Cloudflare API base URL
/// - `EDGE_ADMIN_UPSTREAM_TIMEOUT_SECS`: Upstream request timeout in seconds
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Server name for identification
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Base URL of the Cloudflare v4 REST API
    #[serde(default = "default_cloudflare_api_base")]
    pub cloudflare_api_base: String,

    /// Timeout for upstream Cloudflare calls, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_server_name() -> String {
    "edge-admin-gateway".to_string()
}

fn default_cloudflare_api_base() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `EDGE_ADMIN_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("EDGE_ADMIN_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            server_name: default_server_name(),
            cloudflare_api_base: default_cloudflare_api_base(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}
