//! Application state for the Edge Admin Gateway.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;

use crate::cloudflare::CloudflareClient;
use crate::config::AppConfig;

/// Shared application state.
///
/// Handlers are stateless pure functions of their request; the only shared
/// resources are the immutable configuration and the upstream HTTP client.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Cloudflare REST API client
    pub cloudflare: CloudflareClient,
}

impl AppState {
    /// Create a new application state from the loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        let cloudflare = CloudflareClient::new(
            config.cloudflare_api_base.clone(),
            std::time::Duration::from_secs(config.upstream_timeout_secs),
        );
        Self {
            config: Arc::new(config),
            cloudflare,
        }
    }
}
