//! Cloudflare REST API client for DNS record management.
//!
//! The gateway is a pure pass-through: credentials arrive with each request
//! and are forwarded verbatim in the `X-Auth-Email` / `X-Auth-Key` headers,
//! and successful upstream bodies are handed back to the caller unmodified.
//! A single attempt is made per request; there is no retry or caching.

use reqwest::Method;

use crate::error::AppError;

/// Client-held Cloudflare credentials, forwarded on every upstream call.
///
/// Only presence is validated by the handlers; authenticity is left to
/// Cloudflare, whose 4xx/5xx answers are surfaced to the caller.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email, sent as `X-Auth-Email`.
    pub email: String,
    /// API key, sent as `X-Auth-Key`.
    pub api_key: String,
}

/// HTTP client for the Cloudflare v4 REST API.
#[derive(Clone)]
pub struct CloudflareClient {
    base_url: String,
    http: reqwest::Client,
}

impl CloudflareClient {
    /// Create a client against `base_url` (normally
    /// `https://api.cloudflare.com/client/v4`), with the given per-request
    /// timeout bounding each upstream call.
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        Self {
            base_url,
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List DNS records for a zone.
    /// GET /zones/{zone_id}/dns_records
    pub async fn list_records(
        &self,
        creds: &Credentials,
        zone_id: &str,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!(
            "{}/zones/{}/dns_records",
            self.base_url.trim_end_matches('/'),
            zone_id
        );
        self.send(Method::GET, &url, creds, None, "fetch DNS records")
            .await
    }

    /// Create a DNS record in a zone.
    /// POST /zones/{zone_id}/dns_records
    pub async fn create_record(
        &self,
        creds: &Credentials,
        zone_id: &str,
        record: &serde_json::Value,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!(
            "{}/zones/{}/dns_records",
            self.base_url.trim_end_matches('/'),
            zone_id
        );
        self.send(Method::POST, &url, creds, Some(record), "create DNS record")
            .await
    }

    /// Replace a DNS record.
    /// PUT /zones/{zone_id}/dns_records/{record_id}
    pub async fn update_record(
        &self,
        creds: &Credentials,
        zone_id: &str,
        record_id: &str,
        record: &serde_json::Value,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url.trim_end_matches('/'),
            zone_id,
            record_id
        );
        self.send(Method::PUT, &url, creds, Some(record), "update DNS record")
            .await
    }

    /// Delete a DNS record.
    /// DELETE /zones/{zone_id}/dns_records/{record_id}
    pub async fn delete_record(
        &self,
        creds: &Credentials,
        zone_id: &str,
        record_id: &str,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url.trim_end_matches('/'),
            zone_id,
            record_id
        );
        self.send(Method::DELETE, &url, creds, None, "delete DNS record")
            .await
    }

    /// Perform a single upstream call and return the raw response body.
    ///
    /// Non-success statuses become [`AppError::Upstream`] carrying the
    /// upstream status code and reason phrase; transport failures become
    /// [`AppError::UpstreamTransport`]. Success bodies are returned as raw
    /// bytes so the handler can forward them byte-identical.
    async fn send(
        &self,
        method: Method,
        url: &str,
        creds: &Credentials,
        body: Option<&serde_json::Value>,
        context: &'static str,
    ) -> Result<Vec<u8>, AppError> {
        tracing::debug!(%method, url, context, "Proxying request to Cloudflare");

        let mut req = self
            .http
            .request(method, url)
            .header("X-Auth-Email", &creds.email)
            .header("X-Auth-Key", &creds.api_key)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await.map_err(|e| AppError::UpstreamTransport {
            context,
            message: e.to_string(),
        })?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                context,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let bytes = res.bytes().await.map_err(|e| AppError::UpstreamTransport {
            context,
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
