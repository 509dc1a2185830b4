//! Worker deployment handler.
//!
//! A stub: no compilation, validation or upload happens. The handler
//! presence-checks the name and source and answers with a synthesized
//! `workers.dev` URL.

use axum::{body::Bytes, Json};
use serde::Serialize;

use super::{check_required, parse_json_body, str_field};
use crate::error::AppResult;

/// Response for a (mocked) deployment.
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
}

/// Deploy a worker (mocked).
///
/// POST /api/deploy-worker with body `{workerName, code}`. Credential
/// fields are accepted and ignored.
pub async fn deploy(bytes: Bytes) -> AppResult<Json<DeployResponse>> {
    let body = parse_json_body(&bytes)?;
    check_required(&[
        ("workerName", str_field(&body, "workerName").is_some()),
        ("code", str_field(&body, "code").is_some()),
    ])?;

    let name = str_field(&body, "workerName").unwrap_or_default();
    tracing::info!(worker = name, "Mock-deploying worker");

    Ok(Json(DeployResponse {
        success: true,
        message: format!("Worker {name} deployed successfully"),
        url: format!("https://{name}.workers.dev"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deploy_synthesizes_workers_dev_url() {
        let payload = br#"{"workerName":"foo","code":"addEventListener('fetch', () => {})"}"#;
        let Json(response) = deploy(Bytes::from_static(payload)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.url, "https://foo.workers.dev");
        assert_eq!(response.message, "Worker foo deployed successfully");
    }

    #[tokio::test]
    async fn test_deploy_requires_name_and_code() {
        let err = deploy(Bytes::from_static(b"{}")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameters: workerName, code"
        );
    }

    #[tokio::test]
    async fn test_deploy_rejects_malformed_body() {
        let err = deploy(Bytes::from_static(b"not json")).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON body"));
    }
}
