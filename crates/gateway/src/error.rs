//! Error types for the Edge Admin Gateway.
//!
//! Every handler failure is funneled through [`AppError`], whose
//! `IntoResponse` impl produces the uniform JSON envelope
//! `{"success": false, "error": "<message>"}` expected by the dashboard.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors for the gateway.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more required request parameters are absent.
    #[error("{}", format_missing_params(.0))]
    MissingParams(Vec<String>),

    /// Request could not be understood (e.g. malformed JSON body).
    #[error("{0}")]
    BadRequest(String),

    /// Cloudflare answered with a non-success status.
    #[error("Failed to {context}: HTTP {status}: {reason}")]
    Upstream {
        /// Operation being attempted, e.g. "fetch DNS records".
        context: &'static str,
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream reason phrase.
        reason: String,
    },

    /// The upstream call failed before a response was received.
    #[error("Failed to {context}: {message}")]
    UpstreamTransport {
        /// Operation being attempted.
        context: &'static str,
        /// Transport error description.
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a `MissingParams` error from the subset of `required` names
    /// that were not supplied.
    pub fn missing(names: &[&str]) -> Self {
        AppError::MissingParams(names.iter().map(|s| (*s).to_string()).collect())
    }
}

fn format_missing_params(names: &[String]) -> String {
    if names.len() == 1 {
        format!("Missing required parameter: {}", names[0])
    } else {
        format!("Missing required parameters: {}", names.join(", "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParams(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream {
                context,
                status,
                reason,
            } => {
                tracing::warn!(context = %context, status = %status, reason = %reason, "Upstream request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamTransport { context, message } => {
                tracing::warn!(context = %context, error = %message, "Upstream transport error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
