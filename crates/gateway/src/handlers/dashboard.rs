//! Dashboard document handler.
//!
//! Any path that is not a known route and not under `/api/` gets the
//! embedded single-page dashboard; unknown `/api/` paths stay 404 so the
//! dashboard's own fetch calls never receive HTML.

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

/// The operator dashboard, embedded at compile time.
const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// Fallback handler: serve the dashboard for non-API paths.
pub async fn serve(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    } else {
        Html(DASHBOARD_HTML).into_response()
    }
}
