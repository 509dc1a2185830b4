//! Route table for the Edge Admin Gateway.
//!
//! A static (path, method) table: DNS records proxy Cloudflare, workers /
//! traffic / deploy are stubs, everything else falls back to the embedded
//! dashboard (or 404 under `/api/`).

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Wildcard CORS with a fixed method/header allow-list; the layer also
    // answers OPTIONS preflight requests itself.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/dns-records",
            get(handlers::dns::list_records)
                .post(handlers::dns::create_record)
                .put(handlers::dns::update_record)
                .delete(handlers::dns::delete_record),
        )
        .route(
            "/api/workers",
            get(handlers::workers::list)
                .post(handlers::workers::create)
                .put(handlers::workers::update)
                .delete(handlers::workers::delete),
        )
        .route("/api/traffic", get(handlers::traffic::query))
        .route("/api/deploy-worker", post(handlers::deploy::deploy))
        .fallback(handlers::dashboard::serve)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
