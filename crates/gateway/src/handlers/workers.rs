//! Worker management handlers.
//!
//! These are stubs: there is no worker registry behind them. List returns a
//! fixed two-element collection, create/update echo the submitted payload
//! and delete echoes the submitted identifier. Referenced identifiers are
//! never checked for existence.

use axum::{body::Bytes, extract::Query, Json};
use serde::{Deserialize, Serialize};

use super::{check_required, parse_json_body};
use crate::error::AppResult;

/// A deployable edge script, as reported by the (mocked) registry.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub created_on: String,
}

/// Response for the worker list.
#[derive(Debug, Serialize)]
pub struct WorkerListResponse {
    pub success: bool,
    pub result: Vec<Worker>,
}

/// Response for worker create/update, echoing the submitted payload.
#[derive(Debug, Serialize)]
pub struct WorkerMutationResponse {
    pub success: bool,
    pub result: serde_json::Value,
    pub message: String,
}

/// Response for worker deletion.
#[derive(Debug, Serialize)]
pub struct WorkerDeleteResponse {
    pub success: bool,
    pub id: String,
    pub message: String,
}

/// Query parameters for worker deletion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDeleteQuery {
    pub worker_id: Option<String>,
}

/// List workers.
///
/// GET /api/workers
pub async fn list() -> Json<WorkerListResponse> {
    Json(WorkerListResponse {
        success: true,
        result: vec![
            Worker {
                id: "worker1".to_string(),
                name: "api-proxy".to_string(),
                created_on: "2024-01-01T00:00:00Z".to_string(),
            },
            Worker {
                id: "worker2".to_string(),
                name: "auth-worker".to_string(),
                created_on: "2024-01-02T00:00:00Z".to_string(),
            },
        ],
    })
}

/// Create a worker (echo only).
///
/// POST /api/workers
pub async fn create(bytes: Bytes) -> AppResult<Json<WorkerMutationResponse>> {
    let body = parse_json_body(&bytes)?;
    Ok(Json(WorkerMutationResponse {
        success: true,
        result: body,
        message: "Worker created successfully".to_string(),
    }))
}

/// Update a worker (echo only).
///
/// PUT /api/workers
pub async fn update(bytes: Bytes) -> AppResult<Json<WorkerMutationResponse>> {
    let body = parse_json_body(&bytes)?;
    Ok(Json(WorkerMutationResponse {
        success: true,
        result: body,
        message: "Worker updated successfully".to_string(),
    }))
}

/// Delete a worker (echo only).
///
/// DELETE /api/workers?workerId=X
pub async fn delete(Query(query): Query<WorkerDeleteQuery>) -> AppResult<Json<WorkerDeleteResponse>> {
    check_required(&[(
        "workerId",
        query.worker_id.as_deref().is_some_and(|s| !s.is_empty()),
    )])?;

    Ok(Json(WorkerDeleteResponse {
        success: true,
        id: query.worker_id.unwrap_or_default(),
        message: "Worker deleted successfully".to_string(),
    }))
}
