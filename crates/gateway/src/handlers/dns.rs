//! DNS record handlers.
//!
//! Each handler presence-checks the client-supplied credentials, forwards
//! the call to Cloudflare and returns the upstream JSON byte-identical.
//! GET/DELETE carry their parameters in the query string, POST/PUT in a
//! JSON body, matching the dashboard's calls.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

use super::{check_required, json_passthrough, parse_json_body, str_field};
use crate::cloudflare::Credentials;
use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for listing and deleting records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    pub zone_id: Option<String>,
    pub cf_id: Option<String>,
    pub api_key: Option<String>,
    pub record_id: Option<String>,
}

fn supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// List DNS records for a zone.
///
/// GET /api/dns-records?zoneId&cfId&apiKey
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Response> {
    check_required(&[
        ("zoneId", supplied(&query.zone_id)),
        ("cfId", supplied(&query.cf_id)),
        ("apiKey", supplied(&query.api_key)),
    ])?;

    let creds = Credentials {
        email: query.cf_id.unwrap_or_default(),
        api_key: query.api_key.unwrap_or_default(),
    };
    let zone_id = query.zone_id.unwrap_or_default();

    let body = state.cloudflare.list_records(&creds, &zone_id).await?;
    Ok(json_passthrough(body))
}

/// Create a DNS record.
///
/// POST /api/dns-records with body `{zoneId, cfId, apiKey, record}`
pub async fn create_record(State(state): State<AppState>, bytes: Bytes) -> AppResult<Response> {
    let body = parse_json_body(&bytes)?;
    check_required(&[
        ("zoneId", str_field(&body, "zoneId").is_some()),
        ("cfId", str_field(&body, "cfId").is_some()),
        ("apiKey", str_field(&body, "apiKey").is_some()),
        ("record", body.get("record").is_some_and(|v| !v.is_null())),
    ])?;

    let creds = Credentials {
        email: str_field(&body, "cfId").unwrap_or_default().to_string(),
        api_key: str_field(&body, "apiKey").unwrap_or_default().to_string(),
    };
    let zone_id = str_field(&body, "zoneId").unwrap_or_default().to_string();
    let record = body.get("record").cloned().unwrap_or_default();

    let body = state
        .cloudflare
        .create_record(&creds, &zone_id, &record)
        .await?;
    Ok(json_passthrough(body))
}

/// Replace a DNS record.
///
/// PUT /api/dns-records with body `{zoneId, cfId, apiKey, recordId, record}`
pub async fn update_record(State(state): State<AppState>, bytes: Bytes) -> AppResult<Response> {
    let body = parse_json_body(&bytes)?;
    check_required(&[
        ("zoneId", str_field(&body, "zoneId").is_some()),
        ("cfId", str_field(&body, "cfId").is_some()),
        ("apiKey", str_field(&body, "apiKey").is_some()),
        ("recordId", str_field(&body, "recordId").is_some()),
        ("record", body.get("record").is_some_and(|v| !v.is_null())),
    ])?;

    let creds = Credentials {
        email: str_field(&body, "cfId").unwrap_or_default().to_string(),
        api_key: str_field(&body, "apiKey").unwrap_or_default().to_string(),
    };
    let zone_id = str_field(&body, "zoneId").unwrap_or_default().to_string();
    let record_id = str_field(&body, "recordId").unwrap_or_default().to_string();
    let record = body.get("record").cloned().unwrap_or_default();

    let body = state
        .cloudflare
        .update_record(&creds, &zone_id, &record_id, &record)
        .await?;
    Ok(json_passthrough(body))
}

/// Delete a DNS record.
///
/// DELETE /api/dns-records?zoneId&cfId&apiKey&recordId
pub async fn delete_record(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Response> {
    check_required(&[
        ("zoneId", supplied(&query.zone_id)),
        ("cfId", supplied(&query.cf_id)),
        ("apiKey", supplied(&query.api_key)),
        ("recordId", supplied(&query.record_id)),
    ])?;

    let creds = Credentials {
        email: query.cf_id.unwrap_or_default(),
        api_key: query.api_key.unwrap_or_default(),
    };
    let zone_id = query.zone_id.unwrap_or_default();
    let record_id = query.record_id.unwrap_or_default();

    let body = state
        .cloudflare
        .delete_record(&creds, &zone_id, &record_id)
        .await?;
    Ok(json_passthrough(body))
}
