//! Traffic analytics handler.
//!
//! Synthesizes 30 daily entries shaped like the Cloudflare GraphQL
//! `httpRequests1dGroups` response. Credentials are presence-checked but
//! never forwarded; no upstream call is made.

use axum::{extract::Query, Json};
use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::check_required;
use crate::error::AppResult;

/// Query parameters for the traffic endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficQuery {
    pub zone_id: Option<String>,
    pub cf_id: Option<String>,
    pub api_key: Option<String>,
}

/// Daily counters, mirroring Cloudflare's analytics `sum` object.
#[derive(Debug, Serialize)]
pub struct TrafficSum {
    pub bytes: u64,
    pub requests: u64,
    #[serde(rename = "cachedBytes")]
    pub cached_bytes: u64,
    #[serde(rename = "cachedRequests")]
    pub cached_requests: u64,
}

#[derive(Debug, Serialize)]
pub struct TrafficDimensions {
    pub datetime: String,
}

/// One daily analytics group.
#[derive(Debug, Serialize)]
pub struct TrafficGroup {
    pub dimensions: TrafficDimensions,
    pub sum: TrafficSum,
}

#[derive(Debug, Serialize)]
pub struct TrafficZone {
    #[serde(rename = "httpRequests1dGroups")]
    pub http_requests_1d_groups: Vec<TrafficGroup>,
}

#[derive(Debug, Serialize)]
pub struct TrafficViewer {
    pub zones: Vec<TrafficZone>,
}

#[derive(Debug, Serialize)]
pub struct TrafficData {
    pub viewer: TrafficViewer,
}

#[derive(Debug, Serialize)]
pub struct TrafficResult {
    pub data: TrafficData,
}

/// Response envelope mimicking the Cloudflare analytics query response.
#[derive(Debug, Serialize)]
pub struct TrafficResponse {
    pub success: bool,
    pub result: TrafficResult,
}

/// Number of daily entries in the synthesized window.
const WINDOW_DAYS: u64 = 30;

/// Query traffic analytics for a zone (mocked).
///
/// GET /api/traffic?zoneId&cfId&apiKey
///
/// Always returns exactly 30 dated entries in ascending order ending at
/// the current UTC day, with randomized counters, regardless of whether
/// the supplied credentials are valid.
pub async fn query(Query(query): Query<TrafficQuery>) -> AppResult<Json<TrafficResponse>> {
    check_required(&[
        ("zoneId", supplied(&query.zone_id)),
        ("cfId", supplied(&query.cf_id)),
        ("apiKey", supplied(&query.api_key)),
    ])?;

    let groups = daily_groups(Utc::now().date_naive());
    Ok(Json(TrafficResponse {
        success: true,
        result: TrafficResult {
            data: TrafficData {
                viewer: TrafficViewer {
                    zones: vec![TrafficZone {
                        http_requests_1d_groups: groups,
                    }],
                },
            },
        },
    }))
}

fn supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Synthesize one entry per day for the 30-day window ending at `today`.
fn daily_groups(today: NaiveDate) -> Vec<TrafficGroup> {
    let mut rng = rand::thread_rng();
    (0..WINDOW_DAYS)
        .map(|i| {
            let date = today
                .checked_sub_days(Days::new(WINDOW_DAYS - 1 - i))
                .unwrap_or(today);
            TrafficGroup {
                dimensions: TrafficDimensions {
                    datetime: date.format("%Y-%m-%d").to_string(),
                },
                sum: TrafficSum {
                    bytes: rng.gen_range(0..1_000_000_000),
                    requests: rng.gen_range(0..100_000),
                    cached_bytes: rng.gen_range(0..500_000_000),
                    cached_requests: rng.gen_range(0..50_000),
                },
            }
        })
        .collect()
}
