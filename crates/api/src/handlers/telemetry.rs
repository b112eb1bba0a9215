//! Handlers for telemetry ingestion (device push) and the dashboard query.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use rigwatch_core::alert::Alert;
use rigwatch_core::reading::{Reading, ReadingPatch};
use rigwatch_core::rules;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for `POST /sensor-data`.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub message: &'static str,
    pub alerts: Vec<Alert>,
}

/// Response body for `GET /get-sensor`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub sensor_data: Reading,
    pub alerts: Vec<Alert>,
}

/// POST /sensor-data
///
/// Merge a partial telemetry payload into the store, evaluate the threshold
/// rules against the merged snapshot, and acknowledge with the triggered
/// alerts. With the strict decode policy a non-numeric field value rejects
/// the whole payload and nothing is merged.
pub async fn ingest(
    State(state): State<AppState>,
    Json(patch): Json<ReadingPatch>,
) -> AppResult<Json<IngestResponse>> {
    let update = patch.decode(state.config.decode_policy)?;
    let reading = state.store.ingest(&update);
    let alerts = rules::evaluate(&reading);

    state.sink.record(&reading, &alerts);

    Ok(Json(IngestResponse {
        message: "Sensor data received successfully!",
        alerts,
    }))
}

/// GET /get-sensor
///
/// Read-only: report the current snapshot and its alerts. Safe for the
/// dashboard to poll arbitrarily often.
pub async fn query(State(state): State<AppState>) -> Json<QueryResponse> {
    let reading = state.store.snapshot();
    let alerts = rules::evaluate(&reading);

    Json(QueryResponse {
        sensor_data: reading,
        alerts,
    })
}
