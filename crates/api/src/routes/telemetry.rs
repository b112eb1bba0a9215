//! Route definitions for the telemetry endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::telemetry;
use crate::state::AppState;

/// Telemetry routes, mounted at the root (the device firmware posts to the
/// bare paths, so there is no version prefix).
///
/// ```text
/// POST /sensor-data    -> ingest
/// GET  /get-sensor     -> query
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sensor-data", post(telemetry::ingest))
        .route("/get-sensor", get(telemetry::query))
}
