use std::sync::Arc;

use rigwatch_core::reading::TelemetryStore;

use crate::config::ServerConfig;
use crate::sink::TelemetrySink;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory telemetry snapshot.
    pub store: Arc<TelemetryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Post-ingestion observability sink.
    pub sink: Arc<dyn TelemetrySink>,
}
