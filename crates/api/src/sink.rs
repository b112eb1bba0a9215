//! Post-ingestion observability sink.

use rigwatch_core::alert::Alert;
use rigwatch_core::reading::Reading;

/// Receives the merged snapshot and triggered alerts after every ingestion.
///
/// Purely observational: ingestion correctness never depends on what a sink
/// does, and tests run with [`NoopSink`].
pub trait TelemetrySink: Send + Sync {
    fn record(&self, reading: &Reading, alerts: &[Alert]);
}

/// Default sink: structured log lines via `tracing`, one snapshot line per
/// ingestion plus one line per triggered alert.
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn record(&self, reading: &Reading, alerts: &[Alert]) {
        tracing::info!(
            temperature_c = reading.temperature,
            weight_kg = reading.weight,
            distance_cm = reading.distance,
            voltage_v = reading.voltage,
            sound_level_db = reading.sound_level,
            vibration = reading.vibration,
            "Sensor data received"
        );

        if alerts.is_empty() {
            tracing::info!("All sensors are within normal range");
        } else {
            for alert in alerts {
                tracing::warn!(suggestion = %alert.suggestion, "{}", alert.alert);
            }
        }
    }
}

/// Sink that discards everything.
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn record(&self, _reading: &Reading, _alerts: &[Alert]) {}
}
