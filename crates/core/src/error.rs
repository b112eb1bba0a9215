#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A known telemetry field carried a non-numeric JSON value while the
    /// strict decode policy was active.
    #[error("Invalid value for field '{field}': expected a number, got {value}")]
    InvalidFieldType { field: &'static str, value: String },
}
