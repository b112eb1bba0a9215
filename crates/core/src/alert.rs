//! Alert records produced by threshold evaluation.

use serde::Serialize;

/// A single triggered alert with its troubleshooting suggestion.
///
/// Produced fresh by every evaluation pass and returned to the caller;
/// alerts are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Short human-readable alert message.
    pub alert: String,
    /// Troubleshooting direction for the operator.
    pub suggestion: String,
}
