//! The current telemetry snapshot and the store that owns it.
//!
//! A single [`Reading`] holds the most recent value of each sensor channel.
//! Devices push partial updates ([`ReadingPatch`]); a patch is decoded into
//! a [`ReadingUpdate`] under a declared [`DecodePolicy`] and then merged into
//! the store. Fields absent from a patch keep their previous value.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// The six-channel telemetry snapshot.
///
/// All channels start at zero on process start and are only ever changed by
/// an ingestion that names them. State is in-memory only and lost on
/// restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Load weight in kilograms.
    pub weight: f64,
    /// Proximity distance in centimetres.
    pub distance: f64,
    /// Supply voltage in volts.
    pub voltage: f64,
    /// Sound level in decibels.
    pub sound_level: f64,
    /// Unitless vibration magnitude.
    pub vibration: f64,
}

/// Deserialize a field so that an explicit JSON `null` is kept as
/// `Some(Value::Null)` instead of collapsing into "absent". The device
/// firmware does send nulls, and a null field must still be merged.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A partial telemetry payload as received on the wire.
///
/// Each field carries the raw JSON value so the numeric decode is an
/// explicit step (see [`ReadingPatch::decode`]) rather than a side effect of
/// deserialization. Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPatch {
    #[serde(default, deserialize_with = "present")]
    pub temperature: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub weight: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub distance: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub voltage: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub sound_level: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub vibration: Option<Value>,
}

/// A decoded partial update, ready to merge. `None` means "leave the stored
/// value alone".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingUpdate {
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub voltage: Option<f64>,
    pub sound_level: Option<f64>,
    pub vibration: Option<f64>,
}

/// How non-numeric JSON values in a patch are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Loose numeric coercion: numbers pass through, numeric strings parse
    /// (an empty or whitespace-only string reads as 0), booleans read as
    /// 0/1, `null` reads as 0, and anything else becomes NaN. NaN never
    /// satisfies a strict comparison, so an unparseable value can never
    /// trigger an alert.
    #[default]
    Loose,
    /// Reject any non-number value for a known field with
    /// [`CoreError::InvalidFieldType`]. Nothing is merged from a rejected
    /// payload.
    Strict,
}

impl std::str::FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loose" => Ok(Self::Loose),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown decode policy '{other}'")),
        }
    }
}

/// Loose numeric coercion of a raw JSON value (see [`DecodePolicy::Loose`]).
fn coerce(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

impl ReadingPatch {
    /// Decode the raw patch into a numeric update under the given policy.
    pub fn decode(&self, policy: DecodePolicy) -> Result<ReadingUpdate, CoreError> {
        Ok(ReadingUpdate {
            temperature: decode_field("temperature", &self.temperature, policy)?,
            weight: decode_field("weight", &self.weight, policy)?,
            distance: decode_field("distance", &self.distance, policy)?,
            voltage: decode_field("voltage", &self.voltage, policy)?,
            sound_level: decode_field("soundLevel", &self.sound_level, policy)?,
            vibration: decode_field("vibration", &self.vibration, policy)?,
        })
    }
}

fn decode_field(
    field: &'static str,
    raw: &Option<Value>,
    policy: DecodePolicy,
) -> Result<Option<f64>, CoreError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    match policy {
        DecodePolicy::Loose => Ok(Some(coerce(value))),
        DecodePolicy::Strict => match value.as_f64() {
            Some(n) => Ok(Some(n)),
            None => Err(CoreError::InvalidFieldType {
                field,
                value: value.to_string(),
            }),
        },
    }
}

/// Owns the current [`Reading`] and serializes access to it.
///
/// Handlers run concurrently, so merge-and-copy happens under a single write
/// lock acquisition: an evaluation always sees a fully-merged snapshot,
/// never a torn one. The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    reading: RwLock<Reading>,
}

impl TelemetryStore {
    /// Create a store with all channels at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an update and return the post-merge snapshot.
    pub fn ingest(&self, update: &ReadingUpdate) -> Reading {
        let mut reading = self
            .reading
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(v) = update.temperature {
            reading.temperature = v;
        }
        if let Some(v) = update.weight {
            reading.weight = v;
        }
        if let Some(v) = update.distance {
            reading.distance = v;
        }
        if let Some(v) = update.voltage {
            reading.voltage = v;
        }
        if let Some(v) = update.sound_level {
            reading.sound_level = v;
        }
        if let Some(v) = update.vibration {
            reading.vibration = v;
        }
        *reading
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Reading {
        *self.reading.read().unwrap_or_else(PoisonError::into_inner)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
