//! Threshold rules and the alert evaluator.
//!
//! Pure logic, no state. The rule table is fixed at compile time and the
//! evaluation order is part of the observable contract: clients (the device
//! firmware and the dashboard) rely on alerts arriving in table order, not
//! sorted by severity.

use crate::alert::Alert;
use crate::reading::Reading;

/// The telemetry channel a rule watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Temperature,
    SoundLevel,
    Weight,
    Distance,
    Voltage,
    Vibration,
}

impl Channel {
    fn value(self, reading: &Reading) -> f64 {
        match self {
            Channel::Temperature => reading.temperature,
            Channel::SoundLevel => reading.sound_level,
            Channel::Weight => reading.weight,
            Channel::Distance => reading.distance,
            Channel::Voltage => reading.voltage,
            Channel::Vibration => reading.vibration,
        }
    }
}

/// Which side of the threshold is hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Above,
    Below,
}

/// One row of the rule table: a channel, a hazardous direction, a threshold
/// constant, and the alert text emitted when the rule trips.
#[derive(Debug)]
struct ThresholdRule {
    channel: Channel,
    direction: Direction,
    threshold: f64,
    alert: &'static str,
    suggestion: &'static str,
}

impl ThresholdRule {
    /// Strict comparison: a value exactly on the threshold does not trip.
    /// NaN compares false in both directions, so an unparseable value never
    /// trips either.
    fn trips(&self, reading: &Reading) -> bool {
        let value = self.channel.value(reading);
        match self.direction {
            Direction::Above => value > self.threshold,
            Direction::Below => value < self.threshold,
        }
    }
}

/// The fixed rule table, in emission order. Distance is the one channel
/// where low is hazardous (proximity).
const RULES: [ThresholdRule; 6] = [
    ThresholdRule {
        channel: Channel::Temperature,
        direction: Direction::Above,
        threshold: 40.0,
        alert: "⚠ High Temperature Alert!",
        suggestion: "Check for overheating. Ensure proper ventilation and cooling systems are working.",
    },
    ThresholdRule {
        channel: Channel::SoundLevel,
        direction: Direction::Above,
        threshold: 50.0,
        alert: "🔊 High Sound Level Alert!",
        suggestion: "Check machinery for unusual noise. Lubricate moving parts and inspect for loose components.",
    },
    ThresholdRule {
        channel: Channel::Weight,
        direction: Direction::Above,
        threshold: 8.0,
        alert: "⚖ Overload Alert!",
        suggestion: "Reduce the load to prevent structural damage. Ensure load capacity is not exceeded.",
    },
    ThresholdRule {
        channel: Channel::Distance,
        direction: Direction::Below,
        threshold: 10.0,
        alert: "📏 Object Too Close!",
        suggestion: "Maintain a safe distance to avoid collisions. Check sensor alignment.",
    },
    ThresholdRule {
        channel: Channel::Voltage,
        direction: Direction::Above,
        threshold: 5.0,
        alert: "🔌 High Voltage Alert!",
        suggestion: "Check for power surges. Inspect power supply and voltage regulators.",
    },
    ThresholdRule {
        channel: Channel::Vibration,
        direction: Direction::Above,
        threshold: 700.0,
        alert: "📳 Abnormal Vibration Alert!",
        suggestion: "Inspect motor mounts, check for loose components, and balance rotating parts.",
    },
];

/// Evaluate every rule against the snapshot and return the triggered alerts
/// in table order.
pub fn evaluate(reading: &Reading) -> Vec<Alert> {
    RULES
        .iter()
        .filter(|rule| rule.trips(reading))
        .map(|rule| Alert {
            alert: rule.alert.to_string(),
            suggestion: rule.suggestion.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
