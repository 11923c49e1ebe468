//! # Tunable Values
//!
//! Strongly typed current values held by a tunable collection, and their
//! JSON rendering for the read-only admin views.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

/// Units accepted in `<n>.<unit>` duration strings, largest first.
const DURATION_UNITS: [(&str, u64); 7] = [
    ("days", NANOS_PER_DAY),
    ("hours", NANOS_PER_HOUR),
    ("minutes", NANOS_PER_MINUTE),
    ("seconds", NANOS_PER_SECOND),
    ("milliseconds", NANOS_PER_MILLI),
    ("microseconds", NANOS_PER_MICRO),
    ("nanoseconds", 1),
];

/// A decoded tunable value
#[derive(Debug, Clone, PartialEq)]
pub enum TunableValue {
    String(String),
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Duration(Duration),
    /// Opaque structured value, produced by custom decoders
    Json(Value),
}

impl TunableValue {
    /// Render back to JSON. Durations render as `<n>.<unit>` strings.
    pub fn to_json(&self) -> Value {
        match self {
            TunableValue::String(s) => Value::String(s.clone()),
            TunableValue::Bool(b) => Value::Bool(*b),
            TunableValue::Int(i) => Value::from(*i),
            TunableValue::Long(l) => Value::from(*l),
            TunableValue::Float(f) => Value::from(f64::from(*f)),
            TunableValue::Double(d) => Value::from(*d),
            TunableValue::Duration(d) => Value::String(format_duration(*d)),
            TunableValue::Json(v) => v.clone(),
        }
    }
}

impl fmt::Display for TunableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunableValue::String(s) => write!(f, "{}", s),
            TunableValue::Duration(d) => write!(f, "{}", format_duration(*d)),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

/// Parse a `<n>.<unit>` duration such as `5.seconds` or `1.minute`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    let (count, unit) = trimmed
        .split_once('.')
        .ok_or_else(|| format!("expected <n>.<unit>, got {:?}", input))?;

    let count: u64 = count
        .parse()
        .map_err(|e| format!("invalid duration count {:?}: {}", count, e))?;

    let unit = unit.to_ascii_lowercase();
    let nanos_per_unit = DURATION_UNITS
        .iter()
        .find(|(plural, _)| unit == *plural || Some(unit.as_str()) == plural.strip_suffix('s'))
        .map(|(_, nanos)| *nanos)
        .ok_or_else(|| format!("unknown duration unit {:?}", unit))?;

    count
        .checked_mul(nanos_per_unit)
        .map(Duration::from_nanos)
        .ok_or_else(|| format!("duration {:?} overflows", input))
}

/// Format a duration using the largest unit that divides it evenly.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0.seconds".to_string();
    }

    for (unit, per) in DURATION_UNITS {
        let per = u128::from(per);
        if nanos % per == 0 {
            return format!("{}.{}", nanos / per, unit);
        }
    }

    format!("{}.nanoseconds", nanos)
}
