//! Lenient scalar coercion for noisy record fields.
//!
//! Numeric fields that fail to parse fall back to a default instead of
//! raising; this leniency is part of the import contract and must not be
//! tightened into hard failures.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Coerce a field to a float. Non-numeric or missing values yield 0.0.
pub fn float(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce a field to an integer, truncating fractional values. Returns
/// `None` when the value is missing or not int-like.
pub fn int(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Coerce a field to a display string. Numbers are rendered; anything else
/// yields an empty string.
pub fn display_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerce a field to a timestamp, reading it as integer Unix seconds with a
/// fallback of 0. Out-of-range values also fall back to the epoch.
pub fn timestamp(value: Option<&Value>) -> DateTime<Utc> {
    let secs = int(value).unwrap_or(0);
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
