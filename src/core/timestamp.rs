//! Timestamp rendering
//!
//! Selects how the entry time is written: a bracketed local-time stamp, ISO
//! 8601, or a numeric epoch value in seconds, milliseconds or nanoseconds.

use chrono::{DateTime, Local, Utc};

/// Rendered timestamp, kept typed so structured encoders can emit numbers
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl TimeValue {
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            TimeValue::Text(s) => serde_json::Value::String(s.clone()),
            TimeValue::Int(i) => serde_json::Value::Number((*i).into()),
            TimeValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            TimeValue::Text(s) => s.clone(),
            TimeValue::Int(i) => i.to_string(),
            TimeValue::Float(f) => f.to_string(),
        }
    }
}

/// Time encoding options
///
/// # Examples
///
/// ```
/// use teelog::core::TimeEncoding;
///
/// assert_eq!(TimeEncoding::from_tag("millis"), TimeEncoding::EpochMillis);
/// assert_eq!(TimeEncoding::from_tag("rfc2822"), TimeEncoding::Epoch);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeEncoding {
    /// `[2025-01-08 10:30:45] ` in local time, trailing space included
    Local,

    /// `2025-01-08T10:30:45.123+0100` in local time
    Iso8601,

    /// Fractional milliseconds since the epoch: `1736332245123.456`
    EpochMillis,

    /// Integer nanoseconds since the epoch: `1736332245123456000`
    EpochNanos,

    /// Fractional seconds since the epoch: `1736332245.123456`
    #[default]
    Epoch,
}

impl TimeEncoding {
    /// Resolve a configuration tag; unknown tags fall back to [`TimeEncoding::Epoch`]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "local" => TimeEncoding::Local,
            "iso8601" | "ISO8601" => TimeEncoding::Iso8601,
            "millis" => TimeEncoding::EpochMillis,
            "nanos" => TimeEncoding::EpochNanos,
            _ => TimeEncoding::Epoch,
        }
    }

    #[must_use]
    pub fn encode(&self, datetime: &DateTime<Utc>) -> TimeValue {
        let nanos = datetime.timestamp_nanos_opt().unwrap_or_default();
        match self {
            TimeEncoding::Local => TimeValue::Text(
                datetime
                    .with_timezone(&Local)
                    .format("[%Y-%m-%d %H:%M:%S] ")
                    .to_string(),
            ),
            TimeEncoding::Iso8601 => TimeValue::Text(
                datetime
                    .with_timezone(&Local)
                    .format("%Y-%m-%dT%H:%M:%S%.3f%z")
                    .to_string(),
            ),
            TimeEncoding::EpochMillis => TimeValue::Float(nanos as f64 / 1_000_000.0),
            TimeEncoding::EpochNanos => TimeValue::Int(nanos),
            TimeEncoding::Epoch => TimeValue::Float(nanos as f64 / 1_000_000_000.0),
        }
    }

    /// Check if this is an epoch-based numeric encoding
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimeEncoding::EpochMillis | TimeEncoding::EpochNanos | TimeEncoding::Epoch
        )
    }
}
