//! Encoder configuration
//!
//! Output key names and the four independent rendering choices (level, time,
//! duration, caller). Resolution from configuration tags never fails: an
//! unrecognized tag selects that choice's default variant.

use super::log_entry::Caller;
use super::log_level::LogLevel;
use super::timestamp::TimeEncoding;
use colored::Colorize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Level rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelEncoding {
    /// `INFO`
    Capital,
    /// `INFO` wrapped in the level's ANSI color
    CapitalColor,
    /// `info` wrapped in the level's ANSI color
    LowercaseColor,
    /// `info`
    #[default]
    Lowercase,
}

impl LevelEncoding {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "capital" => LevelEncoding::Capital,
            "capitalColor" => LevelEncoding::CapitalColor,
            "color" => LevelEncoding::LowercaseColor,
            _ => LevelEncoding::Lowercase,
        }
    }

    pub fn is_capital(&self) -> bool {
        matches!(self, LevelEncoding::Capital | LevelEncoding::CapitalColor)
    }

    /// Render `level`, left-aligned to `width` characters (0 for no padding).
    ///
    /// Padding is applied inside the color codes so colored and plain output
    /// line up the same way. Color output honors `colored`'s environment
    /// controls (`NO_COLOR`, `CLICOLOR_FORCE`).
    pub fn render(&self, level: LogLevel, width: usize) -> String {
        let text = if self.is_capital() {
            level.to_str()
        } else {
            level.to_lowercase_str()
        };
        let padded = format!("{:<width$}", text, width = width);
        match self {
            LevelEncoding::CapitalColor | LevelEncoding::LowercaseColor => {
                padded.color(level.color_code()).to_string()
            }
            LevelEncoding::Capital | LevelEncoding::Lowercase => padded,
        }
    }
}

/// Duration rendering for duration-valued fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationEncoding {
    /// Human readable with unit suffix: `1.5s`, `250ms`, `1h2m3s`
    String,
    /// Integer nanoseconds
    Nanos,
    /// Fractional seconds
    #[default]
    Seconds,
}

impl DurationEncoding {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => DurationEncoding::String,
            "nanos" => DurationEncoding::Nanos,
            _ => DurationEncoding::Seconds,
        }
    }

    pub fn render(&self, duration: Duration) -> String {
        match self {
            DurationEncoding::String => human_duration(duration),
            DurationEncoding::Nanos => duration.as_nanos().to_string(),
            DurationEncoding::Seconds => duration.as_secs_f64().to_string(),
        }
    }

    pub fn to_json_value(&self, duration: Duration) -> serde_json::Value {
        match self {
            DurationEncoding::String => serde_json::Value::String(human_duration(duration)),
            DurationEncoding::Nanos => {
                let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
                serde_json::Value::Number(nanos.into())
            }
            DurationEncoding::Seconds => serde_json::Number::from_f64(duration.as_secs_f64())
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

fn human_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", nanos as f64 / 1_000.0);
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", nanos as f64 / 1_000_000.0);
    }

    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = (total % 60) as f64 + f64::from(duration.subsec_nanos()) / 1_000_000_000.0;
    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Caller rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallerEncoding {
    /// Full source path and line
    Full,
    /// File base name and line
    #[default]
    Short,
}

impl CallerEncoding {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "full" => CallerEncoding::Full,
            _ => CallerEncoding::Short,
        }
    }

    pub fn render(&self, caller: &Caller) -> String {
        match self {
            CallerEncoding::Full => caller.full_path(),
            CallerEncoding::Short => caller.trimmed_path(),
        }
    }
}

/// Output key for each semantic field. An empty key omits the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeys {
    pub name: String,
    pub time: String,
    pub level: String,
    pub caller: String,
    pub message: String,
    pub stacktrace: String,
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            name: "logger".to_string(),
            time: "time".to_string(),
            level: "level".to_string(),
            caller: "caller".to_string(),
            message: "msg".to_string(),
            stacktrace: "stacktrace".to_string(),
        }
    }
}

impl FieldKeys {
    /// Keys from a remapping table; semantic fields missing from the table
    /// get an empty key and are left out of the output.
    pub fn from_map(keys: &HashMap<String, String>) -> Self {
        let key = |name: &str| keys.get(name).cloned().unwrap_or_default();
        Self {
            name: key("name"),
            time: key("time"),
            level: key("level"),
            caller: key("caller"),
            message: key("message"),
            stacktrace: key("stacktrace"),
        }
    }
}

/// Immutable encoder settings shared by every encoder of a logger
///
/// # Examples
///
/// ```
/// use teelog::core::{EncoderConfig, LevelEncoding, TimeEncoding};
///
/// let config = EncoderConfig::new()
///     .with_level(LevelEncoding::Capital)
///     .with_time(TimeEncoding::Iso8601);
/// assert_eq!(config.keys.message, "msg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    pub keys: FieldKeys,
    pub level: LevelEncoding,
    pub time: TimeEncoding,
    pub duration: DurationEncoding,
    pub caller: CallerEncoding,
}

impl EncoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve from the `encode` and `key` tables of a configuration object
    pub fn resolve(encode: &HashMap<String, String>, keys: &HashMap<String, String>) -> Self {
        let tag = |name: &str| encode.get(name).map(String::as_str).unwrap_or_default();
        Self {
            keys: FieldKeys::from_map(keys),
            level: LevelEncoding::from_tag(tag("level")),
            time: TimeEncoding::from_tag(tag("time")),
            duration: DurationEncoding::from_tag(tag("duration")),
            caller: CallerEncoding::from_tag(tag("caller")),
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: FieldKeys) -> Self {
        self.keys = keys;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LevelEncoding) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: TimeEncoding) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DurationEncoding) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: CallerEncoding) -> Self {
        self.caller = caller;
        self
    }

    /// Wrap this config in an Arc for sharing across encoders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_level_rendering() {
        assert_eq!(LevelEncoding::Capital.render(LogLevel::Warn, 0), "WARN");
        assert_eq!(LevelEncoding::Capital.render(LogLevel::Warn, 5), "WARN ");
        assert_eq!(LevelEncoding::Lowercase.render(LogLevel::Error, 0), "error");
    }

    #[test]
    fn test_color_level_rendering() {
        colored::control::set_override(true);
        assert_eq!(
            LevelEncoding::CapitalColor.render(LogLevel::Info, 0),
            "\x1b[34mINFO\x1b[0m"
        );
        assert_eq!(
            LevelEncoding::LowercaseColor.render(LogLevel::Warn, 6),
            "\x1b[33mwarn  \x1b[0m"
        );

        colored::control::set_override(false);
        assert_eq!(LevelEncoding::CapitalColor.render(LogLevel::Error, 5), "ERROR");
        colored::control::unset_override();
    }

    #[test]
    fn test_human_durations() {
        assert_eq!(human_duration(Duration::ZERO), "0s");
        assert_eq!(human_duration(Duration::from_nanos(750)), "750ns");
        assert_eq!(human_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(human_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(human_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(human_duration(Duration::from_secs(120)), "2m0s");
        assert_eq!(human_duration(Duration::from_secs(3723)), "1h2m3s");
    }

    #[test]
    fn test_duration_rendering() {
        let d = Duration::from_millis(1500);
        assert_eq!(DurationEncoding::Nanos.render(d), "1500000000");
        assert_eq!(DurationEncoding::Seconds.render(d), "1.5");
        assert_eq!(DurationEncoding::String.render(d), "1.5s");
    }

    #[test]
    fn test_resolve_known_tags() {
        let config = EncoderConfig::resolve(
            &table(&[
                ("time", "local"),
                ("level", "capital"),
                ("duration", "string"),
                ("caller", "full"),
            ]),
            &table(&[("message", "message"), ("level", "severity")]),
        );
        assert_eq!(config.time, TimeEncoding::Local);
        assert_eq!(config.level, LevelEncoding::Capital);
        assert_eq!(config.duration, DurationEncoding::String);
        assert_eq!(config.caller, CallerEncoding::Full);
        assert_eq!(config.keys.message, "message");
        assert_eq!(config.keys.level, "severity");
        assert_eq!(config.keys.caller, "");
    }

    #[test]
    fn test_resolve_unknown_tags_fall_back() {
        let config = EncoderConfig::resolve(
            &table(&[
                ("time", "sundial"),
                ("level", "LOUD"),
                ("duration", "fortnights"),
                ("caller", "medium"),
            ]),
            &HashMap::new(),
        );
        assert_eq!(config.time, TimeEncoding::Epoch);
        assert_eq!(config.level, LevelEncoding::Lowercase);
        assert_eq!(config.duration, DurationEncoding::Seconds);
        assert_eq!(config.caller, CallerEncoding::Short);
    }
}
