//! Logger configuration object
//!
//! The validated settings a [`Logger`](super::Logger) is built from. Every
//! field has a default, so a partial document deserializes into a complete
//! configuration, and values the logger does not recognize degrade to
//! defaults at construction instead of failing.

use super::{
    encoder::EncoderKind, encoder_config::EncoderConfig, error::Result, log_level::LogLevel,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Destination name replaced by a timestamped per-application log file
pub const DEFAULT_OUTPUT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Development mode; `DevPanic` entries panic when set
    pub dev: bool,
    /// Threshold: `debug`, `info`, `warn` or `error`
    pub level: String,
    /// Encoder kinds to bind: `console`, `json`
    pub encoder: Vec<String>,
    /// Rendering choices keyed by `time`, `level`, `duration`, `caller`
    pub encode: HashMap<String, String>,
    /// Output key names keyed by `name`, `time`, `level`, `caller`, `message`, `stacktrace`
    pub key: HashMap<String, String>,
    /// Destinations: `stderr`, `stdout`, `default` or a file path
    pub outputs: Vec<String>,
    /// Record the call site of every entry
    pub caller: bool,
    /// Lowest level that gets a stack trace; absent or unknown disables traces
    pub stacktrace_level: Option<String>,
    /// Attach a random `correlation_id` field to every entry
    pub correlation_id: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        let table = |pairs: &[(&str, &str)]| -> HashMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        Self {
            dev: true,
            level: "debug".to_string(),
            encoder: vec!["console".to_string()],
            encode: table(&[
                ("time", "local"),
                ("level", "capital"),
                ("duration", "string"),
                ("caller", "short"),
            ]),
            key: table(&[
                ("name", "logger"),
                ("time", "time"),
                ("level", "level"),
                ("caller", "caller"),
                ("message", "msg"),
                ("stacktrace", "stacktrace"),
            ]),
            outputs: vec!["stderr".to_string()],
            caller: true,
            stacktrace_level: None,
            correlation_id: false,
        }
    }
}

impl LogConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_threshold(&self.level)
    }

    /// Requested encoder kinds in order, unknown and repeated kinds dropped
    pub fn encoder_kinds(&self) -> Vec<EncoderKind> {
        let mut kinds = Vec::with_capacity(self.encoder.len());
        for kind in self.encoder.iter().filter_map(|tag| EncoderKind::from_tag(tag)) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig::resolve(&self.encode, &self.key)
    }

    pub fn stacktrace_threshold(&self) -> Option<LogLevel> {
        self.stacktrace_level
            .as_deref()
            .and_then(|tag| tag.parse().ok())
    }

    /// Destinations with [`DEFAULT_OUTPUT`] replaced by
    /// `{app}_{YYYY-MM-DD_HH-MM-SS}.log`
    pub fn resolve_outputs(&self, app: &str, now: DateTime<Local>) -> Vec<String> {
        self.outputs
            .iter()
            .map(|output| {
                if output == DEFAULT_OUTPUT {
                    format!("{}_{}.log", app, now.format("%Y-%m-%d_%H-%M-%S"))
                } else {
                    output.clone()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerEncoding, DurationEncoding, LevelEncoding, TimeEncoding};
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert!(config.dev);
        assert_eq!(config.threshold(), LogLevel::Debug);
        assert_eq!(config.encoder_kinds(), vec![EncoderKind::Console]);
        assert_eq!(config.outputs, vec!["stderr"]);

        let encoder = config.encoder_config();
        assert_eq!(encoder.time, TimeEncoding::Local);
        assert_eq!(encoder.level, LevelEncoding::Capital);
        assert_eq!(encoder.duration, DurationEncoding::String);
        assert_eq!(encoder.caller, CallerEncoding::Short);
        assert_eq!(encoder.keys.message, "msg");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            LogConfig::from_json_str(r#"{"level":"warn","encoder":["json","console","json"]}"#)
                .unwrap();
        assert_eq!(config.threshold(), LogLevel::Warn);
        assert_eq!(
            config.encoder_kinds(),
            vec![EncoderKind::Json, EncoderKind::Console]
        );
        assert!(config.dev);
        assert_eq!(config.outputs, vec!["stderr"]);
    }

    #[test]
    fn test_unknown_values_degrade() {
        let config = LogConfig::from_json_str(
            r#"{"level":"loud","encoder":["xml"],"stacktrace_level":"sometimes"}"#,
        )
        .unwrap();
        assert_eq!(config.threshold(), LogLevel::Info);
        assert!(config.encoder_kinds().is_empty());
        assert_eq!(config.stacktrace_threshold(), None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(LogConfig::from_json_str("{level:").is_err());
    }

    #[test]
    fn test_resolve_outputs() {
        let config = LogConfig {
            outputs: vec![
                "stderr".to_string(),
                DEFAULT_OUTPUT.to_string(),
                "/tmp/x.log".to_string(),
            ],
            ..LogConfig::default()
        };
        let now = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).single().unwrap();
        assert_eq!(
            config.resolve_outputs("billing", now),
            vec!["stderr", "billing_2025-03-04_05-06-07.log", "/tmp/x.log"]
        );
    }
}
