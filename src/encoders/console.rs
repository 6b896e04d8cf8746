//! Console encoder implementation

use crate::core::{Encoder, EncoderConfig, LogEntry, Result};
use std::sync::Arc;

/// Width capital level names are padded to so messages line up
const LEVEL_WIDTH: usize = 5;

/// Tab-separated, human-readable lines:
/// `time  level  logger  caller  message  {fields}`, with the stack trace,
/// when captured, on the lines that follow.
pub struct ConsoleEncoder {
    config: Arc<EncoderConfig>,
}

impl ConsoleEncoder {
    pub fn new(config: Arc<EncoderConfig>) -> Self {
        Self { config }
    }

    /// Render `entry` as a string, without the trailing line ending
    pub fn format(&self, entry: &LogEntry) -> String {
        let keys = &self.config.keys;
        let mut columns: Vec<String> = Vec::with_capacity(6);

        if !keys.time.is_empty() {
            columns.push(self.config.time.encode(&entry.timestamp).to_text());
        }
        if !keys.level.is_empty() {
            let width = if self.config.level.is_capital() {
                LEVEL_WIDTH
            } else {
                0
            };
            columns.push(self.config.level.render(entry.level, width));
        }
        if !keys.name.is_empty() && !entry.logger_name.is_empty() {
            columns.push(entry.logger_name.clone());
        }
        if let Some(caller) = entry.caller.as_ref().filter(|_| !keys.caller.is_empty()) {
            columns.push(self.config.caller.render(caller));
        }
        if !keys.message.is_empty() {
            columns.push(escape_message(&entry.message));
        }
        if !entry.fields.is_empty() {
            let fields = entry.fields.to_json_map(self.config.duration);
            columns.push(serde_json::Value::Object(fields).to_string());
        }

        let mut line = columns.join("\t");
        if let Some(stack) = entry.stack.as_ref().filter(|_| !keys.stacktrace.is_empty()) {
            line.push('\n');
            line.push_str(stack.trim_end());
        }
        line
    }
}

/// Escape line breaks and tabs so one entry stays one line and the message
/// cannot forge extra columns or entries.
fn escape_message(message: &str) -> String {
    if !message.contains(['\n', '\r', '\t']) {
        return message.to_string();
    }
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl Encoder for ConsoleEncoder {
    fn encode(&self, entry: &LogEntry, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(self.format(entry).as_bytes());
        buf.push(b'\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Caller, CallerEncoding, DurationEncoding, FieldKeys, Fields, LevelEncoding, LogLevel,
        TimeEncoding,
    };
    use std::time::Duration;

    fn encoder(config: EncoderConfig) -> ConsoleEncoder {
        ConsoleEncoder::new(config.shared())
    }

    #[test]
    fn test_columns_in_order() {
        let enc = encoder(
            EncoderConfig::new()
                .with_level(LevelEncoding::Capital)
                .with_time(TimeEncoding::EpochNanos),
        );
        let entry = LogEntry::new("svc", LogLevel::Warn, "disk low".to_string())
            .with_caller(Caller::new("src/disk.rs", 7));

        let line = enc.format(&entry);
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 5);
        assert!(columns[0].parse::<i64>().is_ok());
        assert_eq!(columns[1], "WARN ");
        assert_eq!(columns[2], "svc");
        assert_eq!(columns[3], "disk.rs:7");
        assert_eq!(columns[4], "disk low");
    }

    #[test]
    fn test_full_caller_and_lowercase_level() {
        let enc = encoder(EncoderConfig::new().with_caller(CallerEncoding::Full));
        let entry = LogEntry::new("", LogLevel::Info, "hi".to_string())
            .with_caller(Caller::new("src/a/b.rs", 3));

        let line = enc.format(&entry);
        assert!(line.contains("\tinfo\t"));
        assert!(line.contains("src/a/b.rs:3"));
    }

    #[test]
    fn test_empty_keys_omit_columns() {
        let keys = FieldKeys {
            time: String::new(),
            name: String::new(),
            ..FieldKeys::default()
        };
        let enc = encoder(EncoderConfig::new().with_keys(keys));
        let entry = LogEntry::new("svc", LogLevel::Error, "boom".to_string());
        assert_eq!(enc.format(&entry), "error\tboom");
    }

    #[test]
    fn test_fields_render_as_json_with_duration_encoding() {
        let enc = encoder(EncoderConfig::new().with_duration(DurationEncoding::String));
        let entry = LogEntry::new("", LogLevel::Info, "done".to_string()).with_fields(
            Fields::new().with_field("elapsed", Duration::from_millis(250)),
        );
        assert!(enc.format(&entry).ends_with("done\t{\"elapsed\":\"250ms\"}"));
    }

    #[test]
    fn test_stack_follows_line() {
        let enc = encoder(EncoderConfig::new());
        let entry = LogEntry::new("", LogLevel::Fatal, "dead".to_string())
            .with_stack("frame 0\nframe 1\n".to_string());

        let mut buf = Vec::new();
        enc.encode(&entry, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("dead\nframe 0\nframe 1\n"));
    }

    #[test]
    fn test_message_control_characters_escaped() {
        let enc = encoder(EncoderConfig::new().with_keys(FieldKeys {
            time: String::new(),
            ..FieldKeys::default()
        }));
        let entry = LogEntry::new("", LogLevel::Info, "a\nERROR\tforged\r".to_string());
        assert_eq!(enc.format(&entry), "info\ta\\nERROR\\tforged\\r");
    }
}
