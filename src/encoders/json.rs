//! JSON encoder for structured logging
//!
//! Writes each log entry as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.

use crate::core::{Encoder, EncoderConfig, LogEntry, LoggerError, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct JsonEncoder {
    config: Arc<EncoderConfig>,
}

impl JsonEncoder {
    pub fn new(config: Arc<EncoderConfig>) -> Self {
        Self { config }
    }

    /// Build the JSON object for `entry`
    pub fn to_value(&self, entry: &LogEntry) -> Value {
        let keys = &self.config.keys;
        let mut object = Map::new();

        if !keys.level.is_empty() {
            object.insert(
                keys.level.clone(),
                Value::String(self.config.level.render(entry.level, 0)),
            );
        }
        if !keys.time.is_empty() {
            object.insert(
                keys.time.clone(),
                self.config.time.encode(&entry.timestamp).to_json_value(),
            );
        }
        if !keys.name.is_empty() && !entry.logger_name.is_empty() {
            object.insert(keys.name.clone(), Value::String(entry.logger_name.clone()));
        }
        if let Some(caller) = entry.caller.as_ref().filter(|_| !keys.caller.is_empty()) {
            object.insert(
                keys.caller.clone(),
                Value::String(self.config.caller.render(caller)),
            );
        }
        if !keys.message.is_empty() {
            object.insert(keys.message.clone(), Value::String(entry.message.clone()));
        }

        // Fixed keys win over context fields of the same name
        for (key, value) in entry.fields.iter() {
            object
                .entry(key.to_string())
                .or_insert_with(|| value.to_json_value(self.config.duration));
        }

        if let Some(stack) = entry.stack.as_ref().filter(|_| !keys.stacktrace.is_empty()) {
            object.insert(keys.stacktrace.clone(), Value::String(stack.clone()));
        }

        Value::Object(object)
    }
}

fn encode_error(encoder: &str, err: serde_json::Error) -> LoggerError {
    LoggerError::encoder(encoder, err.to_string())
}

impl Encoder for JsonEncoder {
    fn encode(&self, entry: &LogEntry, buf: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(&mut *buf, &self.to_value(entry))
            .map_err(|e| encode_error(self.name(), e))?;
        buf.push(b'\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
