//! Encoder trait for turning entries into bytes

use super::{encoder_config::EncoderConfig, error::Result, log_entry::LogEntry};
use crate::encoders::{ConsoleEncoder, JsonEncoder};
use std::sync::Arc;

pub trait Encoder: Send + Sync {
    /// Append the complete rendering of `entry`, line ending included, to `buf`
    fn encode(&self, entry: &LogEntry, buf: &mut Vec<u8>) -> Result<()>;
    fn name(&self) -> &str;
}

/// The built-in encoder kinds selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderKind {
    /// Human-readable, tab-separated text
    Console,
    /// One JSON object per line
    Json,
}

impl EncoderKind {
    /// Resolve a configuration tag; unknown kinds resolve to `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "console" => Some(EncoderKind::Console),
            "json" => Some(EncoderKind::Json),
            _ => None,
        }
    }

    pub fn build(self, config: Arc<EncoderConfig>) -> Box<dyn Encoder> {
        match self {
            EncoderKind::Console => Box::new(ConsoleEncoder::new(config)),
            EncoderKind::Json => Box::new(JsonEncoder::new(config)),
        }
    }
}
