//! Core logger types and traits

pub mod caller;
pub mod checked_entry;
pub mod config;
pub mod encoder;
pub mod encoder_config;
pub mod error;
pub mod fields;
pub mod global;
pub mod level_gate;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod sink;
pub mod tee;
pub mod timestamp;

pub use caller::{CallerResolver, TrackedCaller};
pub use checked_entry::{Action, CheckedEntry};
pub use config::{LogConfig, DEFAULT_OUTPUT};
pub use encoder::{Encoder, EncoderKind};
pub use encoder_config::{CallerEncoding, DurationEncoding, EncoderConfig, FieldKeys, LevelEncoding};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use global::{global, init};
pub use level_gate::LevelGate;
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, TerminateHook, CORRELATION_ID_KEY};
pub use message::Concat;
pub use sink::Sink;
pub use tee::{Binding, Core};
pub use timestamp::{TimeEncoding, TimeValue};
