//! # teelog
//!
//! A leveled, structured logging core. Each call passes a severity gate,
//! is enriched with time, call site and optionally a stack trace, and is
//! fanned out through one or more encoders to one or more sinks.
//!
//! ## Features
//!
//! - **Zero-cost when filtered**: a call below the threshold is a single atomic load
//! - **Tee fan-out**: the same entry as console text and JSON, to any set of sinks
//! - **Escalating levels**: `Panic`, `Fatal` and development-only `DevPanic`
//!   act only after every sink has the entry
//! - **Permissive configuration**: unknown format tags fall back to defaults
//!
//! ```
//! use teelog::prelude::*;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::builder("app")
//!     .min_level(LogLevel::Debug)
//!     .bind_sink(EncoderKind::Json, buffer.clone())
//!     .build();
//!
//! teelog::info!(logger, "listening on {}", 8080);
//! assert!(buffer.contents().contains("listening on 8080"));
//! ```

pub mod core;
pub mod encoders;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Action, Caller, CallerEncoding, CallerResolver, CheckedEntry, Concat, DurationEncoding,
        Encoder, EncoderConfig, EncoderKind, FieldKeys, FieldValue, Fields, LevelEncoding,
        LevelGate, LogConfig, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, Result,
        Sink, TimeEncoding,
    };
    pub use crate::encoders::{ConsoleEncoder, JsonEncoder};
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink};
}

pub use crate::core::{
    global, init, Action, Caller, CallerEncoding, CallerResolver, CheckedEntry, Concat,
    DurationEncoding, Encoder, EncoderConfig, EncoderKind, FieldKeys, FieldValue, Fields,
    LevelEncoding, LevelGate, LogConfig, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    Result, Sink, TimeEncoding,
};
pub use encoders::{ConsoleEncoder, JsonEncoder};
pub use sinks::{FileSink, MemorySink, StderrSink, StdoutSink};
