//! Main logger implementation

use super::{
    caller::{CallerResolver, TrackedCaller},
    checked_entry::{Action, CheckedEntry},
    config::LogConfig,
    encoder::{Encoder, EncoderKind},
    encoder_config::EncoderConfig,
    error::{LoggerError, Result},
    fields::Fields,
    level_gate::LevelGate,
    log_entry::LogEntry,
    log_level::LogLevel,
    sink::Sink,
    tee::{self, Binding, Core},
};
use crate::sinks::{self, StderrSink};
use chrono::Local;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Called to end the process after a `Fatal` entry has been written
pub type TerminateHook = Arc<dyn Fn() + Send + Sync>;

/// Field key of the per-entry correlation id
pub const CORRELATION_ID_KEY: &str = "correlation_id";

pub struct Logger {
    name: String,
    app_name: String,
    development: bool,
    core: Core,
    level: Arc<LevelGate>,
    error_output: Arc<dyn Sink>,
    caller_resolver: Arc<dyn CallerResolver>,
    caller_level: Option<LogLevel>,
    stack_level: Option<LogLevel>,
    correlation_ids: bool,
    on_terminate: TerminateHook,
}

impl Logger {
    /// Build the logger described by `config`.
    ///
    /// Every requested encoder kind is bound to the full set of configured
    /// outputs. Unknown encoder kinds and format tags fall back to defaults;
    /// the only failure is an output that cannot be opened.
    pub fn new(app_name: impl Into<String>, config: &LogConfig) -> Result<Self> {
        let app_name = app_name.into();
        let outputs = config.resolve_outputs(&app_name, Local::now());
        let sinks = sinks::open(&outputs)?;

        let mut builder = Logger::builder(app_name)
            .development(config.dev)
            .min_level(config.threshold())
            .encoder_config(config.encoder_config())
            .add_caller(config.caller)
            .correlation_ids(config.correlation_id);
        if let Some(level) = config.stacktrace_threshold() {
            builder = builder.stack_trace_at(level);
        }
        for kind in config.encoder_kinds() {
            builder = builder.bind(kind, sinks.clone());
        }

        Ok(builder.build())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use teelog::prelude::*;
    ///
    /// let buffer = MemorySink::new();
    /// let logger = Logger::builder("billing")
    ///     .min_level(LogLevel::Warn)
    ///     .bind_sink(EncoderKind::Console, buffer.clone())
    ///     .build();
    ///
    /// logger.info("skipped");
    /// logger.warn("kept");
    /// assert_eq!(buffer.lines().len(), 1);
    /// ```
    #[must_use]
    pub fn builder(app_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(app_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn is_development(&self) -> bool {
        self.development
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    /// Current threshold of the shared gate
    pub fn level(&self) -> LogLevel {
        self.level.level()
    }

    /// Change the threshold of every binding that uses the shared gate
    pub fn set_level(&self, level: LogLevel) {
        self.level.set_level(level);
    }

    /// Whether an entry at `level` would be written anywhere
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    /// Run the gate and enrichment for one call without writing.
    ///
    /// `message` is only rendered when the entry will be written or the level
    /// escalates. [`CheckedEntry::write`] returns the pending [`Action`]
    /// instead of executing it.
    #[track_caller]
    pub fn check(&self, level: LogLevel, message: impl fmt::Display) -> CheckedEntry<'_> {
        self.check_at(level, &message, Fields::new(), Location::caller())
    }

    #[track_caller]
    pub fn check_with_fields(
        &self,
        level: LogLevel,
        message: impl fmt::Display,
        fields: Fields,
    ) -> CheckedEntry<'_> {
        self.check_at(level, &message, fields, Location::caller())
    }

    fn check_at(
        &self,
        level: LogLevel,
        message: &dyn fmt::Display,
        fields: Fields,
        site: &'static Location<'static>,
    ) -> CheckedEntry<'_> {
        let enabled = self.core.enabled(level);
        if !enabled && !Action::escalates(level, self.development) {
            return CheckedEntry::noop(&self.core, self.error_output.as_ref());
        }

        let message = message.to_string();
        let action = Action::for_level(level, self.development, &message);
        if !enabled {
            return CheckedEntry::new(&self.core, self.error_output.as_ref(), None, action);
        }

        let mut entry = LogEntry::new(self.name.as_str(), level, message).with_fields(fields);
        if self.correlation_ids {
            entry
                .fields
                .add_field(CORRELATION_ID_KEY, format!("{:032x}", rand::random::<u128>()));
        }

        if self.caller_level.is_some_and(|threshold| level >= threshold) {
            match self.caller_resolver.resolve(site) {
                Some(caller) => entry.caller = Some(caller),
                None => tee::report(
                    self.error_output.as_ref(),
                    "check",
                    &LoggerError::CallerUnavailable,
                ),
            }
        }

        if self.stack_level.is_some_and(|threshold| level >= threshold) {
            entry.stack = Some(Backtrace::force_capture().to_string());
        }

        CheckedEntry::new(&self.core, self.error_output.as_ref(), Some(entry), action)
    }

    /// Carry out an escalation returned by [`CheckedEntry::write`]
    #[track_caller]
    pub fn escalate(&self, action: Action) {
        match action {
            Action::None => {}
            Action::Abort(message) => panic!("{}", message),
            Action::Terminate => (self.on_terminate)(),
        }
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let checked = self.check_at(level, &message, Fields::new(), Location::caller());
        if !checked.is_noop() {
            self.escalate(checked.write());
        }
    }

    /// Log with structured fields
    #[track_caller]
    pub fn log_with_fields(&self, level: LogLevel, message: impl fmt::Display, fields: Fields) {
        let checked = self.check_at(level, &message, fields, Location::caller());
        if !checked.is_noop() {
            self.escalate(checked.write());
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Logs at `DevPanic`, then panics if the logger is in development mode
    #[inline]
    #[track_caller]
    pub fn dev_panic(&self, message: impl fmt::Display) {
        self.log(LogLevel::DevPanic, message);
    }

    /// Logs at `Panic`, then panics with the message
    #[inline]
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) {
        self.log(LogLevel::Panic, message);
    }

    /// Logs at `Fatal`, syncs every sink, then terminates the process
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }

    /// Flush every sink; the first failure is returned after all were tried
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.core.sync() {
            tee::report(self.error_output.as_ref(), "sync", &e);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("app_name", &self.app_name)
            .field("development", &self.development)
            .field("level", &self.level.level())
            .field("bindings", &self.core.bindings().len())
            .finish()
    }
}

enum BindingEncoder {
    Kind(EncoderKind),
    Custom(Box<dyn Encoder>),
}

struct PendingBinding {
    encoder: BindingEncoder,
    sinks: Vec<Arc<dyn Sink>>,
    gate: Option<Arc<LevelGate>>,
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use teelog::prelude::*;
///
/// let console = MemorySink::new();
/// let structured = MemorySink::new();
/// let logger = Logger::builder("api")
///     .min_level(LogLevel::Debug)
///     .bind_sink(EncoderKind::Console, console.clone())
///     .bind_sink(EncoderKind::Json, structured.clone())
///     .build();
///
/// logger.error("boom");
/// assert_eq!(console.lines().len(), 1);
/// assert_eq!(structured.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    app_name: String,
    name: Option<String>,
    development: bool,
    min_level: LogLevel,
    encoder_config: EncoderConfig,
    bindings: Vec<PendingBinding>,
    error_output: Option<Arc<dyn Sink>>,
    caller_resolver: Option<Arc<dyn CallerResolver>>,
    caller_level: Option<LogLevel>,
    stack_level: Option<LogLevel>,
    correlation_ids: bool,
    on_terminate: Option<TerminateHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            name: None,
            development: false,
            min_level: LogLevel::Info,
            encoder_config: EncoderConfig::default(),
            bindings: Vec::new(),
            error_output: None,
            caller_resolver: None,
            caller_level: Some(LogLevel::Debug),
            stack_level: None,
            correlation_ids: false,
            on_terminate: None,
        }
    }

    /// Logger name written with every entry; defaults to the application name
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Threshold of the shared gate
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.encoder_config = config;
        self
    }

    /// Bind an encoder kind to `sinks` behind the shared gate
    #[must_use = "builder methods return a new value"]
    pub fn bind(mut self, kind: EncoderKind, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.bindings.push(PendingBinding {
            encoder: BindingEncoder::Kind(kind),
            sinks,
            gate: None,
        });
        self
    }

    /// Bind an encoder kind to a single sink behind the shared gate
    #[must_use = "builder methods return a new value"]
    pub fn bind_sink<S: Sink + 'static>(self, kind: EncoderKind, sink: S) -> Self {
        let sink: Arc<dyn Sink> = Arc::new(sink);
        self.bind(kind, vec![sink])
    }

    /// Bind an encoder kind behind its own gate
    #[must_use = "builder methods return a new value"]
    pub fn bind_with_gate(
        mut self,
        kind: EncoderKind,
        sinks: Vec<Arc<dyn Sink>>,
        gate: Arc<LevelGate>,
    ) -> Self {
        self.bindings.push(PendingBinding {
            encoder: BindingEncoder::Kind(kind),
            sinks,
            gate: Some(gate),
        });
        self
    }

    /// Bind a custom encoder behind the shared gate
    #[must_use = "builder methods return a new value"]
    pub fn bind_encoder(mut self, encoder: Box<dyn Encoder>, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.bindings.push(PendingBinding {
            encoder: BindingEncoder::Custom(encoder),
            sinks,
            gate: None,
        });
        self
    }

    /// Where failures of the logger itself are reported; defaults to stderr
    #[must_use = "builder methods return a new value"]
    pub fn error_output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.error_output = Some(Arc::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn caller_resolver<R: CallerResolver + 'static>(mut self, resolver: R) -> Self {
        self.caller_resolver = Some(Arc::new(resolver));
        self
    }

    /// Record call sites for every level (`true`) or none (`false`)
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, enabled: bool) -> Self {
        self.caller_level = enabled.then_some(LogLevel::Debug);
        self
    }

    /// Record call sites from `level` upwards
    #[must_use = "builder methods return a new value"]
    pub fn caller_at(mut self, level: LogLevel) -> Self {
        self.caller_level = Some(level);
        self
    }

    /// Attach a stack trace to entries from `level` upwards
    #[must_use = "builder methods return a new value"]
    pub fn stack_trace_at(mut self, level: LogLevel) -> Self {
        self.stack_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn correlation_ids(mut self, enabled: bool) -> Self {
        self.correlation_ids = enabled;
        self
    }

    /// Replace the default `std::process::exit(1)` run after `Fatal` entries
    #[must_use = "builder methods return a new value"]
    pub fn on_terminate(mut self, hook: TerminateHook) -> Self {
        self.on_terminate = Some(hook);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let level = Arc::new(LevelGate::new(self.min_level));
        let encoder_config = Arc::new(self.encoder_config);

        let bindings = self
            .bindings
            .into_iter()
            .map(|pending| {
                let encoder = match pending.encoder {
                    BindingEncoder::Kind(kind) => kind.build(Arc::clone(&encoder_config)),
                    BindingEncoder::Custom(encoder) => encoder,
                };
                let gate = pending.gate.unwrap_or_else(|| Arc::clone(&level));
                Binding::new(encoder, gate, pending.sinks)
            })
            .collect();

        Logger {
            name: self.name.unwrap_or_else(|| self.app_name.clone()),
            app_name: self.app_name,
            development: self.development,
            core: Core::new(bindings),
            level,
            error_output: self
                .error_output
                .unwrap_or_else(|| Arc::new(StderrSink::new())),
            caller_resolver: self
                .caller_resolver
                .unwrap_or_else(|| Arc::new(TrackedCaller)),
            caller_level: self.caller_level,
            stack_level: self.stack_level,
            correlation_ids: self.correlation_ids,
            on_terminate: self
                .on_terminate
                .unwrap_or_else(|| Arc::new(|| std::process::exit(1))),
        }
    }
}
