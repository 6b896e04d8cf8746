//! Fan-out core
//!
//! A [`Core`] owns a fixed list of bindings, each an encoder, the gate that
//! decides whether it sees an entry, and the sinks it writes to. The list is
//! frozen at construction, so reading it on the hot path takes no lock.

use super::{
    encoder::Encoder, error::Result, level_gate::LevelGate, log_entry::LogEntry,
    log_level::LogLevel, sink::Sink,
};
use chrono::Local;
use std::sync::Arc;

pub struct Binding {
    encoder: Box<dyn Encoder>,
    gate: Arc<LevelGate>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl Binding {
    pub fn new(encoder: Box<dyn Encoder>, gate: Arc<LevelGate>, sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            encoder,
            gate,
            sinks,
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.gate.enabled(level)
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }
}

#[derive(Default)]
pub struct Core {
    bindings: Vec<Binding>,
}

impl Core {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Whether any binding accepts `level`
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.bindings.iter().any(|binding| binding.enabled(level))
    }

    /// Encode and write `entry` through every binding whose gate accepts it.
    ///
    /// Each sink is written independently; an encode or write failure is
    /// reported to `error_output` and the remaining sinks are still written.
    /// Returns the number of failures.
    pub fn write(&self, entry: &LogEntry, error_output: &dyn Sink) -> usize {
        let mut failures = 0;
        let mut buf = Vec::with_capacity(256);

        for binding in self.bindings.iter().filter(|b| b.enabled(entry.level)) {
            buf.clear();
            if let Err(e) = binding.encoder.encode(entry, &mut buf) {
                report(error_output, "encode", &e);
                failures += 1;
                continue;
            }

            for sink in &binding.sinks {
                if let Err(e) = sink.write(&buf) {
                    report(error_output, "write", &e);
                    failures += 1;
                }
            }
        }

        failures
    }

    /// Sync every distinct sink once.
    ///
    /// Every sink is attempted; the first failure is returned.
    pub fn sync(&self) -> Result<()> {
        let mut seen: Vec<&Arc<dyn Sink>> = Vec::new();
        let mut first_error = None;

        for sink in self.bindings.iter().flat_map(|b| b.sinks.iter()) {
            if seen.iter().any(|other| Arc::ptr_eq(other, sink)) {
                continue;
            }
            seen.push(sink);

            if let Err(e) = sink.sync() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Report a failure of the logging machinery itself to `error_output`
pub(crate) fn report(error_output: &dyn Sink, context: &str, detail: &dyn std::fmt::Display) {
    let line = format!(
        "{} {} error: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f %z"),
        context,
        detail
    );
    let _ = error_output.write(line.as_bytes());
    let _ = error_output.sync();
}
