//! Checked entries and post-write escalation
//!
//! A [`CheckedEntry`] is the result of running the severity gate and
//! enrichment for one call. It carries the entry to write, if any, and the
//! [`Action`] its level demands once every sink has been written.

use super::{
    log_entry::LogEntry,
    log_level::LogLevel,
    sink::Sink,
    tee::{self, Core},
};

/// What must happen after an entry has been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing; control returns to the caller
    None,
    /// Panic the calling thread with this message
    Abort(String),
    /// Terminate the process
    Terminate,
}

impl Action {
    /// Whether `level` escalates at all, given the development flag
    #[inline]
    pub fn escalates(level: LogLevel, development: bool) -> bool {
        match level {
            LogLevel::Panic | LogLevel::Fatal => true,
            LogLevel::DevPanic => development,
            _ => false,
        }
    }

    /// The action for `level`; `message` is only consulted for aborts
    pub fn for_level(level: LogLevel, development: bool, message: &str) -> Self {
        match level {
            LogLevel::Fatal => Action::Terminate,
            LogLevel::Panic => Action::Abort(message.to_string()),
            LogLevel::DevPanic if development => Action::Abort(message.to_string()),
            _ => Action::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

pub struct CheckedEntry<'a> {
    core: &'a Core,
    error_output: &'a dyn Sink,
    entry: Option<LogEntry>,
    action: Action,
}

impl<'a> CheckedEntry<'a> {
    pub(crate) fn noop(core: &'a Core, error_output: &'a dyn Sink) -> Self {
        Self {
            core,
            error_output,
            entry: None,
            action: Action::None,
        }
    }

    pub(crate) fn new(
        core: &'a Core,
        error_output: &'a dyn Sink,
        entry: Option<LogEntry>,
        action: Action,
    ) -> Self {
        Self {
            core,
            error_output,
            entry,
            action,
        }
    }

    /// True when the call needs neither a write nor an escalation
    pub fn is_noop(&self) -> bool {
        self.entry.is_none() && self.action.is_none()
    }

    pub fn entry(&self) -> Option<&LogEntry> {
        self.entry.as_ref()
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Write the entry through the core and hand back the pending action.
    ///
    /// When the action escalates, every sink is synced before returning so
    /// the entry is durable before the caller aborts or terminates.
    pub fn write(self) -> Action {
        if let Some(entry) = &self.entry {
            self.core.write(entry, self.error_output);
        }
        if !self.action.is_none() {
            if let Err(e) = self.core.sync() {
                tee::report(self.error_output, "sync", &e);
            }
        }
        self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalation_table() {
        assert_eq!(Action::for_level(LogLevel::Error, true, "x"), Action::None);
        assert_eq!(
            Action::for_level(LogLevel::Panic, false, "x"),
            Action::Abort("x".to_string())
        );
        assert_eq!(Action::for_level(LogLevel::Fatal, false, "x"), Action::Terminate);
        assert_eq!(
            Action::for_level(LogLevel::DevPanic, true, "x"),
            Action::Abort("x".to_string())
        );
        assert_eq!(Action::for_level(LogLevel::DevPanic, false, "x"), Action::None);
    }

    #[test]
    fn test_escalates_matches_for_level() {
        for level in LogLevel::ALL {
            for dev in [true, false] {
                assert_eq!(
                    Action::escalates(level, dev),
                    !Action::for_level(level, dev, "m").is_none()
                );
            }
        }
    }
}
