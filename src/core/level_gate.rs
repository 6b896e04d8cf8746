//! Severity gate
//!
//! Holds the minimum level an entry needs to be processed. The threshold is
//! an atomic so the hot path is a single relaxed load, and it can be changed
//! at runtime from any thread.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug)]
pub struct LevelGate {
    threshold: AtomicU8,
}

impl LevelGate {
    pub const fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
        }
    }

    /// Build a gate from a symbolic threshold (`debug|info|warn|error`).
    pub fn from_tag(tag: &str) -> Self {
        Self::new(LogLevel::from_threshold(tag))
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level as u8 >= self.threshold.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_enabled_at_and_above_threshold() {
        let gate = LevelGate::new(LogLevel::Warn);
        assert!(!gate.enabled(LogLevel::Debug));
        assert!(!gate.enabled(LogLevel::Info));
        assert!(gate.enabled(LogLevel::Warn));
        assert!(gate.enabled(LogLevel::Error));
        assert!(gate.enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_unknown_tag_defaults_to_info() {
        let gate = LevelGate::from_tag("chatty");
        assert_eq!(gate.level(), LogLevel::Info);
        assert!(!gate.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_set_level_visible_across_threads() {
        let gate = Arc::new(LevelGate::new(LogLevel::Error));
        let clone = Arc::clone(&gate);
        std::thread::spawn(move || clone.set_level(LogLevel::Debug))
            .join()
            .unwrap();
        assert!(gate.enabled(LogLevel::Debug));
    }
}
