//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry severity.
///
/// The three levels above `Error` escalate after the entry is written:
/// `Panic` aborts the calling thread, `Fatal` terminates the process and
/// `DevPanic` panics only when the logger runs in development mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    DevPanic = 4,
    Panic = 5,
    Fatal = 6,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::DevPanic,
        LogLevel::Panic,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::DevPanic => "DPANIC",
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
        }
    }

    pub fn to_lowercase_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::DevPanic => "dpanic",
            LogLevel::Panic => "panic",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Resolve a threshold from its symbolic configuration name.
    ///
    /// Only `debug`, `info`, `warn` and `error` are thresholds; anything else
    /// yields `Info`.
    pub fn from_threshold(tag: &str) -> Self {
        match tag {
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            4 => LogLevel::DevPanic,
            5 => LogLevel::Panic,
            _ => LogLevel::Fatal,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Magenta,
            LogLevel::Info => Blue,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::DevPanic | LogLevel::Panic | LogLevel::Fatal => Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "DPANIC" | "DEVPANIC" => Ok(LogLevel::DevPanic),
            "PANIC" => Ok(LogLevel::Panic),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::DevPanic);
        assert!(LogLevel::DevPanic < LogLevel::Panic);
        assert!(LogLevel::Panic < LogLevel::Fatal);
    }

    #[test]
    fn test_threshold_tags() {
        assert_eq!(LogLevel::from_threshold("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_threshold("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_threshold("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_threshold("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_threshold("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::from_threshold("fatal"), LogLevel::Info);
        assert_eq!(LogLevel::from_threshold("WARN"), LogLevel::Info);
    }

    #[test]
    fn test_u8_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("dpanic".parse::<LogLevel>(), Ok(LogLevel::DevPanic));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
