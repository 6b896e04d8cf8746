//! Log entry structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::Path;

/// Source location of the application call site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
    pub defined: bool,
}

impl Caller {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            defined: true,
        }
    }

    pub fn undefined() -> Self {
        Self {
            file: String::new(),
            line: 0,
            defined: false,
        }
    }

    /// `path:line` with the path as recorded by the compiler
    pub fn full_path(&self) -> String {
        if !self.defined {
            return "undefined".to_string();
        }
        format!("{}:{}", self.file, self.line)
    }

    /// `file.rs:line`, the file's base name only
    pub fn trimmed_path(&self) -> String {
        if !self.defined {
            return "undefined".to_string();
        }
        let base = Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file);
        format!("{}:{}", base, self.line)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trimmed_path())
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub logger_name: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub caller: Option<Caller>,
    pub stack: Option<String>,
    pub fields: Fields,
}

impl LogEntry {
    /// The message is stored as given; line-oriented encoders escape it
    pub fn new(logger_name: impl Into<String>, level: LogLevel, message: String) -> Self {
        Self {
            logger_name: logger_name.into(),
            timestamp: Utc::now(),
            level,
            message,
            caller: None,
            stack: None,
            fields: Fields::new(),
        }
    }

    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
