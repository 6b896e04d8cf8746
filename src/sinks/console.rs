//! Standard stream sinks

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Writes to the process's standard error stream.
///
/// Each write holds the stream lock for the whole buffer.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        std::io::stderr()
            .lock()
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing", "stderr", e))
    }

    fn sync(&self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

/// Writes to the process's standard output stream.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing", "stdout", e))
    }

    fn sync(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
