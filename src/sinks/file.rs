//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileSink {
    name: String,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path.display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(name.as_str(), e))?;

        Ok(Self {
            name,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.writer
            .lock()
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing", self.name.as_str(), e))
    }

    fn sync(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", self.name.as_str(), e))?;
        writer
            .get_ref()
            .sync_data()
            .map_err(|e| LoggerError::io_operation("syncing", self.name.as_str(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n")?;

        let sink = FileSink::new(&path)?;
        sink.write(b"first\n")?;
        sink.write(b"second\n")?;
        sink.sync()?;

        assert_eq!(fs::read_to_string(&path)?, "existing\nfirst\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_drop_flushes() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("drop.log");
        {
            let sink = FileSink::new(&path)?;
            sink.write(b"buffered\n")?;
        }
        assert_eq!(fs::read_to_string(&path)?, "buffered\n");
        Ok(())
    }
}
