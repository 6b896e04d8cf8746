//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Buffer sink; clones share the same buffer, so a test can keep one handle
/// and give the other to a logger.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    syncs: Arc<Mutex<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Number of times `sync` was called
    pub fn sync_count(&self) -> usize {
        *self.syncs.lock()
    }
}

impl Sink for MemorySink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        *self.syncs.lock() += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
