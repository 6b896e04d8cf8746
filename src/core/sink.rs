//! Sink trait for log output destinations

use super::error::Result;

/// A synchronized, append-only write target.
///
/// Implementations serialize their own writes: one `write` call lands as one
/// contiguous run of bytes even when called from many threads at once.
pub trait Sink: Send + Sync {
    fn write(&self, bytes: &[u8]) -> Result<()>;
    /// Flush anything buffered down to the underlying stream
    fn sync(&self) -> Result<()>;
    fn name(&self) -> &str;
}
