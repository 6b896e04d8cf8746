//! Process-wide logger instance
//!
//! The bootstrap sequence builds one [`Logger`] and installs it here; code
//! that cannot be handed the instance reads it back through [`global`].
//! Installing must happen before the first call that expects it.

use super::{
    error::{LoggerError, Result},
    logger::Logger,
};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide instance.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if one is already
/// installed; the rejected logger is dropped.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    let mut installed = false;
    let current = GLOBAL.get_or_init(|| {
        installed = true;
        logger
    });

    if installed {
        Ok(current)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

/// The process-wide instance, if [`init`] has run
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
