//! Call-site resolution
//!
//! The public logging methods are `#[track_caller]`, so the compiler hands
//! the pipeline the application's call site directly and no internal frame
//! ever has to be skipped. A resolver turns that location into a [`Caller`];
//! tests substitute their own to count or fail resolutions.

use super::log_entry::Caller;
use std::panic::Location;

pub trait CallerResolver: Send + Sync {
    /// Resolve the call site, or `None` when no location is available
    fn resolve(&self, site: &'static Location<'static>) -> Option<Caller>;
}

/// Resolves from the compiler-provided `#[track_caller]` location.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackedCaller;

impl CallerResolver for TrackedCaller {
    fn resolve(&self, site: &'static Location<'static>) -> Option<Caller> {
        Some(Caller::new(site.file(), site.line()))
    }
}
