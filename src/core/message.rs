//! Message helpers for multi-value call sites

use std::fmt;

/// Renders a sequence of values back to back, with no separator.
///
/// This is how a call with several values becomes one message:
///
/// ```
/// use teelog::core::Concat;
///
/// let port = 8080;
/// assert_eq!(Concat(&[&"listening on :", &port]).to_string(), "listening on :8080");
/// ```
#[derive(Clone, Copy)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
