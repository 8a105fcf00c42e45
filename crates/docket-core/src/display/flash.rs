//! Flash message formatting.

use std::fmt;

/// One-time notifications shown at the top of a page, one quote line each.
pub struct FlashMessages<'a>(pub &'a [String]);

impl fmt::Display for FlashMessages<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        for message in self.0 {
            writeln!(f, "> {message}")?;
        }
        writeln!(f)
    }
}
