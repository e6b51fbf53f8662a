//! Error conversion helpers for console I/O
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// console.write_line(BANNER).io_context("write banner")?;
    /// ```
    fn io_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Io {
            context: action.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_wraps_as_io_variant() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let err = result.io_context("write prompt").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: write prompt");
        assert!(matches!(err, ApplicationError::Io { .. }));
    }
}
