//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the Message Store service.

use crate::domain::errors::BackendError;

/// Line-oriented persistence for the message collection.
///
/// Production: `FileMessageBackend` (atomic temp-file + rename)
/// Testing: `InMemoryMessageBackend`
pub trait MessageBackend: Send + Sync {
    /// Read every stored line as raw bytes, terminators stripped.
    ///
    /// Lines are decoded one at a time by the store, so a single bad line
    /// never hides the rest of the file. Returns `Ok(None)` when nothing has
    /// been persisted yet.
    fn read_lines(&self) -> Result<Option<Vec<Vec<u8>>>, BackendError>;

    /// Replace the stored contents with `lines`, one record per line.
    ///
    /// ## Atomicity
    ///
    /// Either the whole new content is visible afterwards or the old content
    /// is left untouched.
    fn write_lines(&self, lines: &[String]) -> Result<(), BackendError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Abstract interface for wall-clock time (for testability).
pub trait Clock: Send + Sync {
    /// Current local time rendered with
    /// [`TIMESTAMP_FORMAT`](crate::domain::TIMESTAMP_FORMAT).
    fn now_timestamp(&self) -> String;
}
