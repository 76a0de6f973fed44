use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::domain::errors::BackendError;
use crate::ports::outbound::MessageBackend;

/// In-memory backend for unit tests.
///
/// Counts successful writes so tests can assert that an operation did or
/// did not persist, and can be told to fail writes to exercise rollback.
#[derive(Debug, Default)]
pub struct InMemoryMessageBackend {
    lines: Mutex<Option<Vec<String>>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryMessageBackend {
    /// Backend with nothing persisted (reads as a missing file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with raw file lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(Some(lines.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    /// Currently persisted lines.
    pub fn lines(&self) -> Option<Vec<String>> {
        self.lines.lock().clone()
    }

    /// Number of successful `write_lines` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl MessageBackend for InMemoryMessageBackend {
    fn read_lines(&self) -> Result<Option<Vec<Vec<u8>>>, BackendError> {
        Ok(self
            .lines
            .lock()
            .as_ref()
            .map(|lines| lines.iter().map(|l| l.as_bytes().to_vec()).collect()))
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), BackendError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BackendError::IoError {
                message: "simulated write failure".to_string(),
            });
        }
        *self.lines.lock() = Some(lines.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
