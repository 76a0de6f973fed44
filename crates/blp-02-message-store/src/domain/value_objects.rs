//! # Value Objects
//!
//! Small immutable values shared by the store and its callers.

/// Message identifier. Assigned by the store, starting at 1.
pub type MessageId = u64;

/// First id handed out by an empty store.
pub const FIRST_MESSAGE_ID: MessageId = 1;

/// `chrono` format of message timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Outcome of a write check against one message.
///
/// Distinguishes a missing id from a *-property violation; `get_for`
/// deliberately does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAccess {
    /// The message exists and the subject may write it.
    Granted,
    /// The message exists but lies below the subject's clearance.
    Denied,
    /// No message has this id.
    NotFound,
}

impl WriteAccess {
    pub fn is_granted(self) -> bool {
        matches!(self, WriteAccess::Granted)
    }
}

/// Where the last `load()` got its data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Backing file read successfully.
    Loaded,
    /// Backing file does not exist yet; the store starts empty.
    Missing,
    /// Backing file exists but could not be read; the store starts empty.
    Unavailable { reason: String },
}

/// Summary of a `load()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Messages now in the store.
    pub loaded: usize,
    /// Malformed lines discarded.
    pub skipped: usize,
}

impl LoadReport {
    pub(crate) fn empty(source: LoadSource) -> Self {
        Self {
            source,
            loaded: 0,
            skipped: 0,
        }
    }

    /// True when the store was populated from the backing file (possibly
    /// with zero records).
    pub fn is_loaded(&self) -> bool {
        self.source == LoadSource::Loaded
    }
}
