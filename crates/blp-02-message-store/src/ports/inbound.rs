//! # Inbound Ports (Driving Ports)
//!
//! The API the Message Store exposes to the shell.
//!
//! Every read is filtered by no-read-up, every write by no-write-down.
//! An access denial is an ordinary return value, never an error.

use blp_01_policy::{SecurityLevel, Subject};

use crate::domain::{LoadReport, Message, MessageId, StoreError, WriteAccess};

/// Primary API for the Message Store subsystem.
pub trait MessageStoreApi: Send + Sync {
    // === Persistence ===

    /// Replace in-memory state with the backing file's contents.
    ///
    /// Malformed lines are skipped; ids are renumbered 1..N in file order.
    /// A missing or unreadable file yields an empty store, never an error.
    fn load(&self) -> LoadReport;

    /// Write the whole collection back to the backing file.
    fn save(&self) -> Result<(), StoreError>;

    // === Reads (no read up) ===

    /// Messages the subject may read, in store order.
    fn list_for(&self, subject: &Subject) -> Vec<Message>;

    /// One message, only if it exists AND the subject may read it.
    ///
    /// A missing id and an unreadable one are indistinguishable.
    fn get_for(&self, subject: &Subject, id: MessageId) -> Option<Message>;

    // === Writes (no write down) ===

    /// Post a new message at `level` (default: the subject's clearance).
    ///
    /// Returns `Ok(None)` when the level is below the subject's clearance.
    fn add_message(
        &self,
        subject: &Subject,
        text: &str,
        level: Option<SecurityLevel>,
    ) -> Result<Option<Message>, StoreError>;

    /// Replace the text of an existing message.
    ///
    /// Returns `Ok(false)` if the id is unknown or the message lies below
    /// the subject's clearance.
    fn update_message(
        &self,
        subject: &Subject,
        id: MessageId,
        new_text: &str,
    ) -> Result<bool, StoreError>;

    /// Clear the text of every writable message at `level`.
    ///
    /// Returns the number cleared; 0 when the subject may not write `level`.
    fn clear_messages_at_level(
        &self,
        subject: &Subject,
        level: SecurityLevel,
    ) -> Result<usize, StoreError>;

    /// Logically remove one message: text, author and timestamp blanked.
    fn remove_message(&self, subject: &Subject, id: MessageId) -> Result<WriteAccess, StoreError>;

    /// Check write access to one message without changing anything.
    fn write_access(&self, subject: &Subject, id: MessageId) -> WriteAccess;

    // === Introspection ===

    /// Number of messages, cleared ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
