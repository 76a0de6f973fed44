//! # Message Entity
//!
//! One protected record. id, author, timestamp and level are fixed at
//! creation; only the text changes afterwards (plus the blanking done by a
//! logical remove). A message is never physically destroyed.

use blp_01_policy::{can_read, can_write, SecurityLevel, Subject};

use super::record;
use super::value_objects::MessageId;

/// A message owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    author: String,
    text: String,
    timestamp: String,
    level: SecurityLevel,
}

impl Message {
    /// Create a message.
    pub fn new(
        id: MessageId,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
        level: SecurityLevel,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp: timestamp.into(),
            level,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    /// No read up.
    pub fn may_read(&self, subject: &Subject) -> bool {
        can_read(subject.level(), self.level)
    }

    /// No write down.
    pub fn may_write(&self, subject: &Subject) -> bool {
        can_write(subject.level(), self.level)
    }

    /// True once the text has been cleared.
    pub fn is_cleared(&self) -> bool {
        self.text.is_empty()
    }

    /// One-line summary for listings. Rendered for cleared messages too.
    pub fn short_header(&self) -> String {
        format!(
            "[{:03}] ({}) {} @ {}",
            self.id, self.level, self.author, self.timestamp
        )
    }

    /// Text for full display, or `None` for a cleared message.
    pub fn display_text(&self) -> Option<&str> {
        (!self.is_cleared()).then_some(self.text.as_str())
    }

    /// Extended-layout record line (no trailing newline).
    pub fn to_line(&self) -> String {
        record::encode(self)
    }

    pub(crate) fn assign_id(&mut self, id: MessageId) {
        self.id = id;
    }

    /// Swap in new text, handing back the old one.
    pub(crate) fn replace_text(&mut self, text: String) -> String {
        std::mem::replace(&mut self.text, text)
    }

    /// Logical remove: text, author and timestamp blanked; id and level kept.
    pub(crate) fn tombstone(&mut self) {
        self.text.clear();
        self.author.clear();
        self.timestamp.clear();
    }
}
