//! # Message Store API Implementation
//!
//! Implements the MessageStoreApi trait: policy-filtered reads and
//! policy-gated, immediately persisted writes.

use blp_01_policy::{can_write, SecurityLevel, Subject};
use tracing::info;

use super::MessageStoreService;
use crate::domain::record::{is_field_representable, is_representable};
use crate::domain::{LoadReport, Message, MessageId, StoreError, WriteAccess};
use crate::ports::inbound::MessageStoreApi;
use crate::ports::outbound::{Clock, MessageBackend};

fn ensure_representable(text: &str) -> Result<(), StoreError> {
    if is_representable(text) {
        Ok(())
    } else {
        Err(StoreError::DelimiterInText)
    }
}

fn ensure_author_representable(author: &str) -> Result<(), StoreError> {
    if is_field_representable(author) {
        Ok(())
    } else {
        Err(StoreError::UnrepresentableAuthor {
            author: author.to_string(),
        })
    }
}

impl<B, C> MessageStoreApi for MessageStoreService<B, C>
where
    B: MessageBackend,
    C: Clock,
{
    fn load(&self) -> LoadReport {
        self.load_from_backend()
    }

    fn save(&self) -> Result<(), StoreError> {
        let state = self.state.read();
        self.persist(&state)
    }

    fn list_for(&self, subject: &Subject) -> Vec<Message> {
        self.state
            .read()
            .messages
            .iter()
            .filter(|m| m.may_read(subject))
            .cloned()
            .collect()
    }

    fn get_for(&self, subject: &Subject, id: MessageId) -> Option<Message> {
        self.state
            .read()
            .messages
            .iter()
            .find(|m| m.id() == id)
            .filter(|m| m.may_read(subject))
            .cloned()
    }

    fn add_message(
        &self,
        subject: &Subject,
        text: &str,
        level: Option<SecurityLevel>,
    ) -> Result<Option<Message>, StoreError> {
        let level = level.unwrap_or(subject.level());

        // *-property: no write down
        if !can_write(subject.level(), level) {
            info!(
                "[blp-02] ⛔ {} ({}) denied write at {}",
                subject.username(),
                subject.level(),
                level
            );
            return Ok(None);
        }
        ensure_author_representable(subject.username())?;
        ensure_representable(text)?;

        let mut state = self.state.write();
        let message = Message::new(
            state.next_id,
            subject.username(),
            text,
            self.clock.now_timestamp(),
            level,
        );
        state.messages.push(message.clone());

        if let Err(e) = self.persist(&state) {
            state.messages.pop();
            return Err(e);
        }
        state.next_id += 1;

        info!(
            "[blp-02] ✓ Message {} posted by {} at {}",
            message.id(),
            subject.username(),
            level
        );
        Ok(Some(message))
    }

    fn update_message(
        &self,
        subject: &Subject,
        id: MessageId,
        new_text: &str,
    ) -> Result<bool, StoreError> {
        let mut state = self.state.write();
        let Some(index) = state.position(id) else {
            return Ok(false);
        };
        if !state.messages[index].may_write(subject) {
            info!(
                "[blp-02] ⛔ {} ({}) denied update of message {}",
                subject.username(),
                subject.level(),
                id
            );
            return Ok(false);
        }
        ensure_representable(new_text)?;

        let previous = state.messages[index].replace_text(new_text.to_string());
        if let Err(e) = self.persist(&state) {
            state.messages[index].replace_text(previous);
            return Err(e);
        }

        info!("[blp-02] ✓ Message {} updated by {}", id, subject.username());
        Ok(true)
    }

    fn clear_messages_at_level(
        &self,
        subject: &Subject,
        level: SecurityLevel,
    ) -> Result<usize, StoreError> {
        if !can_write(subject.level(), level) {
            info!(
                "[blp-02] ⛔ {} ({}) denied clearing level {}",
                subject.username(),
                subject.level(),
                level
            );
            return Ok(0);
        }

        let mut state = self.state.write();
        let mut cleared: Vec<(usize, String)> = Vec::new();
        for (index, message) in state.messages.iter_mut().enumerate() {
            if message.level() == level && message.may_write(subject) && !message.is_cleared() {
                cleared.push((index, message.replace_text(String::new())));
            }
        }

        if cleared.is_empty() {
            return Ok(0);
        }

        if let Err(e) = self.persist(&state) {
            for (index, text) in cleared {
                state.messages[index].replace_text(text);
            }
            return Err(e);
        }

        info!(
            "[blp-02] ✓ {} cleared {} messages at {}",
            subject.username(),
            cleared.len(),
            level
        );
        Ok(cleared.len())
    }

    fn remove_message(&self, subject: &Subject, id: MessageId) -> Result<WriteAccess, StoreError> {
        let mut state = self.state.write();
        let Some(index) = state.position(id) else {
            return Ok(WriteAccess::NotFound);
        };
        if !state.messages[index].may_write(subject) {
            return Ok(WriteAccess::Denied);
        }

        let snapshot = state.messages[index].clone();
        state.messages[index].tombstone();
        if let Err(e) = self.persist(&state) {
            state.messages[index] = snapshot;
            return Err(e);
        }

        info!("[blp-02] ✓ Message {} removed by {}", id, subject.username());
        Ok(WriteAccess::Granted)
    }

    fn write_access(&self, subject: &Subject, id: MessageId) -> WriteAccess {
        let state = self.state.read();
        match state.messages.iter().find(|m| m.id() == id) {
            None => WriteAccess::NotFound,
            Some(m) if m.may_write(subject) => WriteAccess::Granted,
            Some(_) => WriteAccess::Denied,
        }
    }

    fn len(&self) -> usize {
        self.state.read().messages.len()
    }
}
