//! # Message Store Service
//!
//! The main service implementing the Message Store API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `MessageStoreApi` for list/read/add/update/clear/remove
//! 2. Enforces no-read-up on every read and no-write-down on every write
//! 3. Persists after every successful mutation, rolling back on failure
//! 4. Uses dependency injection for the backend and the clock
//!
//! ## Concurrency
//!
//! The message sequence and the id counter sit behind one `RwLock`. Every
//! mutation holds the write lock across both the in-memory change and the
//! save, so memory and file never diverge.

mod persistence;
mod store;

use std::path::Path;

use parking_lot::RwLock;

use crate::adapters::{FileMessageBackend, InMemoryMessageBackend, SystemClock};
use crate::domain::{LoadReport, Message, MessageId, FIRST_MESSAGE_ID};
use crate::ports::outbound::{Clock, MessageBackend};

/// Mutable state guarded by the service lock.
#[derive(Debug)]
pub(crate) struct StoreState {
    /// Insertion order = display order = file order.
    pub(crate) messages: Vec<Message>,
    /// Next id to hand out. Owned by the store instance.
    pub(crate) next_id: MessageId,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: FIRST_MESSAGE_ID,
        }
    }

    pub(crate) fn position(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id() == id)
    }
}

/// The Message Store Service.
pub struct MessageStoreService<B, C>
where
    B: MessageBackend,
    C: Clock,
{
    /// Line-oriented persistence.
    pub(crate) backend: B,
    /// Time source for new messages.
    pub(crate) clock: C,
    /// Messages and id counter.
    pub(crate) state: RwLock<StoreState>,
}

/// Dependencies for MessageStoreService
pub struct MessageStoreDependencies<B, C> {
    pub backend: B,
    pub clock: C,
}

/// Store over a text file with the system clock.
pub type FileMessageStore = MessageStoreService<FileMessageBackend, SystemClock>;

/// Store over the in-memory backend, for tests.
pub type InMemoryMessageStore<C = SystemClock> = MessageStoreService<InMemoryMessageBackend, C>;

impl<B, C> MessageStoreService<B, C>
where
    B: MessageBackend,
    C: Clock,
{
    /// Create an empty, unloaded store.
    pub fn new(deps: MessageStoreDependencies<B, C>) -> Self {
        Self {
            backend: deps.backend,
            clock: deps.clock,
            state: RwLock::new(StoreState::empty()),
        }
    }

    /// Create a store and load it from the backend.
    pub fn open(deps: MessageStoreDependencies<B, C>) -> (Self, LoadReport) {
        let service = Self::new(deps);
        let report = service.load_from_backend();
        (service, report)
    }

    /// The persistence backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl FileMessageStore {
    /// Open the store persisted at `path`.
    pub fn open_file<P: AsRef<Path>>(path: P) -> (Self, LoadReport) {
        Self::open(MessageStoreDependencies {
            backend: FileMessageBackend::new(path),
            clock: SystemClock,
        })
    }
}
