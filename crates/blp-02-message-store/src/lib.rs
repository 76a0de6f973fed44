//! # Message Store (blp-02)
//!
//! The ordered collection of classified messages and its backing text file.
//! Every read goes through no-read-up, every write through no-write-down.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (domain + ports/adapters + service)
//!
//! ## Persistence
//!
//! One message per line, `|`-delimited. Two layouts are accepted on load and
//! the extended one is always written:
//!
//! ```text
//! 12|AdmiralAbe|2024-03-01 09:15|Secret|Sink the Bismarck    (extended)
//! Confidential|SeamanSam|2024-03-01 09:20|Hood is hit        (legacy)
//! ```
//!
//! Loading renumbers messages 1..N in file order. Every successful mutation
//! rewrites the whole file atomically (temp file + rename); if the write
//! fails the in-memory change is rolled back.
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | No read up | `list_for`/`get_for` only return messages the subject dominates |
//! | No write down | add/update/clear/remove require the target level to dominate the subject |
//! | Unique ids | Ids strictly increase within one store instance and are never reused |
//! | Stable order | Display order = insertion order = file order |
//! | Logical delete | Clearing/removing blanks fields but keeps the slot and id |
//!
//! ## Crate Structure
//!
//! - `domain/` - Message entity, record codec, value objects, errors
//! - `ports/` - `MessageStoreApi` (inbound), `MessageBackend` + `Clock` (outbound)
//! - `adapters/` - File and in-memory backends, clocks, store lock
//! - `service/` - `MessageStoreService` implementing the API
//!
//! ## Usage
//!
//! ```
//! use blp_01_policy::{authenticate, StaticCredentials};
//! use blp_02_message_store::{
//!     InMemoryMessageBackend, MessageStoreApi, MessageStoreDependencies,
//!     MessageStoreService, SystemClock,
//! };
//!
//! let (store, _report) = MessageStoreService::open(MessageStoreDependencies {
//!     backend: InMemoryMessageBackend::new(),
//!     clock: SystemClock,
//! });
//!
//! let sam = authenticate(&StaticCredentials::default(), "SeamanSam", "password").unwrap();
//! let posted = store.add_message(&sam, "Hood is hit", None).unwrap().unwrap();
//! assert_eq!(posted.id(), 1);
//! assert_eq!(store.list_for(&sam).len(), 1);
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

// Re-export key types for convenience
pub use adapters::{FileMessageBackend, FixedClock, InMemoryMessageBackend, SystemClock};
#[cfg(feature = "locking")]
pub use adapters::{LockError, StoreLock};
pub use domain::errors::{BackendError, RecordError, StoreError};
pub use domain::message::Message;
pub use domain::record::{decode_line, parse_line, ParsedRecord};
pub use domain::value_objects::{
    LoadReport, LoadSource, MessageId, WriteAccess, FIRST_MESSAGE_ID, TIMESTAMP_FORMAT,
};
pub use ports::inbound::MessageStoreApi;
pub use ports::outbound::{Clock, MessageBackend};
pub use service::{
    FileMessageStore, InMemoryMessageStore, MessageStoreDependencies, MessageStoreService,
};
