//! # Domain Layer
//!
//! Pure domain logic for the Message Store subsystem.
//!
//! ## Modules
//!
//! - `message` - The Message entity and its per-record policy checks
//! - `record` - Line codec for both persisted layouts
//! - `value_objects` - Ids, load reports, write-check outcomes
//! - `errors` - Domain error types

pub mod errors;
pub mod message;
pub mod record;
pub mod value_objects;

pub use errors::{BackendError, RecordError, StoreError};
pub use message::Message;
pub use record::{decode_line, parse_line, ParsedRecord};
pub use value_objects::{
    LoadReport, LoadSource, MessageId, WriteAccess, FIRST_MESSAGE_ID, TIMESTAMP_FORMAT,
};
