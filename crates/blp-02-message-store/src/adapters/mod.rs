//! # Adapters Module
//!
//! Implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: file-backed and in-memory message backends
//! - `infra`: clocks
//! - `lock`: process-level store lock (feature `locking`)

pub mod infra;
#[cfg(feature = "locking")]
pub mod lock;
pub mod storage;

pub use infra::{FixedClock, SystemClock};
#[cfg(feature = "locking")]
pub use lock::{LockError, StoreLock};
pub use storage::{FileMessageBackend, InMemoryMessageBackend};
