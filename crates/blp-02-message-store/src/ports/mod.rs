//! # Ports Layer
//!
//! Defines the port traits for the Message Store subsystem.
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving ports (API exposed to the shell)
//! - `outbound.rs` - Driven ports (dependencies required by the service)

pub mod inbound;
pub mod outbound;

pub use inbound::MessageStoreApi;
pub use outbound::{Clock, MessageBackend};
