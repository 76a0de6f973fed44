//! # Ports Layer
//!
//! - `outbound.rs` - Driven ports (credential source)

pub mod outbound;

pub use outbound::CredentialProvider;
