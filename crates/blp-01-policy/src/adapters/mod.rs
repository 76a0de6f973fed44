//! # Adapters Module
//!
//! - `roster`: static credential provider and its TOML description

pub mod roster;

pub use roster::{
    PasswordPolicy, RosterEntry, RosterFile, StaticCredentials, DEFAULT_SHARED_PASSWORD,
};
