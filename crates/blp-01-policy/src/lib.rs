//! # BLP-01 Policy
//!
//! The Bell-LaPadula policy engine: the security-level lattice, the two
//! dominance rules, and subject authentication.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (domain + ports/adapters)
//!
//! ## Rules
//!
//! | Property | Predicate | Meaning |
//! |----------|-----------|---------|
//! | Simple security | `can_read(s, o)` ⇔ `s >= o` | No read up |
//! | *-property | `can_write(s, o)` ⇔ `s <= o` | No write down |
//!
//! ## Module Structure
//!
//! ```text
//! blp-01-policy/
//! ├── domain/      # SecurityLevel, Subject, rules, errors
//! ├── ports/       # CredentialProvider
//! ├── adapters/    # StaticCredentials, RosterFile
//! └── service.rs   # authenticate
//! ```
//!
//! ## Usage
//!
//! ```
//! use blp_01_policy::{authenticate, can_read, SecurityLevel, StaticCredentials};
//!
//! let creds = StaticCredentials::default();
//! let subject = authenticate(&creds, "SeamanSam", "password").unwrap();
//! assert!(can_read(subject.level(), SecurityLevel::Public));
//! assert!(!can_read(subject.level(), SecurityLevel::Secret));
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    PasswordPolicy, RosterEntry, RosterFile, StaticCredentials, DEFAULT_SHARED_PASSWORD,
};
pub use domain::{
    can_read, can_write, dominates, level_to_string, parse_level, try_parse_level, AuthError,
    SecurityLevel, Subject, UnknownLevel,
};
pub use ports::CredentialProvider;
pub use service::authenticate;
