//! # BLP Message Vault Test Suite
//!
//! Cross-crate tests that wire the policy, the store and the shell together
//! the way the binary does.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs  # Access-control scenarios over the in-memory backend
//!     └── flows.rs      # File-backed persistence, locking, full shell sessions
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p blp-tests
//! cargo test -p blp-tests integration::flows::
//! ```

pub mod integration;
