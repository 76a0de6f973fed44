//! # Domain Errors
//!
//! Error types for the Policy subsystem. Access denials are not errors here;
//! the dominance rules return plain booleans.

use thiserror::Error;

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Password did not match the provider's credential policy.
    #[error("Invalid credentials for user '{username}'")]
    InvalidCredentials { username: String },
}

/// A level name outside the four known levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown security level: '{0}'")]
pub struct UnknownLevel(pub String);
