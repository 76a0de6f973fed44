//! # Subject
//!
//! An authenticated user and the clearance resolved for them at login.

use super::level::SecurityLevel;

/// A Bell-LaPadula subject.
///
/// Immutable for the whole session. Obtained from
/// [`authenticate`](crate::service::authenticate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    username: String,
    level: SecurityLevel,
}

impl Subject {
    pub(crate) fn new(username: impl Into<String>, level: SecurityLevel) -> Self {
        Self {
            username: username.into(),
            level,
        }
    }

    /// Build a subject without going through a credential provider.
    ///
    /// Only for tests and fixtures in downstream crates.
    #[doc(hidden)]
    pub fn for_testing(username: impl Into<String>, level: SecurityLevel) -> Self {
        Self::new(username, level)
    }

    /// Login name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Clearance.
    pub fn level(&self) -> SecurityLevel {
        self.level
    }
}
