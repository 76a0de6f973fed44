//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the policy needs from the host application.

use crate::domain::SecurityLevel;

/// Source of credentials and clearances.
///
/// Constructed once at startup and passed explicitly to
/// [`authenticate`](crate::service::authenticate); there is no global user
/// table.
///
/// Production: `StaticCredentials` built from the default roster or a
/// roster file.
/// Testing: any in-test implementation.
pub trait CredentialProvider: Send + Sync {
    /// Clearance for a username. Unknown usernames resolve to `Public`.
    fn lookup_clearance(&self, username: &str) -> SecurityLevel;

    /// True if `candidate` is the right password for `username`.
    fn verify_password(&self, username: &str, candidate: &str) -> bool;

    /// Known usernames, in roster order. Shown before login.
    fn usernames(&self) -> Vec<String>;
}
