//! # Authentication Service
//!
//! Turns a username/password pair into a [`Subject`] using an injected
//! [`CredentialProvider`].

use tracing::{debug, info};

use crate::domain::{AuthError, Subject};
use crate::ports::outbound::CredentialProvider;

/// Authenticate a user and resolve their clearance.
///
/// Fails with [`AuthError::InvalidCredentials`] when the provider rejects
/// the password. Unknown usernames that pass the password check get
/// `Public` clearance.
pub fn authenticate<P>(provider: &P, username: &str, password: &str) -> Result<Subject, AuthError>
where
    P: CredentialProvider + ?Sized,
{
    if !provider.verify_password(username, password) {
        debug!("[blp-01] Rejected credentials for '{}'", username);
        return Err(AuthError::InvalidCredentials {
            username: username.to_string(),
        });
    }

    let level = provider.lookup_clearance(username);
    info!("[blp-01] 🔐 '{}' authenticated with {} clearance", username, level);

    Ok(Subject::new(username, level))
}
