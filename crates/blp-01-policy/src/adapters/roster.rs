//! # Static Roster
//!
//! In-memory credential provider: a fixed username → clearance table plus
//! one of two password policies.
//!
//! | Policy | Known user | Unknown user |
//! |--------|------------|--------------|
//! | `PerUser` | exact match against stored password | always rejected |
//! | `Shared` | shared secret | shared secret, `Public` clearance |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::SecurityLevel;
use crate::ports::outbound::CredentialProvider;

/// Password accepted by the default roster.
pub const DEFAULT_SHARED_PASSWORD: &str = "password";

/// How candidate passwords are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// Each user has a stored password; users without one cannot log in.
    PerUser(HashMap<String, String>),
    /// One password for every username, known or not.
    Shared(String),
}

/// Credential provider backed by a static roster.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    roster: Vec<(String, SecurityLevel)>,
    passwords: PasswordPolicy,
}

impl StaticCredentials {
    /// Create a provider from a roster and a password policy.
    pub fn new(roster: Vec<(String, SecurityLevel)>, passwords: PasswordPolicy) -> Self {
        Self { roster, passwords }
    }

    /// The built-in naval roster.
    pub fn default_roster() -> Vec<(String, SecurityLevel)> {
        [
            ("AdmiralAbe", SecurityLevel::Secret),
            ("CaptainCharlie", SecurityLevel::Privileged),
            ("SeamanSam", SecurityLevel::Confidential),
            ("SeamanSue", SecurityLevel::Confidential),
            ("SeamanSly", SecurityLevel::Confidential),
        ]
        .into_iter()
        .map(|(name, level)| (name.to_string(), level))
        .collect()
    }

    /// Default roster, one shared password for everybody.
    pub fn with_shared_password(secret: impl Into<String>) -> Self {
        Self::new(Self::default_roster(), PasswordPolicy::Shared(secret.into()))
    }

    /// Default roster, every known user with the same stored password.
    ///
    /// Unlike [`with_shared_password`](Self::with_shared_password), unknown
    /// usernames are rejected.
    pub fn with_per_user_password(secret: &str) -> Self {
        let roster = Self::default_roster();
        let passwords = roster
            .iter()
            .map(|(name, _)| (name.clone(), secret.to_string()))
            .collect();
        Self::new(roster, PasswordPolicy::PerUser(passwords))
    }

    /// Active password policy.
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.passwords
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::with_shared_password(DEFAULT_SHARED_PASSWORD)
    }
}

impl CredentialProvider for StaticCredentials {
    fn lookup_clearance(&self, username: &str) -> SecurityLevel {
        self.roster
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, level)| *level)
            .unwrap_or_default()
    }

    fn verify_password(&self, username: &str, candidate: &str) -> bool {
        match &self.passwords {
            PasswordPolicy::Shared(secret) => secret == candidate,
            PasswordPolicy::PerUser(stored) => stored
                .get(username)
                .is_some_and(|password| password == candidate),
        }
    }

    fn usernames(&self) -> Vec<String> {
        self.roster.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// On-disk roster description.
///
/// ```toml
/// shared_password = "password"   # optional; omit for per-user passwords
///
/// [[users]]
/// name = "AdmiralAbe"
/// level = "secret"
/// password = "anchors"           # used only without shared_password
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFile {
    /// Shared secret. When present, per-user passwords are ignored.
    #[serde(default)]
    pub shared_password: Option<String>,
    /// Roster entries, in display order.
    #[serde(default)]
    pub users: Vec<RosterEntry>,
}

/// One user in a [`RosterFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    pub name: String,
    pub level: SecurityLevel,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<RosterFile> for StaticCredentials {
    fn from(file: RosterFile) -> Self {
        let roster = file
            .users
            .iter()
            .map(|entry| (entry.name.clone(), entry.level))
            .collect();

        let passwords = match file.shared_password {
            Some(secret) => PasswordPolicy::Shared(secret),
            None => PasswordPolicy::PerUser(
                file.users
                    .into_iter()
                    .filter_map(|entry| entry.password.map(|password| (entry.name, password)))
                    .collect(),
            ),
        };

        Self::new(roster, passwords)
    }
}
