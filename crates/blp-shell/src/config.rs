//! # Shell Configuration
//!
//! Defaults, then environment variables, then command-line flags.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `BLP_MESSAGES_FILE` | `messages_file` | `messages.txt` |
//! | `BLP_ROSTER` | `roster` (TOML roster file) | built-in roster |
//! | `BLP_SHARED_PASSWORD` | `roster` (built-in shared password) | `password` |
//! | `BLP_LOG` | `log_filter` | `warn` |

use std::path::{Path, PathBuf};

use blp_01_policy::{RosterFile, StaticCredentials, DEFAULT_SHARED_PASSWORD};
use thiserror::Error;
use tracing::info;

pub const ENV_MESSAGES_FILE: &str = "BLP_MESSAGES_FILE";
pub const ENV_ROSTER: &str = "BLP_ROSTER";
pub const ENV_SHARED_PASSWORD: &str = "BLP_SHARED_PASSWORD";
pub const ENV_LOG: &str = "BLP_LOG";

pub const DEFAULT_MESSAGES_FILE: &str = "messages.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read roster file {}: {source}", path.display())]
    RosterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster file {}: {source}", path.display())]
    RosterParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Roster file {} lists no users", path.display())]
    EmptyRoster { path: PathBuf },
}

/// Where the user roster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Built-in naval roster, one shared password.
    Builtin { shared_password: String },
    /// TOML roster file.
    File(PathBuf),
}

impl Default for RosterSource {
    fn default() -> Self {
        RosterSource::Builtin {
            shared_password: DEFAULT_SHARED_PASSWORD.to_string(),
        }
    }
}

impl RosterSource {
    /// Build the credential provider.
    pub fn load(&self) -> Result<StaticCredentials, ConfigError> {
        match self {
            RosterSource::Builtin { shared_password } => {
                Ok(StaticCredentials::with_shared_password(shared_password.clone()))
            }
            RosterSource::File(path) => load_roster_file(path),
        }
    }
}

fn load_roster_file(path: &Path) -> Result<StaticCredentials, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: RosterFile = toml::from_str(&raw).map_err(|source| ConfigError::RosterParse {
        path: path.to_path_buf(),
        source,
    })?;
    if file.users.is_empty() {
        return Err(ConfigError::EmptyRoster {
            path: path.to_path_buf(),
        });
    }

    info!(
        "[blp-shell] Loaded {} users from {}",
        file.users.len(),
        path.display()
    );
    Ok(StaticCredentials::from(file))
}

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Backing text file of the message store.
    pub messages_file: PathBuf,
    /// Credential source.
    pub roster: RosterSource,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            messages_file: PathBuf::from(DEFAULT_MESSAGES_FILE),
            roster: RosterSource::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup.
    ///
    /// A roster file takes precedence over a shared password.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_empty(ENV_MESSAGES_FILE) {
            self.messages_file = PathBuf::from(path);
        }
        if let Some(secret) = non_empty(ENV_SHARED_PASSWORD) {
            self = self.with_shared_password(secret);
        }
        if let Some(path) = non_empty(ENV_ROSTER) {
            self = self.with_roster_file(path);
        }
        if let Some(filter) = non_empty(ENV_LOG) {
            self.log_filter = filter;
        }
        self
    }

    pub fn with_messages_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.messages_file = path.into();
        self
    }

    pub fn with_roster_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster = RosterSource::File(path.into());
        self
    }

    /// Use the built-in roster with this shared password.
    pub fn with_shared_password(mut self, secret: impl Into<String>) -> Self {
        self.roster = RosterSource::Builtin {
            shared_password: secret.into(),
        };
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
