//! Command-line flags. Each flag overrides the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ShellConfig;

/// BLP Message Vault: classified messages under Bell-LaPadula
#[derive(Parser, Debug, Default)]
#[command(name = "blp-shell")]
#[command(about = "Interactive shell for reading and posting classified messages")]
pub struct Args {
    /// Backing messages file
    #[arg(short, long, value_name = "PATH")]
    pub messages_file: Option<PathBuf>,

    /// TOML roster file (replaces the built-in roster)
    #[arg(short, long, value_name = "PATH", conflicts_with = "shared_password")]
    pub roster: Option<PathBuf>,

    /// Shared password for the built-in roster
    #[arg(long, value_name = "SECRET")]
    pub shared_password: Option<String>,

    /// Log filter, e.g. "info" or "blp_02_message_store=debug"
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    /// Layer the flags over `config`.
    pub fn apply(self, mut config: ShellConfig) -> ShellConfig {
        if let Some(path) = self.messages_file {
            config = config.with_messages_file(path);
        }
        if let Some(secret) = self.shared_password {
            config = config.with_shared_password(secret);
        }
        if let Some(path) = self.roster {
            config = config.with_roster_file(path);
        }
        if let Some(filter) = self.log {
            config = config.with_log_filter(filter);
        }
        config
    }
}
