//! BLP Shell: interactive entry point for the message vault.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use blp_02_message_store::{FileMessageStore, LoadSource, StoreLock};
use blp_shell::{Args, Shell, ShellConfig};

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.apply(ShellConfig::from_env());

    init_tracing(&config.log_filter)?;
    info!(
        "[blp-shell] Starting on {} (log filter '{}')",
        config.messages_file.display(),
        config.log_filter
    );

    let credentials = config
        .roster
        .load()
        .context("Failed to load user roster")?;

    // Held for the whole run; released on drop
    let _lock = StoreLock::acquire(&config.messages_file)
        .with_context(|| format!("Cannot lock {}", config.messages_file.display()))?;

    let (store, report) = FileMessageStore::open_file(&config.messages_file);
    if let LoadSource::Unavailable { reason } = &report.source {
        warn!("[blp-shell] Starting with an empty store: {}", reason);
    }
    info!(
        "[blp-shell] {} messages ready ({} skipped)",
        report.loaded, report.skipped
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), &store, &credentials);
    shell.run().context("Console I/O failed")?;

    Ok(())
}
