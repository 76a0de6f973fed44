//! # Store Process Locking
//!
//! Prevents two shells from operating on the same messages file.
//!
//! ## Security Purpose
//!
//! The store keeps the whole collection in memory and rewrites the file on
//! every mutation. Two processes on one file would silently overwrite each
//! other's changes.
//!
//! ## Implementation
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on
//! Windows) on a sibling `<file>.lock`.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

/// Errors from store locking.
#[derive(Debug, Error)]
pub enum LockError {
    /// Lock file could not be created.
    #[error("Failed to create lock file: {0}")]
    CreateFailed(#[source] io::Error),

    /// Store is already locked by another process.
    #[error("Message store already in use{} ({})", holder(.pid), .path.display())]
    AlreadyLocked { pid: Option<u32>, path: PathBuf },

    /// Failed to write PID to lock file.
    #[error("Failed to write PID to lock file: {0}")]
    WriteFailed(#[source] io::Error),
}

fn holder(pid: &Option<u32>) -> String {
    pid.map(|p| format!(" by process {}", p)).unwrap_or_default()
}

/// Exclusive lock on a messages file.
///
/// Acquired when a session opens the store, released on drop (RAII).
///
/// # Example
///
/// ```ignore
/// let lock = StoreLock::acquire(Path::new("messages.txt"))?;
/// // Lock is held until `lock` goes out of scope
/// ```
#[derive(Debug)]
pub struct StoreLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
    /// PID of this process
    pid: u32,
}

impl StoreLock {
    /// Lock file path for a messages file.
    pub fn lock_path_for(messages_file: &Path) -> PathBuf {
        let mut name: OsString = messages_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("messages"));
        name.push(".lock");
        messages_file.with_file_name(name)
    }

    /// Acquire an exclusive lock on the messages file.
    ///
    /// # Errors
    ///
    /// Returns `LockError::AlreadyLocked` if another process holds the lock.
    pub fn acquire(messages_file: &Path) -> Result<Self, LockError> {
        let lock_path = Self::lock_path_for(messages_file);

        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(LockError::CreateFailed)?;
        }

        // Not truncated yet: the holder's PID must survive a failed attempt.
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(LockError::CreateFailed)?;

        if file.try_lock_exclusive().is_err() {
            let existing_pid = Self::read_existing_pid(&lock_path);
            return Err(LockError::AlreadyLocked {
                pid: existing_pid,
                path: lock_path,
            });
        }

        let pid = std::process::id();
        let mut locked_file = file;
        locked_file.set_len(0).map_err(LockError::WriteFailed)?;
        writeln!(locked_file, "{}", pid).map_err(LockError::WriteFailed)?;
        locked_file.sync_all().map_err(LockError::WriteFailed)?;

        tracing::debug!("[blp-02] 🔒 Acquired store lock {}", lock_path.display());

        Ok(Self {
            file: locked_file,
            path: lock_path,
            pid,
        })
    }

    /// Get the PID of the process holding the lock
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        let _ = std::fs::remove_file(&self.path);
    }
}
