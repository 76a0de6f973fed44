//! # Domain Errors
//!
//! Error types for the Message Store subsystem.
//!
//! Access denials and missing ids are NOT errors: they come back as
//! `Option`, `bool` or [`WriteAccess`](super::value_objects::WriteAccess)
//! values. Errors here are storage failures and unrepresentable input.

use thiserror::Error;

/// A persisted line that could not be turned into a message.
///
/// Never propagated out of `load()`: the line is skipped and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Neither the 4-field nor the 5-field layout.
    #[error("Expected 4 or 5 fields, found {found}")]
    FieldCount { found: usize },

    /// 5-field layout whose id is not a decimal integer.
    #[error("Invalid message id '{raw}'")]
    InvalidId { raw: String },

    /// Line is not valid UTF-8.
    #[error("Invalid UTF-8 after byte {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Backend (file) errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// I/O error during read/write.
    #[error("Backend I/O error: {message}")]
    IoError { message: String },

    /// Permission denied by the host.
    #[error("Backend permission denied: {path}")]
    PermissionDenied { path: String },
}

impl BackendError {
    /// Map an `io::Error` raised while touching `path`.
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => BackendError::PermissionDenied {
                path: path.display().to_string(),
            },
            _ => BackendError::IoError {
                message: format!("{}: {}", path.display(), err),
            },
        }
    }
}

/// Errors returned by mutating store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The mutation could not be persisted; in-memory state was rolled back.
    #[error("Storage unavailable: {0}")]
    Backend(#[from] BackendError),

    /// Text contains the field delimiter and would corrupt the record.
    #[error("Message text may not contain the '|' delimiter")]
    DelimiterInText,

    /// Author name contains the delimiter or a line break.
    #[error("Author name '{author}' cannot be stored")]
    UnrepresentableAuthor { author: String },
}
