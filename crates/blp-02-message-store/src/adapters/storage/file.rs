use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::errors::BackendError;
use crate::ports::outbound::MessageBackend;

/// Text-file backend for the message collection.
///
/// Reads the whole file on load and rewrites it on every save. Saves go
/// through a sibling temp file that is fsynced and renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileMessageBackend {
    path: PathBuf,
}

impl FileMessageBackend {
    /// Create a backend for the file at `path`. Nothing is touched yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the messages file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("messages"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, err: std::io::Error) -> BackendError {
        BackendError::from_io(err, &self.path)
    }
}

/// Split file content on `\n`, dropping a trailing `\r` from each line.
fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

impl MessageBackend for FileMessageBackend {
    fn read_lines(&self) -> Result<Option<Vec<Vec<u8>>>, BackendError> {
        match fs::read(&self.path) {
            Ok(content) => {
                tracing::debug!(
                    "[blp-02] Read {} bytes from {}",
                    content.len(),
                    self.path.display()
                );
                Ok(Some(split_lines(&content)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_err(e)),
        }
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), BackendError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        // Write atomically via temp file
        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| self.io_err(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.io_err(e))?;
        file.sync_all().map_err(|e| self.io_err(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.io_err(e)
        })?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
