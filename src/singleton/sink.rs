//! Append-only text log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::InstanceError;

/// Append-mode log file shared by every writer.
///
/// Each line is written and flushed while holding the lock, so lines from
/// concurrent writers never interleave. The handle is closed by [`close`](Self::close)
/// or when the sink is dropped.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl LogSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    /// [`InstanceError::ResourceInit`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| InstanceError::ResourceInit {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "Opened log sink");

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Append `line` followed by a newline and flush.
    ///
    /// # Errors
    /// [`InstanceError::SinkClosed`] after [`close`](Self::close),
    /// [`InstanceError::Write`] on I/O failure.
    pub fn append_line(&self, line: &str) -> Result<(), InstanceError> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or_else(|| InstanceError::SinkClosed {
            path: self.path.clone(),
        })?;

        writeln!(file, "{line}")
            .and_then(|()| file.flush())
            .map_err(|source| InstanceError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Close the file. Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        let closed = self.file.lock().take().is_some();
        if closed {
            debug!(path = %self.path.display(), "Closed log sink");
        }
        closed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
