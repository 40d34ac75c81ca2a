//! The log-backed instance handed out by [`Singleton`](super::Singleton).

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::error::InstanceError;

use super::sink::LogSink;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of an [`Instance`].
///
/// Tokens are unique within the process, so two handles carry the same token
/// if and only if they point at the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// An integer payload plus an open append-mode log file.
#[derive(Debug)]
pub struct Instance {
    id: InstanceId,
    value: i64,
    sink: LogSink,
}

impl Instance {
    /// Open the log file at `log_path` and assign a fresh identity.
    ///
    /// # Errors
    /// [`InstanceError::ResourceInit`] when the log file cannot be opened.
    pub fn open(value: i64, log_path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let sink = LogSink::open(log_path)?;
        Ok(Self {
            id: InstanceId::next(),
            value,
            sink,
        })
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn identity(&self) -> InstanceId {
        self.id
    }

    /// Append `message` as one line of the log file and echo it to the
    /// operator log.
    ///
    /// # Errors
    /// Fails once the instance has been released, or on I/O failure.
    pub fn log(&self, message: &str) -> Result<(), InstanceError> {
        self.sink.append_line(message)?;
        info!(instance = %self.id, line = message, "Log");
        Ok(())
    }

    /// Close the log file. Returns `false` if it was already closed.
    pub fn release(&self) -> bool {
        let released = self.sink.close();
        if released {
            info!(instance = %self.id, "Released instance");
        }
        released
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        !self.sink.is_open()
    }

    #[must_use]
    pub fn log_path(&self) -> &Path {
        self.sink.path()
    }
}
