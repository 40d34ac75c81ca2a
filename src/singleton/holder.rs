use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::error::InstanceError;

use super::guard::LazySlot;
use super::instance::Instance;

/// Process-scoped owner of the one [`Instance`].
///
/// Create one at startup and pass it (or an `Arc` of it) to whoever needs the
/// instance. The instance itself is built lazily by the first
/// [`get_instance`](Self::get_instance) call; every later call returns the
/// same handle and ignores its argument.
///
/// If the log file cannot be opened the call fails and nothing is stored, so
/// a later call may try again.
#[derive(Debug)]
pub struct Singleton {
    log_path: PathBuf,
    slot: LazySlot<Arc<Instance>>,
}

impl Singleton {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            slot: LazySlot::new(),
        }
    }

    /// The instance, constructed with `init_value` if it does not exist yet.
    ///
    /// # Errors
    /// [`InstanceError::ResourceInit`] when the first construction cannot open
    /// the log file.
    pub fn get_instance(&self, init_value: i64) -> Result<Arc<Instance>, InstanceError> {
        let instance = self.slot.get_or_try_init(|| {
            let instance = Instance::open(init_value, &self.log_path)?;
            info!(
                instance = %instance.identity(),
                value = init_value,
                path = %self.log_path.display(),
                "Constructed singleton instance"
            );
            Ok::<_, InstanceError>(Arc::new(instance))
        })?;
        Ok(Arc::clone(instance))
    }

    /// The instance if it has been constructed. Never constructs.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Instance>> {
        self.slot.get().cloned()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.slot.is_initialized()
    }

    /// Release the instance's log file, if an instance exists.
    pub fn release(&self) -> bool {
        self.slot.get().is_some_and(|instance| instance.release())
    }

    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl Drop for Singleton {
    fn drop(&mut self) {
        self.release();
    }
}
