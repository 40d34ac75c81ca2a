//! Double-checked lazy initialization.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A slot that is filled at most once, by the first successful initializer.
///
/// Reads after initialization go through the [`OnceLock`] only and never touch
/// the mutex. The mutex serializes initializers, so a fallible initializer runs
/// on one thread at a time and a failure leaves the slot empty for a retry.
pub struct LazySlot<T> {
    value: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> LazySlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// The published value, if any. Never blocks.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Return the value, running `init` first if the slot is still empty.
    ///
    /// `init` runs at most once per successful initialization, no matter how
    /// many threads race here.
    ///
    /// # Errors
    /// Returns the initializer's error. Nothing is published in that case.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let _guard = self.init_lock.lock();
        // Another thread may have published while we waited for the lock.
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let value = init()?;
        Ok(self.value.get_or_init(|| value))
    }
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySlot")
            .field("value", &self.value.get())
            .finish()
    }
}
