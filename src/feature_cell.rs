#[cfg(feature = "customize")]
use std::sync::{PoisonError, RwLock};

/// Allows mutation, behind a lock, if the "customize" feature is enabled. Otherwise, the value
/// is immutable and reads are lock-free.
pub(crate) struct FeatureCell<T> {
    #[cfg(feature = "customize")]
    inner: RwLock<T>,
    #[cfg(not(feature = "customize"))]
    inner: T,
}

impl<T> FeatureCell<T> {
    pub fn new(val: T) -> Self {
        Self {
            #[cfg(feature = "customize")]
            inner: RwLock::new(val),
            #[cfg(not(feature = "customize"))]
            inner: val,
        }
    }

    /// Runs `f` with shared access. Any number of readers may run concurrently.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        #[cfg(feature = "customize")]
        return f(&self.inner.read().unwrap_or_else(PoisonError::into_inner));
        #[cfg(not(feature = "customize"))]
        return f(&self.inner);
    }

    /// Runs `f` with exclusive access, waiting for readers to finish.
    #[cfg(feature = "customize")]
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner))
    }
}
