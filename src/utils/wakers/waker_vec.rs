use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::Waker;

use super::readiness::ReadinessVec;
use super::waker::InlineWakerVec;

/// A collection of wakers which delegate to an in-line waker.
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(ReadinessVec::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(InlineWakerVec::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    /// The waker to poll the slot at `index` with.
    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// Lock the `Readiness`.
    ///
    /// A panic while the lock was held cannot leave the bitset half-updated,
    /// so a poisoned lock is simply taken over.
    pub(crate) fn readiness(&self) -> MutexGuard<'_, ReadinessVec> {
        self.readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
