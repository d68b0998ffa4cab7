use core::ops::{Deref, DerefMut};
use core::task::Waker;

/// Readiness for targets without a lock: every slot is always considered
/// ready, so each wake-up re-polls every pending slot.
#[derive(Debug)]
pub(crate) struct ReadinessVec;

impl ReadinessVec {
    /// Returns whether the index was previously ready
    pub(crate) fn clear_ready(&mut self, _index: usize) -> bool {
        true
    }

    /// Returns `true` if any of the slots are ready.
    pub(crate) fn any_ready(&self) -> bool {
        true
    }

    /// Slots are polled with the parent waker directly, so there is nothing
    /// to remember.
    pub(crate) fn set_waker(&mut self, _parent_waker: &Waker) {}
}

/// Exclusive access to the [`ReadinessVec`], shaped like the lock guard
/// handed out with `std`.
pub(crate) struct ReadinessVecRef<'a> {
    inner: &'a mut ReadinessVec,
}

impl Deref for ReadinessVecRef<'_> {
    type Target = ReadinessVec;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl DerefMut for ReadinessVecRef<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

/// A collection of wakers which all delegate to the parent waker.
pub(crate) struct WakerVec {
    readiness: ReadinessVec,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(_len: usize) -> Self {
        Self {
            readiness: ReadinessVec,
        }
    }

    /// Slots are polled with the parent waker.
    pub(crate) fn get(&self, _index: usize) -> Option<&Waker> {
        None
    }

    /// Access the `Readiness`.
    pub(crate) fn readiness(&mut self) -> ReadinessVecRef<'_> {
        ReadinessVecRef {
            inner: &mut self.readiness,
        }
    }
}
