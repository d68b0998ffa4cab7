use std::sync::{Arc, Mutex, PoisonError};
use std::task::Wake;

use super::readiness::ReadinessVec;

/// A waker for a single slot which records the wake-up before delegating to
/// the parent waker.
#[derive(Debug)]
pub(crate) struct InlineWakerVec {
    pub(crate) index: usize,
    pub(crate) readiness: Arc<Mutex<ReadinessVec>>,
}

impl InlineWakerVec {
    /// Create a new instance of `InlineWakerVec`.
    pub(crate) fn new(index: usize, readiness: Arc<Mutex<ReadinessVec>>) -> Self {
        Self { index, readiness }
    }
}

impl Wake for InlineWakerVec {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let mut readiness = self
            .readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Only the first wake-up since the last poll needs to reach the parent.
        if !readiness.set_ready(self.index) {
            if let Some(parent) = readiness.parent_waker() {
                parent.wake_by_ref();
            }
        }
    }
}
