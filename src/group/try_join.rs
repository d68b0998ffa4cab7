use super::TryJoin as TryJoinTrait;
use crate::utils::{SlotVec, WakerVec};

use alloc::vec::Vec;
use core::fmt;
use core::future::{Future, IntoFuture};
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

/// A future which waits for all futures to complete successfully, or abort early on error.
///
/// This `struct` is created by the [`try_join`] method on the [`TryJoin`] trait. See
/// its documentation for more.
///
/// [`try_join`]: crate::group::TryJoin::try_join
/// [`TryJoin`]: crate::group::TryJoin
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// A boolean which holds whether the future has completed
    consumed: bool,
    /// The number of futures which are currently still in-flight
    pending: usize,
    /// The per-slot wakers, and which of them have fired since the last poll.
    wakers: WakerVec,
    /// The futures, each replaced by its output once it completes.
    slots: SlotVec<Fut>,
    _marker: PhantomData<fn() -> Result<T, E>>,
}

impl<Fut, T, E> TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let len = futures.len();
        tracing::trace!(len, "joining fallible futures");
        Self {
            consumed: false,
            pending: len,
            wakers: WakerVec::new(len),
            slots: SlotVec::new(futures),
            _marker: PhantomData,
        }
    }
}

impl<Fut, T, E> TryJoinTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<T>;
    type Error = E;
    type Future = TryJoin<Fut::IntoFuture, T, E>;

    fn try_join(self) -> Self::Future {
        TryJoin::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryJoin")
            .field("len", &self.slots.len())
            .field("pending", &self.pending)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl<Fut, T, E> Future for TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        assert!(!this.consumed, "Futures must not be polled after completing");

        if this.pending > 0 {
            {
                let mut readiness = this.wakers.readiness();
                readiness.set_waker(cx.waker());
                if !readiness.any_ready() {
                    // Nothing is ready yet
                    return Poll::Pending;
                }
            }

            for (index, mut slot) in this.slots.iter_mut().enumerate() {
                let woken = this.wakers.readiness().clear_ready(index);
                if !woken || !slot.is_pending() {
                    continue;
                }

                let waker = this.wakers.get(index).unwrap_or(cx.waker());
                let mut cx = Context::from_waker(waker);
                if slot.as_mut().poll_fill(&mut cx).is_pending() {
                    continue;
                }
                this.pending -= 1;

                // Check the value, short-circuit on error.
                if let Some(err) = slot.take_err() {
                    // The future should no longer be polled after we're done here
                    this.consumed = true;
                    tracing::trace!(
                        index,
                        pending = this.pending,
                        "joined future failed, abandoning the rest"
                    );
                    return Poll::Ready(Err(err));
                }
            }
        }

        // Check whether we're all done now or need to keep going.
        if this.pending == 0 {
            this.consumed = true;
            tracing::trace!(len = this.slots.len(), "all joined futures succeeded");
            // Every slot holds an `Ok`: an `Err` would have returned above.
            let items = this.slots.take_outputs().filter_map(Result::ok).collect();
            Poll::Ready(Ok(items))
        } else {
            Poll::Pending
        }
    }
}
