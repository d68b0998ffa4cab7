use super::Join as JoinTrait;
use crate::utils::{SlotVec, WakerVec};

use alloc::vec::Vec;
use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

/// A future which waits for every future in a vector to complete.
///
/// This `struct` is created by the [`join`] method on the [`Join`] trait. See
/// its documentation for more.
///
/// [`join`]: crate::group::Join::join
/// [`Join`]: crate::group::Join
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Join<Fut>
where
    Fut: Future,
{
    /// A boolean which holds whether the future has completed
    consumed: bool,
    /// The number of futures which are currently still in-flight
    pending: usize,
    /// The per-slot wakers, and which of them have fired since the last poll.
    wakers: WakerVec,
    /// The futures, each replaced by its output once it completes.
    slots: SlotVec<Fut>,
}

impl<Fut> Join<Fut>
where
    Fut: Future,
{
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let len = futures.len();
        tracing::trace!(len, "joining futures");
        Self {
            consumed: false,
            pending: len,
            wakers: WakerVec::new(len),
            slots: SlotVec::new(futures),
        }
    }
}

impl<Fut> JoinTrait for Vec<Fut>
where
    Fut: IntoFuture,
{
    type Output = Vec<Fut::Output>;
    type Future = Join<Fut::IntoFuture>;

    fn join(self) -> Self::Future {
        Join::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut> fmt::Debug for Join<Fut>
where
    Fut: Future,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("len", &self.slots.len())
            .field("pending", &self.pending)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl<Fut> Future for Join<Fut>
where
    Fut: Future,
{
    type Output = Vec<Fut::Output>;

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

            for (index, slot) in this.slots.iter_mut().enumerate() {
                let woken = this.wakers.readiness().clear_ready(index);
                if !woken || !slot.is_pending() {
                    continue;
                }

                let waker = this.wakers.get(index).unwrap_or(cx.waker());
                let mut cx = Context::from_waker(waker);
                if slot.poll_fill(&mut cx).is_ready() {
                    this.pending -= 1;
                }
            }
        }

        // Check whether we're all done now or need to keep going.
        if this.pending == 0 {
            this.consumed = true;
            tracing::trace!(len = this.slots.len(), "all joined futures completed");
            Poll::Ready(this.slots.take_outputs().collect())
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;
    use core::future;
    use futures_lite::future::{block_on, yield_now};

    #[test]
    fn smoke() {
        block_on(async {
            let fut = vec![future::ready("hello"), future::ready("world")].join();
            assert_eq!(fut.await, vec!["hello", "world"]);
        });
    }

    #[test]
    fn empty() {
        block_on(async {
            let data: Vec<future::Ready<()>> = vec![];
            let fut = data.join();
            assert_eq!(fut.await, vec![]);
        });
    }

    #[test]
    fn keeps_input_order() {
        block_on(async {
            let finished = Rc::new(Cell::new(0));
            let futures: Vec<_> = (0..4u32)
                .map(|n| {
                    let finished = finished.clone();
                    async move {
                        // Later elements yield fewer times and finish first.
                        for _ in n..4 {
                            yield_now().await;
                        }
                        let position = finished.get();
                        finished.set(position + 1);
                        (n, position)
                    }
                })
                .collect();

            let out = futures.join().await;
            assert_eq!(out, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
        });
    }

    #[cfg(feature = "std")]
    fn noop_waker() -> std::task::Waker {
        struct Noop;
        impl std::task::Wake for Noop {
            fn wake(self: std::sync::Arc<Self>) {}
        }
        std::sync::Arc::new(Noop).into()
    }

    #[cfg(feature = "std")]
    #[test]
    fn only_woken_slots_are_polled() {
        use core::cell::RefCell;
        use core::task::Waker;
        use futures_lite::future::poll_fn;

        let polls = [Rc::new(Cell::new(0)), Rc::new(Cell::new(0))];
        let stored: Rc<RefCell<Option<Waker>>> = Rc::new(RefCell::new(None));
        let futures: Vec<_> = (0..2)
            .map(|index| {
                let polls = polls[index].clone();
                let stored = stored.clone();
                poll_fn(move |cx| {
                    polls.set(polls.get() + 1);
                    if polls.get() > 1 {
                        return Poll::Ready(index);
                    }
                    // Only the first slot ever arranges to be woken.
                    if index == 0 {
                        *stored.borrow_mut() = Some(cx.waker().clone());
                    }
                    Poll::Pending
                })
            })
            .collect();

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = futures.join();

        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!([polls[0].get(), polls[1].get()], [1, 1]);

        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!([polls[0].get(), polls[1].get()], [1, 1]);

        if let Some(waker) = stored.borrow_mut().take() {
            waker.wake();
        }
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!([polls[0].get(), polls[1].get()], [2, 1]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn drop_releases_futures_and_outputs() {
        struct Guard(Rc<Cell<usize>>);
        impl Drop for Guard {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let dropped = Rc::new(Cell::new(0));
        let futures: Vec<_> = (0..2)
            .map(|n| {
                let guard = Guard(dropped.clone());
                async move {
                    if n == 1 {
                        future::pending::<()>().await;
                    }
                    guard
                }
            })
            .collect();

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = futures.join();
        assert!(Pin::new(&mut fut).poll(&mut cx).is_pending());
        assert_eq!(dropped.get(), 0);

        drop(fut);
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn debug() {
        let fut = vec![future::ready(1)].join();
        let s = alloc::format!("{fut:?}");
        assert_eq!(s, "Join { len: 1, pending: 1, consumed: false }");
    }

    #[test]
    #[should_panic(expected = "Futures must not be polled after completing")]
    fn poll_after_completion() {
        block_on(async {
            let mut fut = vec![future::ready(1)].join();
            assert_eq!((&mut fut).await, vec![1]);
            (&mut fut).await;
        });
    }
}
