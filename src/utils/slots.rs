use alloc::boxed::Box;
use alloc::vec::Vec;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project::pin_project;

use super::iter_pin_mut;

/// One position of a [`SlotVec`].
///
/// A slot starts out holding the future for its index. Once that future
/// completes its output is written back into the same slot, where it stays
/// until the group collects it.
#[pin_project(project = SlotProj, project_ref = SlotProjRef, project_replace = SlotProjReplace)]
pub(crate) enum Slot<Fut: Future> {
    /// The future has not completed yet.
    Pending(#[pin] Fut),
    /// The future completed; its output waits to be collected.
    Ready(Fut::Output),
    /// The output has been moved out of the slot.
    Taken,
}

impl<Fut: Future> Slot<Fut> {
    /// Returns `true` if the slot still holds a running future.
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Poll the future in the slot, replacing it with its output once it
    /// completes.
    ///
    /// # Panics
    ///
    /// Panics if the output was already taken.
    pub(crate) fn poll_fill(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let output = match self.as_mut().project() {
            SlotProj::Pending(fut) => ready!(fut.poll(cx)),
            SlotProj::Ready(_) => return Poll::Ready(()),
            SlotProj::Taken => panic!("slot polled after its output was taken"),
        };
        self.set(Self::Ready(output));
        Poll::Ready(())
    }

    /// Move the output out of the slot, if it has one.
    pub(crate) fn take(self: Pin<&mut Self>) -> Option<Fut::Output> {
        if !matches!(self.as_ref().project_ref(), SlotProjRef::Ready(_)) {
            return None;
        }
        match self.project_replace(Self::Taken) {
            SlotProjReplace::Ready(output) => Some(output),
            _ => None,
        }
    }
}

impl<T, E, Fut> Slot<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Move the error out of the slot if its future completed with `Err`.
    /// A successful output is left in place.
    pub(crate) fn take_err(self: Pin<&mut Self>) -> Option<E> {
        if !matches!(self.as_ref().project_ref(), SlotProjRef::Ready(Err(_))) {
            return None;
        }
        match self.project_replace(Self::Taken) {
            SlotProjReplace::Ready(Err(err)) => Some(err),
            _ => None,
        }
    }
}

/// A fixed-size, heap-pinned arena of slots, one per input index.
///
/// Slot `i` is only ever written by the future created for index `i`, so the
/// outputs come back in input order no matter which futures finish first.
pub(crate) struct SlotVec<Fut: Future> {
    slots: Pin<Box<[Slot<Fut>]>>,
}

impl<Fut: Future> SlotVec<Fut> {
    /// Place every future in its own slot, keeping the vector's order.
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let slots: Box<[Slot<Fut>]> = futures.into_iter().map(Slot::Pending).collect();
        Self {
            slots: Box::into_pin(slots),
        }
    }

    /// The number of slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over the pinned slots in index order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = Pin<&mut Slot<Fut>>> {
        iter_pin_mut(self.slots.as_mut())
    }

    /// Move every available output out of the arena, in index order.
    pub(crate) fn take_outputs(&mut self) -> impl Iterator<Item = Fut::Output> + '_ {
        self.iter_mut().filter_map(Slot::take)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use core::future;
    use futures_lite::future::{block_on, poll_fn, yield_now};

    #[test]
    fn fills_slots_in_index_order() {
        block_on(async {
            let mut slots = SlotVec::new(vec![future::ready(1), future::ready(2)]);
            assert_eq!(slots.len(), 2);

            poll_fn(|cx| {
                for slot in slots.iter_mut() {
                    assert!(slot.is_pending());
                    assert!(slot.poll_fill(cx).is_ready());
                }
                Poll::Ready(())
            })
            .await;

            let outputs: Vec<_> = slots.take_outputs().collect();
            assert_eq!(outputs, [1, 2]);
            assert_eq!(slots.take_outputs().count(), 0);
        });
    }

    #[test]
    fn pending_slot_has_no_output() {
        block_on(async {
            let mut slots = SlotVec::new(vec![Box::pin(yield_now())]);
            poll_fn(|cx| {
                let mut slot = slots.iter_mut().next().unwrap();
                assert!(slot.as_mut().poll_fill(cx).is_pending());
                assert!(slot.is_pending());
                assert!(slot.take().is_none());
                Poll::Ready(())
            })
            .await;
        });
    }

    #[test]
    fn take_err_leaves_ok_in_place() {
        block_on(async {
            let mut slots = SlotVec::new(vec![future::ready(Ok(1)), future::ready(Err("boom"))]);
            poll_fn(|cx| {
                for slot in slots.iter_mut() {
                    assert!(slot.poll_fill(cx).is_ready());
                }
                Poll::Ready(())
            })
            .await;

            let errors: Vec<_> = slots.iter_mut().filter_map(Slot::take_err).collect();
            assert_eq!(errors, ["boom"]);
            let outputs: Vec<_> = slots.take_outputs().collect();
            assert_eq!(outputs, [Ok(1)]);
        });
    }

    #[test]
    #[should_panic(expected = "slot polled after its output was taken")]
    fn poll_after_take_panics() {
        block_on(async {
            let mut slots = SlotVec::new(vec![future::ready(())]);
            poll_fn(|cx| {
                let mut slot = slots.iter_mut().next().unwrap();
                let _ = slot.as_mut().poll_fill(cx);
                let _ = slot.as_mut().take();
                let _ = slot.poll_fill(cx);
                Poll::Ready(())
            })
            .await;
        });
    }
}
