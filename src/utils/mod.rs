//! Utilities to implement the indexed task group.

mod pin;
mod slots;
mod wakers;

pub(crate) use pin::iter_pin_mut;
pub(crate) use slots::SlotVec;
pub(crate) use wakers::WakerVec;
