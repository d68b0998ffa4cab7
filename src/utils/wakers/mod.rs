//! Per-slot wakers for the indexed task group.
//!
//! With `std` every slot gets its own waker. Waking it marks the slot as
//! "ready" in a shared bitset and forwards the wake-up to the parent task, so
//! the group only re-polls the slots that asked for it. Without `std` there is
//! no lock to guard the bitset with, so every slot is handed the parent waker
//! directly and all pending slots are polled on every wake-up.

#[cfg(feature = "std")]
mod readiness;
#[cfg(feature = "std")]
mod waker;
#[cfg(feature = "std")]
mod waker_vec;

#[cfg(not(feature = "std"))]
mod no_std;

#[cfg(feature = "std")]
pub(crate) use waker_vec::WakerVec;

#[cfg(not(feature = "std"))]
pub(crate) use no_std::WakerVec;
