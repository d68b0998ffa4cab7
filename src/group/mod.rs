//! The indexed task group: drive a vector of futures concurrently and collect
//! their outputs in the vector's order.
//!
//! Every future gets its own slot, numbered by its position in the vector.
//! When a future completes its output is written into that slot, and once
//! all slots are filled the outputs are read back in index order. The order in
//! which the futures happen to finish never shows up in the output.
//!
//! | Name      | Return signature    | When does it return? |
//! | ---       | ---                 | ---                  |
//! | `Join`    | `Vec<T>`            | Wait for all to complete
//! | `TryJoin` | `Result<Vec<T>, E>` | Return on first `Err`, wait for all to complete
//!
//! # Examples
//!
//! ```
//! use collection_concurrency::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let a = future::ready(1);
//!     let b = future::ready(2);
//!     let c = future::ready(3);
//!     assert_eq!(vec![a, b, c].join().await, vec![1, 2, 3]);
//!
//!     let a = future::ready(Ok(1));
//!     let b = future::ready(Err("oh no"));
//!     let res: Result<Vec<u8>, _> = vec![a, b].try_join().await;
//!     assert_eq!(res, Err("oh no"));
//! })
//! ```

use core::future::Future;

pub(crate) mod join;
pub(crate) mod try_join;

/// Wait for all futures to complete.
///
/// Awaits multiple futures concurrently, returning their outputs in the
/// order the futures were given in once all of them complete.
pub trait Join {
    /// The resulting output type.
    type Output;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Self::Output>;

    /// Waits for multiple futures to complete.
    ///
    /// This function returns a new future which polls all futures
    /// concurrently.
    fn join(self) -> Self::Future;
}

/// Wait for all futures to complete successfully, or abort early on error.
///
/// In the case a future errors, all other futures will be cancelled. If
/// futures have been completed, their results will be discarded.
pub trait TryJoin {
    /// The resulting output type.
    type Output;

    /// The resulting error type.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Waits for multiple futures to complete, short-circuiting on the first
    /// error.
    ///
    /// When several futures fail within the same round of polling, the one
    /// with the lowest index wins. Beyond that, which error is returned
    /// depends on the order in which the futures are woken.
    fn try_join(self) -> Self::Future;
}
